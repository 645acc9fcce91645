use axum::extract::{Query, State};
use axum::Json;
use log::error;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::app_state::AppState;
use crate::handlers::{required, TitleQuery};
use crate::models::errors::{ApiError, ClientError};
use crate::models::media::{BookRequest, BookResult};

#[derive(Serialize, Debug)]
pub struct BooksResponse {
    pub books: Vec<BookResult>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AddBookBody {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct AddBookResponse {
    pub message: String,
    #[serde(rename = "readarrResponse")]
    pub readarr_response: Value,
}

pub async fn search_books(
    State(state): State<AppState>,
    query: Option<Query<TitleQuery>>,
) -> Result<Json<BooksResponse>, ApiError> {
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let title = required(query.title)
        .ok_or_else(|| ApiError::bad_request("Book title is required."))?;

    let books = state.book_catalog.search_books(&title).await
        .map_err(|err| {
            error!("Error in /search-books: {}", err);
            ApiError::from_client_error(&err, "Failed to fetch books.")
        })?;

    Ok(Json(BooksResponse { books }))
}

pub async fn add_book(
    State(state): State<AppState>,
    body: Option<Json<AddBookBody>>,
) -> Result<Json<AddBookResponse>, ApiError> {
    let body = body.map(|Json(body)| body).unwrap_or_default();
    let (title, author) = match (required(body.title), required(body.author)) {
        (Some(title), Some(author)) => (title, author),
        _ => return Err(ApiError::bad_request("Book title and author are required.")),
    };
    state.readarr.check_configured().map_err(add_book_error)?;

    let book = BookRequest { title, author, isbn: required(body.isbn) };
    let readarr_response = state.readarr.add_book(&book).await
        .map_err(add_book_error)?;

    Ok(Json(AddBookResponse {
        message: format!("Book \"{}\" requested successfully in Readarr.", book.title),
        readarr_response,
    }))
}

fn add_book_error(err: ClientError) -> ApiError {
    error!("Error in /add-book: {}", err);
    ApiError::from_client_error(&err, "Failed to add book to Readarr.")
}
