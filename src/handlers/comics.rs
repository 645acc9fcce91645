use axum::extract::{Query, State};
use axum::Json;
use log::{error, info};
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::app_state::AppState;
use crate::handlers::{required, TitleQuery};
use crate::models::errors::{ApiError, ClientError};
use crate::models::media::ComicResult;

const ADD_COMIC_FAILED: &str = "Failed to add comic to Kapowarr.";

#[derive(Serialize, Debug)]
pub struct ComicsResponse {
    pub comics: Vec<ComicResult>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AddComicBody {
    pub title: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct AddComicResponse {
    pub message: String,
    #[serde(rename = "kapowarrResponse")]
    pub kapowarr_response: Value,
}

pub async fn top_comics(
    State(state): State<AppState>,
) -> Result<Json<ComicsResponse>, ApiError> {
    let comics = state.comic_catalog.top_comics().await
        .map_err(|err| {
            error!("Error in /top-comics: {}", err);
            ApiError::from_client_error(&err, "Failed to fetch top comics.")
        })?;

    Ok(Json(ComicsResponse { comics }))
}

pub async fn search_comics(
    State(state): State<AppState>,
    query: Option<Query<TitleQuery>>,
) -> Result<Json<ComicsResponse>, ApiError> {
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let title = required(query.title)
        .ok_or_else(|| ApiError::bad_request("Comic title is required."))?;

    let comics = state.comic_catalog.search_comics(&title).await
        .map_err(|err| {
            error!("Error in /search-comics: {}", err);
            ApiError::from_client_error(&err, "Failed to fetch comics by search.")
        })?;

    Ok(Json(ComicsResponse { comics }))
}

/// Looks the title up on AniList and submits the most popular match.
/// Besides 400 and 500 this answers 404 when AniList has no match for the
/// title, since there is nothing to submit.
pub async fn add_comic(
    State(state): State<AppState>,
    body: Option<Json<AddComicBody>>,
) -> Result<Json<AddComicResponse>, ApiError> {
    let body = body.map(|Json(body)| body).unwrap_or_default();
    let title = required(body.title)
        .ok_or_else(|| ApiError::bad_request("Comic title is required."))?;

    // no point asking AniList if the comic cannot be submitted afterwards
    state.kapowarr.check_configured().map_err(add_comic_error)?;

    let comic = state.comic_catalog.search_comics(&title).await
        .map_err(add_comic_error)?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::not_found(format!("No comic found matching \"{}\".", title)))?;
    info!("/add-comic: \"{}\" resolved to AniList id {}", title, comic.id);

    let kapowarr_response = state.kapowarr.add_comic(&comic).await
        .map_err(add_comic_error)?;

    Ok(Json(AddComicResponse {
        message: format!("Comic \"{}\" added successfully to Kapowarr.", comic.title),
        kapowarr_response,
    }))
}

fn add_comic_error(err: ClientError) -> ApiError {
    error!("Error in /add-comic: {}", err);
    ApiError::from_client_error(&err, ADD_COMIC_FAILED)
}
