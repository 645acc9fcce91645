use axum::http::Uri;
use log::info;

use crate::models::errors::ApiError;

pub async fn not_found(uri: Uri) -> ApiError {
    info!("no route for {}", uri.path());
    ApiError::not_found("Not found.")
}
