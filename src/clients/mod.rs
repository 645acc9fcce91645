use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::errors::ClientError;
use crate::models::media::{BookRequest, BookResult, ComicResult};

pub mod anilist_client;
pub mod arr_client;
pub mod kapowarr_client;
pub mod open_library_client;
pub mod readarr_client;

#[async_trait]
pub trait BookCatalog: Send + Sync {
    async fn search_books(&self, title: &str) -> Result<Vec<BookResult>, ClientError>;
}

#[async_trait]
pub trait ComicCatalog: Send + Sync {
    async fn top_comics(&self) -> Result<Vec<ComicResult>, ClientError>;
    async fn search_comics(&self, title: &str) -> Result<Vec<ComicResult>, ClientError>;
}

#[async_trait]
pub trait BookAcquisition: Send + Sync {
    /// Fails without touching the network when the service is not set up.
    fn check_configured(&self) -> Result<(), ClientError>;
    async fn add_book(&self, book: &BookRequest) -> Result<Value, ClientError>;
}

#[async_trait]
pub trait ComicAcquisition: Send + Sync {
    /// Fails without touching the network when the service is not set up.
    fn check_configured(&self) -> Result<(), ClientError>;
    async fn add_comic(&self, comic: &ComicResult) -> Result<Value, ClientError>;
}

pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

fn ensure_success(response: &reqwest::Response) -> Result<(), ClientError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ClientError::UpstreamStatus {
            status: response.status(),
            url: response.url().to_string(),
        })
    }
}
