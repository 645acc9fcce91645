use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::arr_client::ArrClient;
use crate::clients::BookAcquisition;
use crate::config::app_config::ServiceEndpoint;
use crate::models::errors::ClientError;
use crate::models::media::BookRequest;
use crate::models::readarr::ReadarrBookRequest;

pub struct ReadarrClient {
    arr: ArrClient,
}

impl ReadarrClient {
    pub fn new(client: reqwest::Client, endpoint: ServiceEndpoint, timeout: Duration) -> Self {
        Self { arr: ArrClient::new(client, "Readarr", endpoint, timeout) }
    }
}

#[async_trait]
impl BookAcquisition for ReadarrClient {
    fn check_configured(&self) -> Result<(), ClientError> {
        self.arr.check_configured()
    }

    async fn add_book(&self, book: &BookRequest) -> Result<Value, ClientError> {
        self.arr.post("/api/v1/book", &ReadarrBookRequest::from(book)).await
    }
}
