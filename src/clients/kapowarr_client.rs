use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::arr_client::ArrClient;
use crate::clients::ComicAcquisition;
use crate::config::app_config::ServiceEndpoint;
use crate::models::errors::ClientError;
use crate::models::kapowarr::KapowarrComicRequest;
use crate::models::media::ComicResult;

pub struct KapowarrClient {
    arr: ArrClient,
}

impl KapowarrClient {
    pub fn new(client: reqwest::Client, endpoint: ServiceEndpoint, timeout: Duration) -> Self {
        Self { arr: ArrClient::new(client, "Kapowarr", endpoint, timeout) }
    }
}

#[async_trait]
impl ComicAcquisition for KapowarrClient {
    fn check_configured(&self) -> Result<(), ClientError> {
        self.arr.check_configured()
    }

    async fn add_comic(&self, comic: &ComicResult) -> Result<Value, ClientError> {
        self.arr.post("/api/comics", &KapowarrComicRequest::from(comic)).await
    }
}
