use std::time::Duration;

use async_trait::async_trait;
use log::info;
use serde_json::{json, Value};

use crate::clients::{ensure_success, ComicCatalog};
use crate::models::anilist::{AniListPageData, GraphQlRequest, GraphQlResponse};
use crate::models::errors::ClientError;
use crate::models::media::ComicResult;

const TOP_COMICS_LIMIT: u32 = 20;
const SEARCH_COMICS_LIMIT: u32 = 10;

const TOP_COMICS_QUERY: &str = r#"
query ($perPage: Int) {
  Page(perPage: $perPage) {
    media(type: MANGA, sort: POPULARITY_DESC, isAdult: false) {
      id
      title { english romaji }
      coverImage { large }
      description
    }
  }
}
"#;

const SEARCH_COMICS_QUERY: &str = r#"
query ($search: String, $perPage: Int) {
  Page(perPage: $perPage) {
    media(search: $search, type: MANGA, sort: POPULARITY_DESC, isAdult: false) {
      id
      title { english romaji }
      coverImage { large }
      description
    }
  }
}
"#;

pub struct AniListClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl AniListClient {
    pub fn new(client: reqwest::Client, url: &str, timeout: Duration) -> Self {
        Self { client, url: url.to_string(), timeout }
    }

    async fn fetch_page(&self, query: &str, variables: Value) -> Result<Vec<ComicResult>, ClientError> {
        let result = self.client.post(&self.url)
            .json(&GraphQlRequest { query, variables })
            .send().await
            .map_err(|err| ClientError::from_reqwest(err, self.timeout))?;

        info!("POST {} {}", result.url(), result.status());
        ensure_success(&result)?;

        let json = result.json::<GraphQlResponse<AniListPageData>>().await
            .map_err(|err| ClientError::from_reqwest(err, self.timeout))?;

        match json.data {
            Some(data) => Ok(data.page.media.into_iter().map(ComicResult::from).collect()),
            None => {
                let reason = json.errors.into_iter().next()
                    .map(|err| err.message)
                    .unwrap_or_else(|| "response carried no data".to_string());
                Err(ClientError::Parse(reason))
            }
        }
    }
}

#[async_trait]
impl ComicCatalog for AniListClient {
    async fn top_comics(&self) -> Result<Vec<ComicResult>, ClientError> {
        self.fetch_page(TOP_COMICS_QUERY, json!({ "perPage": TOP_COMICS_LIMIT })).await
    }

    async fn search_comics(&self, title: &str) -> Result<Vec<ComicResult>, ClientError> {
        self.fetch_page(
            SEARCH_COMICS_QUERY,
            json!({ "search": title, "perPage": SEARCH_COMICS_LIMIT }),
        ).await
    }
}
