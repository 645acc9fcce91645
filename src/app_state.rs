use std::sync::Arc;

use crate::clients::anilist_client::AniListClient;
use crate::clients::kapowarr_client::KapowarrClient;
use crate::clients::open_library_client::OpenLibraryClient;
use crate::clients::readarr_client::ReadarrClient;
use crate::clients::{build_http_client, BookAcquisition, BookCatalog, ComicAcquisition, ComicCatalog};
use crate::config::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub book_catalog: Arc<dyn BookCatalog>,
    pub comic_catalog: Arc<dyn ComicCatalog>,
    pub readarr: Arc<dyn BookAcquisition>,
    pub kapowarr: Arc<dyn ComicAcquisition>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let timeout = config.request_timeout();
        let client = build_http_client(timeout)?;

        Ok(Self {
            book_catalog: Arc::new(OpenLibraryClient::new(client.clone(), &config.open_library_url, timeout)),
            comic_catalog: Arc::new(AniListClient::new(client.clone(), &config.anilist_url, timeout)),
            readarr: Arc::new(ReadarrClient::new(client.clone(), config.readarr(), timeout)),
            kapowarr: Arc::new(KapowarrClient::new(client, config.kapowarr(), timeout)),
        })
    }
}
