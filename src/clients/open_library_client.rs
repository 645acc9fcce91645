use std::time::Duration;

use async_trait::async_trait;
use log::info;

use crate::clients::{ensure_success, BookCatalog};
use crate::models::errors::ClientError;
use crate::models::media::BookResult;
use crate::models::open_library::OpenLibrarySearch;

const BOOK_SEARCH_LIMIT: usize = 5;

pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OpenLibraryClient {
    pub fn new(client: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl BookCatalog for OpenLibraryClient {
    async fn search_books(&self, title: &str) -> Result<Vec<BookResult>, ClientError> {
        let result = self.client.get(format!("{}/search.json", &self.base_url))
            .query(&[("title", title)])
            .query(&[("limit", BOOK_SEARCH_LIMIT)])
            .send().await
            .map_err(|err| ClientError::from_reqwest(err, self.timeout))?;

        info!("GET {} {}", result.url(), result.status());
        ensure_success(&result)?;

        let json = result.json::<OpenLibrarySearch>().await
            .map_err(|err| ClientError::from_reqwest(err, self.timeout))?;

        Ok(json.docs.into_iter().map(BookResult::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::clients::build_http_client;

    fn client_for(server: &MockServer, timeout: Duration) -> OpenLibraryClient {
        OpenLibraryClient::new(build_http_client(timeout).unwrap(), &server.uri(), timeout)
    }

    #[tokio::test]
    async fn search_maps_documents_in_upstream_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("title", "the hobbit"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "numFound": 2,
                "docs": [
                    { "title": "The Hobbit", "author_name": ["J.R.R. Tolkien"], "edition_key": ["OL7353617M"] },
                    { "title": "The Hobbit Companion" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let books = client_for(&server, Duration::from_secs(5))
            .search_books("the hobbit").await.unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "The Hobbit");
        assert_eq!(books[0].author, "J.R.R. Tolkien");
        assert_eq!(
            books[0].cover_url.as_deref(),
            Some("https://covers.openlibrary.org/b/olid/OL7353617M-M.jpg")
        );
        assert_eq!(books[1].title, "The Hobbit Companion");
        assert_eq!(books[1].author, "Unknown Author");
        assert_eq!(books[1].cover_url, None);
    }

    #[tokio::test]
    async fn non_success_status_is_an_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server, Duration::from_secs(5))
            .search_books("dune").await.unwrap_err();

        assert!(matches!(err, ClientError::UpstreamStatus { status, .. } if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server, Duration::from_secs(5))
            .search_books("dune").await.unwrap_err();

        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[tokio::test]
    async fn slow_upstream_is_cut_off() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(json!({ "docs": [] }))
                .set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let err = client_for(&server, Duration::from_millis(200))
            .search_books("dune").await.unwrap_err();

        assert!(matches!(err, ClientError::Timeout(timeout) if timeout == Duration::from_millis(200)));
    }
}
