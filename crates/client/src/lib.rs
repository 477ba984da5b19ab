//! HTTP backend for shiftsearch.
//!
//! Implements [`SearchBackend`] over the search service's JSON endpoints:
//!
//! - `POST /search` with a [`SearchRequest`] body, normalized on return
//! - `POST /click-tracker` with `{clickedUrl}`, response ignored
//! - `POST /remove-link` with `{urlToRemove}`, non-2xx is a failure
//!
//! One attempt per call, no retries. The configured timeout bounds every
//! request, so a hung service surfaces as [`Error::Network`].

use std::time::{Duration, Instant};

use reqwest::{Client, header};
use shiftsearch_core::request::{ClickRequest, RemoveRequest};
use shiftsearch_core::{AppConfig, Error, SearchBackend, SearchRequest, SearchResponse, normalize};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "shiftsearch/0.1";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Service root, e.g. `http://localhost:8080`.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&AppConfig> for ApiConfig {
    fn from(config: &AppConfig) -> Self {
        Self { base_url: config.base_url.clone(), timeout: config.timeout(), user_agent: config.user_agent.clone() }
    }
}

/// Search service client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .build()
            .map_err(|e| Error::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        Self::new(ApiConfig::from(config))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post<T>(&self, path: &str, body: &T) -> Result<reqwest::Response, Error>
    where
        T: serde::Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(path);
        self.http
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| send_error(&url, e))
    }
}

fn send_error(url: &str, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Network(format!("request to {url} timed out"))
    } else {
        Error::Network(format!("request to {url} failed: {err}"))
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), Error> {
    let status = response.status();
    if status.is_success() { Ok(()) } else { Err(Error::HttpStatus { status: status.as_u16() }) }
}

#[async_trait::async_trait]
impl SearchBackend for ApiClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, Error> {
        let start = Instant::now();
        tracing::debug!(
            term = %request.search_term,
            operator = %request.operator,
            page = request.page_number,
            "searching"
        );

        let response = self.post("search", request).await?;
        tracing::debug!("search response status: {}", response.status());
        check_status(&response)?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("failed to read search response: {e}")))?;
        let normalized = normalize::normalize_slice(&bytes)?;

        tracing::debug!("search completed in {:?}, {} results", start.elapsed(), normalized.result_count());

        Ok(normalized)
    }

    async fn track_click(&self, url: &str) -> Result<(), Error> {
        let body = ClickRequest { clicked_url: url.to_string() };
        let response = self.post("click-tracker", &body).await?;
        tracing::debug!("click tracker status: {}", response.status());
        Ok(())
    }

    async fn remove_link(&self, url: &str) -> Result<(), Error> {
        let body = RemoveRequest { url_to_remove: url.to_string() };
        let response = self.post("remove-link", &body).await?;
        check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use shiftsearch_core::{Operator, ResultItem, SortMethod};

    fn client(base_url: String) -> ApiClient {
        ApiClient::new(ApiConfig { base_url, timeout: Duration::from_secs(5), ..Default::default() }).unwrap()
    }

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert_eq!(config.user_agent, "shiftsearch/0.1");
    }

    #[test]
    fn test_api_config_from_app_config() {
        let app = AppConfig { base_url: "http://search:9000".into(), timeout_ms: 1500, ..Default::default() };
        let config = ApiConfig::from(&app);
        assert_eq!(config.base_url, "http://search:9000");
        assert_eq!(config.timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let c = client("http://localhost:8080/".into());
        assert_eq!(c.endpoint("search"), "http://localhost:8080/search");
        let c = client("http://localhost:8080/api".into());
        assert_eq!(c.endpoint("remove-link"), "http://localhost:8080/api/remove-link");
    }

    #[tokio::test]
    async fn test_search_posts_request_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "searchTerm": "cats",
                "operator": "OR",
                "numberOfResults": 25,
                "pageNumber": 0,
                "sortMethod": "hits"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"content": [["Cats are great", "cats.example.com"]], "totalPages": 3, "number": 0}"#)
            .create_async()
            .await;

        let request = SearchRequest::build("cats", Operator::Or, 25, 0, SortMethod::ByHits);
        let response = client(server.url()).search(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.items, vec![ResultItem::new("Cats are great", "cats.example.com")]);
        assert_eq!(response.total_pages, Some(3));
        assert_eq!(response.current_page, Some(0));
    }

    #[tokio::test]
    async fn test_search_record_shaped_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body(r#"{"content": [{"circularShift": "Global Search Engine", "url": "example.com"}, {}]}"#)
            .create_async()
            .await;

        let request = SearchRequest::build("glo", Operator::And, 10, 0, SortMethod::Alphabetical);
        let response = client(server.url()).search(&request).await.unwrap();

        assert_eq!(
            response.items,
            vec![ResultItem::new("Global Search Engine", "example.com"), ResultItem::new("No Description", "#")]
        );
        assert_eq!(response.total_pages, None);
    }

    #[tokio::test]
    async fn test_search_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("POST", "/search").with_status(500).create_async().await;

        let request = SearchRequest::build("cats", Operator::And, 10, 0, SortMethod::ByHits);
        let result = client(server.url()).search(&request).await;
        assert_eq!(result, Err(Error::HttpStatus { status: 500 }));
    }

    #[tokio::test]
    async fn test_search_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body(r#"{"totalPages": 2}"#)
            .create_async()
            .await;

        let request = SearchRequest::build("cats", Operator::And, 10, 0, SortMethod::ByHits);
        let result = client(server.url()).search(&request).await;
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_search_network_error() {
        let request = SearchRequest::build("cats", Operator::And, 10, 0, SortMethod::ByHits);
        let result = client("http://127.0.0.1:1".into()).search(&request).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_track_click_sends_original_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/click-tracker")
            .match_body(Matcher::Json(json!({"clickedUrl": "example.com"})))
            .with_status(204)
            .create_async()
            .await;

        client(server.url()).track_click("example.com").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_track_click_ignores_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("POST", "/click-tracker").with_status(500).create_async().await;

        assert!(client(server.url()).track_click("example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_link() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/remove-link")
            .match_body(Matcher::Json(json!({"urlToRemove": "stale.example.com"})))
            .with_status(200)
            .create_async()
            .await;

        client(server.url()).remove_link("stale.example.com").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_remove_link_non_2xx_fails() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("POST", "/remove-link").with_status(404).create_async().await;

        let result = client(server.url()).remove_link("gone.example.com").await;
        assert_eq!(result, Err(Error::HttpStatus { status: 404 }));
    }
}
