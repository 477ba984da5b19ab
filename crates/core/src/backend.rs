//! The seam between console state and the remote search service.

use crate::Error;
use crate::normalize::SearchResponse;
use crate::request::SearchRequest;

/// Remote search service.
///
/// Implementations perform one request per call with no retries.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    /// `POST /search`, returning the normalized response.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, Error>;

    /// `POST /click-tracker` with the url exactly as displayed.
    async fn track_click(&self, url: &str) -> Result<(), Error>;

    /// `POST /remove-link`. Non-2xx is a failure.
    async fn remove_link(&self, url: &str) -> Result<(), Error>;
}
