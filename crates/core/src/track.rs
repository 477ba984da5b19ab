//! Click telemetry and navigation target resolution.

use crate::backend::SearchBackend;

/// Prefix `https://` unless `url` already names an http(s) scheme.
///
/// An empty url stays empty.
pub fn resolve_url(url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Record a click on `url` and return where to navigate.
///
/// Telemetry carries the original url. Its failure is logged and never
/// changes the returned target.
pub async fn activate<B>(backend: &B, url: &str) -> String
where
    B: SearchBackend + ?Sized,
{
    let resolved = resolve_url(url);
    if resolved != url {
        tracing::debug!(original = url, resolved = %resolved, "url corrected to absolute form");
    }

    match backend.track_click(url).await {
        Ok(()) => tracing::debug!(url, "click tracked"),
        Err(e) => tracing::warn!(url, error = %e, "click tracking failed; navigating anyway"),
    }

    resolved
}
