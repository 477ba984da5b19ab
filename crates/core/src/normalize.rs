//! Search response types and normalization.
//!
//! The backend delivers `content` either as `[description, url]` pairs or as
//! records carrying `circularShift` and `url` fields. The shape is decided
//! once, from the first element, and the whole collection is decoded
//! accordingly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// Shown when a record has no description.
pub const FALLBACK_DESCRIPTION: &str = "No Description";

/// Used when a record has no url.
pub const FALLBACK_URL: &str = "#";

/// Canonical (description, url) result pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultItem {
    pub description: String,
    pub url: String,
}

impl ResultItem {
    pub fn new(description: impl Into<String>, url: impl Into<String>) -> Self {
        Self { description: description.into(), url: url.into() }
    }

    fn from_parts(description: Option<&Value>, url: Option<&Value>) -> Self {
        Self::new(
            description.and_then(Value::as_str).unwrap_or(FALLBACK_DESCRIPTION),
            url.and_then(Value::as_str).unwrap_or(FALLBACK_URL),
        )
    }
}

impl<D: Into<String>, U: Into<String>> From<(D, U)> for ResultItem {
    fn from((description, url): (D, U)) -> Self {
        Self::new(description, url)
    }
}

/// Raw body of `POST /search`.
#[derive(Debug, Deserialize)]
pub struct RawSearchResponse {
    #[serde(default)]
    pub content: Option<Vec<Value>>,
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u32>,
    /// 0-based page the server actually returned.
    #[serde(default)]
    pub number: Option<u32>,
}

/// Normalized search response.
///
/// Pagination fields stay `None` when the server omitted them, so the caller
/// can leave its own state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub total_pages: Option<u32>,
    pub current_page: Option<u32>,
    pub items: Vec<ResultItem>,
}

impl SearchResponse {
    pub fn result_count(&self) -> usize {
        self.items.len()
    }
}

/// Wire shape of the `content` collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentShape {
    /// Elements are `[description, url]` sequences.
    TupleShaped(Vec<Value>),
    /// Elements are records with `circularShift` / `url` fields.
    RecordShaped(Vec<Value>),
}

impl ContentShape {
    /// Classify the collection by its first element.
    pub fn detect(content: Vec<Value>) -> Self {
        if matches!(content.first(), Some(Value::Array(_))) {
            ContentShape::TupleShaped(content)
        } else {
            ContentShape::RecordShaped(content)
        }
    }

    pub fn into_items(self) -> Vec<ResultItem> {
        match self {
            ContentShape::TupleShaped(content) => content
                .iter()
                .map(|element| match element {
                    Value::Array(pair) => ResultItem::from_parts(pair.first(), pair.get(1)),
                    _ => ResultItem::from_parts(None, None),
                })
                .collect(),
            ContentShape::RecordShaped(content) => content
                .iter()
                .map(|element| ResultItem::from_parts(element.get("circularShift"), element.get("url")))
                .collect(),
        }
    }
}

impl TryFrom<RawSearchResponse> for SearchResponse {
    type Error = Error;

    fn try_from(raw: RawSearchResponse) -> Result<Self, Self::Error> {
        let content = raw
            .content
            .ok_or_else(|| Error::MalformedResponse("response has no content collection".into()))?;

        Ok(SearchResponse {
            total_pages: raw.total_pages,
            current_page: raw.number,
            items: ContentShape::detect(content).into_items(),
        })
    }
}

/// Normalize an already-parsed JSON body.
pub fn normalize(raw: Value) -> Result<SearchResponse, Error> {
    let raw: RawSearchResponse =
        serde_json::from_value(raw).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    SearchResponse::try_from(raw)
}

/// Normalize a response body straight from the wire.
pub fn normalize_slice(bytes: &[u8]) -> Result<SearchResponse, Error> {
    let raw: RawSearchResponse =
        serde_json::from_slice(bytes).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    SearchResponse::try_from(raw)
}
