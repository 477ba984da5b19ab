//! Search request types and the settings that feed them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Page sizes the backend accepts.
pub const RESULTS_PER_PAGE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Boolean combinator applied to the search terms by the backend.
///
/// Sent on the wire as its label, which is identical to the tag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    #[default]
    And,
    Or,
    Not,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::And, Operator::Or, Operator::Not];

    /// Display label, also the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidSetting(format!("unknown operator: {s}")))
    }
}

/// Result ordering.
///
/// Sent on the wire as its internal tag, which differs from the label shown
/// to the user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortMethod {
    #[default]
    #[serde(rename = "hits")]
    ByHits,
    #[serde(rename = "alphabetical")]
    Alphabetical,
}

impl SortMethod {
    pub const ALL: [SortMethod; 2] = [SortMethod::ByHits, SortMethod::Alphabetical];

    /// Internal tag, the wire value.
    pub fn tag(self) -> &'static str {
        match self {
            SortMethod::ByHits => "hits",
            SortMethod::Alphabetical => "alphabetical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMethod::ByHits => "Number of Visits",
            SortMethod::Alphabetical => "Alphabetical",
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMethod::ALL
            .into_iter()
            .find(|method| method.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidSetting(format!("unknown sort method: {s}")))
    }
}

/// Check a page size against [`RESULTS_PER_PAGE_OPTIONS`].
pub fn validate_results_per_page(n: u32) -> Result<u32, Error> {
    if RESULTS_PER_PAGE_OPTIONS.contains(&n) {
        Ok(n)
    } else {
        Err(Error::InvalidSetting(format!("results per page must be one of {RESULTS_PER_PAGE_OPTIONS:?}, got {n}")))
    }
}

/// User-adjustable search settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub operator: Operator,
    pub results_per_page: u32,
    pub sort_method: SortMethod,
    /// Literal characters stripped from the term before searching.
    pub excluded_chars: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            operator: Operator::And,
            results_per_page: RESULTS_PER_PAGE_OPTIONS[0],
            sort_method: SortMethod::ByHits,
            excluded_chars: String::new(),
        }
    }
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: String,
    pub operator: Operator,
    pub number_of_results: u32,
    /// 0-based.
    pub page_number: u32,
    pub sort_method: SortMethod,
}

impl SearchRequest {
    /// Compose a request from its parts.
    pub fn build(
        term: impl Into<String>, operator: Operator, results_per_page: u32, page_index: u32, sort_method: SortMethod,
    ) -> Self {
        Self {
            search_term: term.into(),
            operator,
            number_of_results: results_per_page,
            page_number: page_index,
            sort_method,
        }
    }

    /// Compose a request for `term` at `page_index` using the current settings.
    pub fn from_settings(term: impl Into<String>, settings: &SearchSettings, page_index: u32) -> Self {
        Self::build(term, settings.operator, settings.results_per_page, page_index, settings.sort_method)
    }

    /// Reject requests that must never reach the backend.
    pub fn validate(&self) -> Result<(), Error> {
        if self.search_term.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }

        validate_results_per_page(self.number_of_results)?;

        Ok(())
    }
}

/// Body of `POST /click-tracker`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClickRequest {
    pub clicked_url: String,
}

/// Body of `POST /remove-link`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRequest {
    pub url_to_remove: String,
}
