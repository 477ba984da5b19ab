//! Core state logic for shiftsearch.
//!
//! This crate provides:
//! - Query filtering and inline suggestions
//! - Search request building and response normalization
//! - Pagination, result list and click handling
//! - The `SearchConsole` state container and its backend seam
//! - Configuration and unified error types

pub mod backend;
pub mod config;
pub mod console;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod pagination;
pub mod request;
pub mod store;
pub mod suggest;
pub mod track;

pub use backend::SearchBackend;
pub use config::{AppConfig, ConfigError};
pub use console::{ConsoleState, DisplayStatus, Intent, PendingSearch, SearchConsole, Setting};
pub use error::Error;
pub use normalize::{ResultItem, SearchResponse};
pub use pagination::{PageControls, PageTarget, PaginationState};
pub use request::{Operator, SearchRequest, SearchSettings, SortMethod};
pub use suggest::SuggestionCorpus;
