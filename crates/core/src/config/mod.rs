//! Application configuration with layered loading.
//!
//! Sources, highest precedence first:
//!
//! 1. Environment variables (SHIFTSEARCH_*)
//! 2. TOML config file (SHIFTSEARCH_CONFIG_FILE, or an explicit path)
//! 3. Built-in defaults

use std::path::Path;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::request::{Operator, SearchSettings, SortMethod};
use crate::suggest::{SuggestionCorpus, SuggestionEntry, default_entries};

mod validation;

pub use validation::ConfigError;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SHIFTSEARCH_";

/// Environment variable naming a TOML config file.
pub const CONFIG_FILE_ENV: &str = "SHIFTSEARCH_CONFIG_FILE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the search service.
    ///
    /// Set via SHIFTSEARCH_BASE_URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via SHIFTSEARCH_TIMEOUT_MS.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for HTTP requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Initial boolean operator.
    #[serde(default)]
    pub operator: Operator,

    /// Initial page size; one of 10, 25, 50, 100.
    #[serde(default = "default_results_per_page")]
    pub results_per_page: u32,

    /// Initial sort method tag (`hits` or `alphabetical`).
    #[serde(default)]
    pub sort_method: SortMethod,

    /// Characters stripped from every search term.
    #[serde(default)]
    pub excluded_chars: String,

    /// Autocomplete corpus, scanned in order.
    #[serde(default = "default_entries")]
    pub suggestions: Vec<SuggestionEntry>,
}

fn default_base_url() -> String {
    "http://localhost:8080".into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_user_agent() -> String {
    "shiftsearch/0.1".into()
}

fn default_results_per_page() -> u32 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            operator: Operator::default(),
            results_per_page: default_results_per_page(),
            sort_method: SortMethod::default(),
            excluded_chars: String::new(),
            suggestions: default_entries(),
        }
    }
}

impl AppConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Initial search settings.
    pub fn settings(&self) -> SearchSettings {
        SearchSettings {
            operator: self.operator,
            results_per_page: self.results_per_page,
            sort_method: self.sort_method,
            excluded_chars: self.excluded_chars.clone(),
        }
    }

    pub fn corpus(&self) -> SuggestionCorpus {
        SuggestionCorpus::new(self.suggestions.clone())
    }

    /// Load configuration from all sources.
    ///
    /// The TOML file comes from `SHIFTSEARCH_CONFIG_FILE` when set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or parsed, or if
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var(CONFIG_FILE_ENV).ok();
        Self::load_from(file.as_deref().map(Path::new))
    }

    /// Load configuration with an explicit TOML file in place of
    /// `SHIFTSEARCH_CONFIG_FILE`.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
