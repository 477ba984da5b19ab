//! Search console state container.
//!
//! All user intents go through [`SearchConsole::dispatch`]. Each dispatched
//! search carries a sequence number; a completion whose number is no longer
//! the latest is dropped, so a slow earlier response cannot overwrite a newer
//! one.

use crate::backend::SearchBackend;
use crate::config::AppConfig;
use crate::normalize::{ResultItem, SearchResponse};
use crate::pagination::{PageControls, PageTarget, PaginationController, PaginationState};
use crate::request::{Operator, SearchRequest, SearchSettings, SortMethod, validate_results_per_page};
use crate::store::ResultStore;
use crate::suggest::SuggestionCorpus;
use crate::{Error, filter, track};

/// A single setting change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Operator(Operator),
    ResultsPerPage(u32),
    SortMethod(SortMethod),
    ExcludedChars(String),
}

/// Everything the presentation layer can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The input text changed.
    Input(String),
    /// Replace the input with the current suggestion.
    AcceptSuggestion,
    /// Fresh search from page 0 (Enter, search button, settings apply).
    Submit,
    ChangePage(PageTarget),
    ChangeSetting(Setting),
    /// Remove the result at this position.
    RemoveItem(usize),
    /// Open the result at this position.
    ActivateResult(usize),
}

/// What the result area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Loading,
    /// Nothing typed and nothing to show.
    Prompt,
    NoResults,
    Results,
}

/// A search that has been issued but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub seq: u64,
    pub request: SearchRequest,
}

/// State exposed for display.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    term: String,
    suggestion: Option<String>,
    settings: SearchSettings,
    pagination: PaginationController,
    results: ResultStore,
    loading: bool,
    navigation: Option<String>,
}

impl ConsoleState {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination.state()
    }

    pub fn page_controls(&self) -> Option<PageControls> {
        self.pagination.controls()
    }

    pub fn results(&self) -> &[ResultItem] {
        self.results.items()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Resolved target of the last activated result, if not yet consumed.
    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    pub fn status(&self) -> DisplayStatus {
        if self.loading {
            DisplayStatus::Loading
        } else if !self.results.is_empty() {
            DisplayStatus::Results
        } else if self.term.trim().is_empty() {
            DisplayStatus::Prompt
        } else {
            DisplayStatus::NoResults
        }
    }
}

pub struct SearchConsole<B> {
    backend: B,
    corpus: SuggestionCorpus,
    state: ConsoleState,
    last_seq: u64,
}

impl<B: SearchBackend> SearchConsole<B> {
    pub fn new(backend: B, corpus: SuggestionCorpus, settings: SearchSettings) -> Self {
        Self { backend, corpus, state: ConsoleState { settings, ..Default::default() }, last_seq: 0 }
    }

    pub fn from_config(backend: B, config: &AppConfig) -> Self {
        Self::new(backend, config.corpus(), config.settings())
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Hand the pending navigation target to the caller.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.state.navigation.take()
    }

    /// Apply one intent and return the resulting state.
    ///
    /// Backend failures are logged and degrade to the previous state; they
    /// are never returned.
    pub async fn dispatch(&mut self, intent: Intent) -> &ConsoleState {
        match intent {
            Intent::Input(text) => self.set_term(text),
            Intent::AcceptSuggestion => {
                if let Some(suggestion) = self.state.suggestion.take() {
                    self.set_term(suggestion);
                }
            }
            Intent::Submit => {
                if let Some(pending) = self.begin_search(0) {
                    self.run_search(pending).await;
                }
            }
            Intent::ChangePage(target) => {
                let page = self
                    .state
                    .pagination
                    .resolve(target)
                    .and_then(|page| self.state.pagination.request_page(page));
                match page {
                    Some(page) => {
                        if let Some(pending) = self.begin_search(page) {
                            self.run_search(pending).await;
                        }
                    }
                    None => tracing::debug!(?target, "page change ignored"),
                }
            }
            Intent::ChangeSetting(setting) => {
                if let Err(e) = self.apply_setting(setting) {
                    tracing::warn!(error = %e, "setting rejected");
                }
            }
            Intent::RemoveItem(index) => self.remove_item(index).await,
            Intent::ActivateResult(index) => match self.state.results.get(index) {
                Some(item) => {
                    let url = item.url.clone();
                    let target = track::activate(&self.backend, &url).await;
                    self.state.navigation = Some(target);
                }
                None => tracing::warn!(index, "activate: no result at index"),
            },
        }

        &self.state
    }

    /// Issue a search for the current term at `page_index`.
    ///
    /// Returns `None` without touching state when the filtered term is blank.
    /// Otherwise marks the console loading and supersedes any earlier pending
    /// search.
    pub fn begin_search(&mut self, page_index: u32) -> Option<PendingSearch> {
        let Some(term) = filter::searchable(&self.state.term, &self.state.settings.excluded_chars) else {
            tracing::debug!("search term is empty; keeping previous results");
            return None;
        };

        let request = SearchRequest::from_settings(term, &self.state.settings, page_index);
        if let Err(e) = request.validate() {
            tracing::warn!(error = %e, "search request rejected");
            return None;
        }

        self.last_seq += 1;
        self.state.loading = true;
        tracing::debug!(seq = self.last_seq, term = %request.search_term, page = page_index, "search dispatched");

        Some(PendingSearch { seq: self.last_seq, request })
    }

    /// Apply the outcome of search `seq`.
    ///
    /// Returns `false` when `seq` was superseded and the outcome dropped.
    pub fn complete_search(&mut self, seq: u64, outcome: Result<SearchResponse, Error>) -> bool {
        if seq != self.last_seq {
            tracing::debug!(seq, latest = self.last_seq, "discarding stale search response");
            return false;
        }

        self.state.loading = false;

        match outcome {
            Ok(response) => {
                tracing::debug!(seq, results = response.result_count(), "search completed");
                self.state.pagination.commit(response.total_pages, response.current_page);
                self.state.results.replace(response.items);
            }
            Err(e) => tracing::warn!(seq, error = %e, "search failed; keeping previous results"),
        }

        true
    }

    async fn run_search(&mut self, pending: PendingSearch) {
        let outcome = self.backend.search(&pending.request).await;
        self.complete_search(pending.seq, outcome);
    }

    fn set_term(&mut self, term: String) {
        self.state.suggestion = self.corpus.suggest(&term).map(str::to_string);
        self.state.term = term;
    }

    fn apply_setting(&mut self, setting: Setting) -> Result<(), Error> {
        let settings = &mut self.state.settings;
        match setting {
            Setting::Operator(op) => settings.operator = op,
            Setting::ResultsPerPage(n) => settings.results_per_page = validate_results_per_page(n)?,
            Setting::SortMethod(method) => settings.sort_method = method,
            Setting::ExcludedChars(chars) => settings.excluded_chars = chars,
        }
        Ok(())
    }

    async fn remove_item(&mut self, index: usize) {
        let Some(item) = self.state.results.get(index) else {
            tracing::warn!(index, "remove: no result at index");
            return;
        };
        let url = item.url.clone();

        match self.backend.remove_link(&url).await {
            Ok(()) => {
                tracing::debug!(url = %url, index, "link removed");
                self.state.results.remove_at(index);
            }
            Err(e) => tracing::warn!(url = %url, error = %e, "link removal failed"),
        }
    }
}
