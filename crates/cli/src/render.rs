//! Plain-text rendering of console state.

use shiftsearch_core::suggest::remainder;
use shiftsearch_core::{ConsoleState, DisplayStatus, PageControls};

/// Input line with the suggestion's untyped tail in brackets.
pub fn input_line(state: &ConsoleState) -> String {
    let settings = state.settings();
    let mut line = format!("search ({}): {}", settings.operator, state.term());
    if let Some(suggestion) = state.suggestion() {
        let tail = remainder(state.term(), suggestion);
        if !tail.is_empty() {
            line.push_str(&format!("[{tail}]"));
        }
    }
    line
}

pub fn settings_line(state: &ConsoleState) -> String {
    let settings = state.settings();
    format!(
        "operator {} | {} per page | sort by {} | excluded {:?}",
        settings.operator, settings.results_per_page, settings.sort_method, settings.excluded_chars
    )
}

/// Result area: status message or numbered results, then page controls.
pub fn results(state: &ConsoleState) -> String {
    let mut out = String::from("Search Results\n");

    match state.status() {
        DisplayStatus::Loading => out.push_str("Loading results...\n"),
        DisplayStatus::Prompt => out.push_str("Start your search by typing a term.\n"),
        DisplayStatus::NoResults => {
            out.push_str("No results found for your query. Try different terms or operator.\n");
        }
        DisplayStatus::Results => {
            for (i, item) in state.results().iter().enumerate() {
                out.push_str(&format!("{:>3}. {}\n", i + 1, item.url));
                out.push_str(&format!("     {}\n", item.description));
            }
            if let Some(controls) = state.page_controls() {
                out.push_str(&page_bar(&controls));
                out.push('\n');
            }
        }
    }

    out
}

/// `< Prev  1 2 [3] 4 5  Next >`, with disabled ends shown as spaces.
pub fn page_bar(controls: &PageControls) -> String {
    let pages: Vec<String> = controls
        .window
        .clone()
        .map(|n| if n == controls.current { format!("[{n}]") } else { n.to_string() })
        .collect();

    format!(
        "{}  {}  {}",
        if controls.has_previous { "< Prev" } else { "      " },
        pages.join(" "),
        if controls.has_next { "Next >" } else { "" }
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftsearch_client::{ApiClient, ApiConfig};
    use shiftsearch_core::{Intent, ResultItem, SearchConsole, SearchResponse, SearchSettings, SuggestionCorpus};

    #[test]
    fn test_page_bar_middle() {
        let controls = PageControls { window: 1..=5, current: 3, has_previous: true, has_next: true };
        assert_eq!(page_bar(&controls), "< Prev  1 2 [3] 4 5  Next >");
    }

    #[test]
    fn test_page_bar_ends() {
        let first = PageControls { window: 1..=3, current: 1, has_previous: false, has_next: true };
        assert_eq!(page_bar(&first), "        [1] 2 3  Next >");

        let last = PageControls { window: 1..=3, current: 3, has_previous: true, has_next: false };
        assert_eq!(page_bar(&last), "< Prev  1 2 [3]");
    }

    #[test]
    fn test_initial_state() {
        let state = ConsoleState::default();
        assert!(results(&state).contains("Start your search"));
        assert_eq!(input_line(&state), "search (AND): ");
        assert!(settings_line(&state).contains("10 per page"));
        assert!(settings_line(&state).contains("Number of Visits"));
    }

    #[tokio::test]
    async fn test_results_listing_and_ghost_text() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        let mut console = SearchConsole::new(client, SuggestionCorpus::default(), SearchSettings::default());
        console.dispatch(Intent::Input("Glo".into())).await;
        assert_eq!(input_line(console.state()), "search (AND): Glo[bal Search Engine]");

        let pending = console.begin_search(0).unwrap();
        let response = SearchResponse {
            total_pages: Some(2),
            current_page: Some(0),
            items: vec![ResultItem::new("Global Search Engine", "example.com")],
        };
        assert!(console.complete_search(pending.seq, Ok(response)));

        assert_eq!(
            results(console.state()),
            "Search Results\n  1. example.com\n     Global Search Engine\n        [1] 2  Next >\n"
        );
    }
}
