//! Inline autocomplete over a small static prefix table.

use serde::{Deserialize, Serialize};

/// Minimum term length before a suggestion is offered.
pub const MIN_TERM_CHARS: usize = 2;

/// One prefix→description row of the corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub prefix: String,
    pub description: String,
}

impl SuggestionEntry {
    pub fn new(prefix: impl Into<String>, description: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), description: description.into() }
    }
}

/// Built-in corpus used when configuration supplies none.
pub fn default_entries() -> Vec<SuggestionEntry> {
    [
        ("gl", "Global Search Engine"),
        ("ci", "Circular Shift Index"),
        ("ke", "Keyword in Context"),
        ("bo", "Boolean Operators"),
        ("in", "Index Maintenance"),
        ("se", "Search Console"),
        ("ur", "URL Submission"),
    ]
    .into_iter()
    .map(|(prefix, description)| SuggestionEntry::new(prefix, description))
    .collect()
}

/// Immutable prefix→description lookup table.
///
/// Entries are scanned in insertion order; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCorpus {
    entries: Vec<SuggestionEntry>,
}

impl Default for SuggestionCorpus {
    fn default() -> Self {
        Self::new(default_entries())
    }
}

impl SuggestionCorpus {
    pub fn new(entries: Vec<SuggestionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SuggestionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Suggest a completion for `term`.
    ///
    /// The term must start with an entry's prefix, and the entry's description
    /// must in turn start with the term. Both comparisons ignore case.
    pub fn suggest(&self, term: &str) -> Option<&str> {
        if term.chars().count() < MIN_TERM_CHARS {
            return None;
        }

        let entry = self
            .entries
            .iter()
            .find(|entry| starts_with_ignore_case(term, &entry.prefix))?;

        starts_with_ignore_case(&entry.description, term).then_some(entry.description.as_str())
    }
}

/// Free-function form of [`SuggestionCorpus::suggest`].
pub fn suggest(term: &str, corpus: &SuggestionCorpus) -> Option<String> {
    corpus.suggest(term).map(str::to_string)
}

/// The part of `suggestion` not yet typed, for ghost-text rendering.
pub fn remainder<'a>(term: &str, suggestion: &'a str) -> &'a str {
    let typed = term.chars().count();
    match suggestion.char_indices().nth(typed) {
        Some((idx, _)) => &suggestion[idx..],
        None => "",
    }
}

fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    let mut rest = haystack.chars().flat_map(char::to_lowercase);
    prefix.chars().flat_map(char::to_lowercase).all(|p| rest.next() == Some(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_prefix_match() {
        let corpus = SuggestionCorpus::default();
        assert_eq!(suggest("Glo", &corpus).as_deref(), Some("Global Search Engine"));
        assert_eq!(suggest("glob", &corpus).as_deref(), Some("Global Search Engine"));
        assert_eq!(suggest("GLOBAL S", &corpus).as_deref(), Some("Global Search Engine"));
    }

    #[test]
    fn test_suggest_no_match() {
        let corpus = SuggestionCorpus::default();
        assert_eq!(suggest("xyz", &corpus), None);
    }

    #[test]
    fn test_suggest_too_short() {
        let corpus = SuggestionCorpus::default();
        assert_eq!(suggest("g", &corpus), None);
        assert_eq!(suggest("", &corpus), None);
    }

    #[test]
    fn test_suggest_rejects_non_extending_description() {
        let corpus = SuggestionCorpus::default();
        // "glx" starts with prefix "gl" but "Global..." does not extend it.
        assert_eq!(suggest("glx", &corpus), None);
    }

    #[test]
    fn test_suggest_first_entry_wins() {
        let corpus = SuggestionCorpus::new(vec![
            SuggestionEntry::new("ca", "Cats"),
            SuggestionEntry::new("ca", "Cars"),
        ]);
        assert_eq!(corpus.suggest("ca"), Some("Cats"));
        // First matching prefix decides; the second entry is never consulted.
        assert_eq!(corpus.suggest("car"), None);
    }

    #[test]
    fn test_remainder() {
        assert_eq!(remainder("Glo", "Global Search Engine"), "bal Search Engine");
        assert_eq!(remainder("Global Search Engine", "Global Search Engine"), "");
        assert_eq!(remainder("ca", "café"), "fé");
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = SuggestionCorpus::new(Vec::new());
        assert!(corpus.is_empty());
        assert_eq!(corpus.suggest("anything"), None);
    }
}
