//! Query sanitization.
//!
//! `excluded` is a literal character set, never a pattern: `.` removes dots,
//! `[` removes brackets, and so on.

/// Remove every character of `excluded` from `term`.
pub fn filter(term: &str, excluded: &str) -> String {
    if excluded.is_empty() {
        return term.to_string();
    }

    term.chars().filter(|c| !excluded.contains(*c)).collect()
}

/// Filter `term` and return it only if something searchable is left.
///
/// `None` means the caller must not contact the backend.
pub fn searchable(term: &str, excluded: &str) -> Option<String> {
    let filtered = filter(term, excluded);
    if filtered.trim().is_empty() { None } else { Some(filtered) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_removes_listed_chars() {
        assert_eq!(filter("a#b$c", "#$"), "abc");
    }

    #[test]
    fn test_filter_keeps_unlisted_chars() {
        assert_eq!(filter("hello world", "xyz"), "hello world");
        assert_eq!(filter("hello", ""), "hello");
    }

    #[test]
    fn test_filter_pattern_metacharacters_are_literal() {
        assert_eq!(filter("a.b*c", "."), "ab*c");
        assert_eq!(filter("[x]-y^z", "[]"), "x-y^z");
        assert_eq!(filter("a\\b|c", "\\|"), "abc");
        assert_eq!(filter("a-b-c", "-"), "abc");
    }

    #[test]
    fn test_filter_removes_every_occurrence() {
        assert_eq!(filter("##a##", "#"), "a");
    }

    #[test]
    fn test_filter_unicode() {
        assert_eq!(filter("café ☕", "☕é"), "caf ");
    }

    #[test]
    fn test_searchable_empty_after_filter() {
        assert_eq!(searchable("#$#", "#$"), None);
        assert_eq!(searchable("  # ", "#"), None);
        assert_eq!(searchable("", ""), None);
    }

    #[test]
    fn test_searchable_keeps_inner_whitespace() {
        assert_eq!(searchable("big #cats", "#").as_deref(), Some("big cats"));
    }
}
