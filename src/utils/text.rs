//! Text helpers shared by the store, the export, and the renderer.

/// Number of whitespace-delimited, non-empty tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive substring test. `needle_lower` must already be lowercased.
pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Truncate a string to a maximum length, handling multi-byte characters properly.
/// Appends "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// `"1 Urgent"` / `"3 Urgents"`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_collapses_whitespace() {
        assert_eq!(word_count("hello   world"), 2);
        assert_eq!(word_count("  leading and trailing  "), 3);
        assert_eq!(word_count("tabs\tand\nnewlines"), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_contains_lowercase() {
        assert!(contains_lowercase("Printer On FIRE", "fire"));
        assert!(!contains_lowercase("Printer", "scanner"));
        assert!(contains_lowercase("anything", ""));
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hello World", 3), "Hel");
        assert_eq!(truncate_string("こんにちは世界", 5), "こん...");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "Urgent"), "1 Urgent");
        assert_eq!(pluralize(2, "Urgent"), "2 Urgents");
        assert_eq!(pluralize(0, "Urgent"), "0 Urgents");
    }
}
