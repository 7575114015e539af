//! String utilities for the domain layer.

/// Trim the input and collapse every run of whitespace (newlines included)
/// into a single space.
///
/// Applying this to its own output is a no-op.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Used for log previews of prompts and passages. `max_len` is in bytes,
/// the cut always lands on a character boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3);
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace_mixed_runs() {
        assert_eq!(collapse_whitespace("  a \n\n b\t\tc  "), "a b c");
    }

    #[test]
    fn test_collapse_whitespace_empty() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_collapse_whitespace_is_idempotent() {
        let once = collapse_whitespace("The answer\n is   C\r\nbecause");
        assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn test_truncate_short_is_unchanged() {
        assert_eq!(truncate("What is X?", 20), "What is X?");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("Which choice completes the text", 12), "Which cho...");
    }

    #[test]
    fn test_truncate_multibyte_boundary() {
        // 'é' is 2 bytes; a cut at byte 4 would split the second one
        assert_eq!(truncate("éééééé", 7), "éé...");
    }
}
