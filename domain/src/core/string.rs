//! String helpers shared by drafts and field updates.

/// Trim a user-supplied value and return `None` when nothing remains.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Whether a raw field value means "clear this optional field".
///
/// Accepts an empty string as well as the words `none` and `null`
/// (case-insensitive), the spellings a form or command line produces.
pub fn is_clear_marker(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("null")
}

/// Shorten `s` to at most `max_chars` characters, ending with an ellipsis
/// when anything was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = s.chars().take(keep).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  Rust  "), Some("Rust"));
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
    }

    #[test]
    fn test_clear_markers() {
        assert!(is_clear_marker(""));
        assert!(is_clear_marker("None"));
        assert!(is_clear_marker(" null "));
        assert!(!is_clear_marker("7"));
    }

    #[test]
    fn test_preview_counts_characters() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("conférence", 5), "conf…");
        assert_eq!(preview("abc", 3), "abc");
    }
}
