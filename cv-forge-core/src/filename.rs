//! Filesystem-safe download names derived from user display names.

/// Base name used when sanitization leaves nothing printable.
pub const FALLBACK_BASENAME: &str = "Resume";

/// Derives a filesystem-safe base name from a free-form display name.
///
/// Every character that is not alphanumeric (in the Unicode sense, so
/// non-Latin names survive) or a space becomes an underscore; surrounding
/// whitespace is dropped and internal spaces become underscores. The result
/// never contains path separators or control characters and is never empty.
pub fn sanitize(display_name: &str) -> String {
    let cleaned: String = display_name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        FALLBACK_BASENAME.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(sanitize("John Smith"), "John_Smith");
    }

    #[test]
    fn path_separators_are_neutralised() {
        let name = sanitize("../../etc/passwd");
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
    }

    #[test]
    fn unicode_letters_are_preserved() {
        assert_eq!(sanitize("أحمد علي"), "أحمد_علي");
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(sanitize("   "), FALLBACK_BASENAME);
    }

    #[test]
    fn control_characters_are_replaced() {
        let name = sanitize("a\tb\nc");
        assert!(name.chars().all(|c| !c.is_control()));
        assert_eq!(name, "a_b_c");
    }
}
