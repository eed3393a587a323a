//! Whitespace normalization and length capping for extracted text

/// Marker appended when content is truncated to the length cap
pub const TRUNCATION_MARKER: &str = "...";

/// Collapse extracted text into one flat, whitespace-normalized string
///
/// Each line is trimmed and split on runs of two or more spaces, a
/// heuristic for layout-induced word gaps. Surviving fragments are joined
/// with single spaces, so the output contains no line breaks and never two
/// consecutive spaces. Idempotent.
pub fn normalize(text: &str) -> String {
    let mut fragments: Vec<&str> = Vec::new();
    for line in text.lines() {
        for fragment in line.trim().split("  ") {
            let fragment = fragment.trim();
            if !fragment.is_empty() {
                fragments.push(fragment);
            }
        }
    }
    fragments.join(" ")
}

/// Truncate `text` to `max` characters, appending the truncation marker
///
/// Bounds the prompt size sent downstream. Counts characters, not bytes,
/// so truncation never lands inside a multi-byte sequence.
pub fn cap(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut capped: String = text.chars().take(max).collect();
    capped.push_str(TRUNCATION_MARKER);
    capped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_lines_and_gaps() {
        let input = "  Hello   world.  \n\n  Second  line\there  ";
        let out = normalize(input);
        assert_eq!(out, "Hello world. Second line\there");
    }

    #[test]
    fn test_normalize_no_double_spaces_or_newlines() {
        let input = "a  b\n c    d\r\n\r\ne     f";
        let out = normalize(input);
        assert!(!out.contains("  "));
        assert!(!out.contains('\n'));
        assert!(!out.contains('\r'));
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "  Hello   world.  \n\nSecond  line",
            "already clean text",
            "",
            "   \n   \n",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\n   "), "");
    }

    #[test]
    fn test_cap_under_limit_unchanged() {
        assert_eq!(cap("short", 100), "short");
        assert_eq!(cap("exact", 5), "exact");
    }

    #[test]
    fn test_cap_over_limit_appends_marker() {
        let out = cap("abcdefghij", 4);
        assert_eq!(out, "abcd...");
        assert_eq!(out.chars().count(), 4 + TRUNCATION_MARKER.len());
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_cap_counts_characters_not_bytes() {
        // Four multi-byte characters, cap at two
        let out = cap("éééé", 2);
        assert_eq!(out, "éé...");
    }
}
