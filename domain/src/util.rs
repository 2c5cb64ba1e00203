//! Shared string utilities.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character. Returns a sub-slice of the original.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Keep the trailing `max_chars` characters of a string.
///
/// Character-counted, not byte-counted, so multi-byte text is never split.
pub fn tail_chars(s: &str, max_chars: usize) -> &str {
    let count = s.chars().count();
    if count <= max_chars {
        return s;
    }
    match s.char_indices().nth(count - max_chars) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_prefix() {
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hi", 10), "hi");
        assert_eq!(truncate_str("", 10), "");
    }

    #[test]
    fn truncate_respects_multibyte_boundary() {
        // Each character is 3 bytes; cutting at 4 must back up to 3
        let s = "あのね";
        assert_eq!(truncate_str(s, 4), "あ");
        assert_eq!(truncate_str(s, 9), "あのね");
    }

    #[test]
    fn tail_keeps_suffix() {
        assert_eq!(tail_chars("hello world", 5), "world");
        assert_eq!(tail_chars("hi", 10), "hi");
        assert_eq!(tail_chars("abc", 0), "");
    }

    #[test]
    fn tail_counts_chars_not_bytes() {
        assert_eq!(tail_chars("あのね", 2), "のね");
        assert_eq!(tail_chars("あのね", 3), "あのね");
    }
}
