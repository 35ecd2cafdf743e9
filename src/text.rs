//! Whitespace and case helpers shared by the compiler and the matcher.

/// Trim and collapse every run of whitespace into a single space.
pub(crate) fn normalize_whitespace(input: &str) -> String {
    regex!(r"\s+").replace_all(input.trim(), " ").into_owned()
}

/// Lower-case `input` and split it into words, discarding empty tokens.
pub(crate) fn lower_words(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

/// Everything after the first `count` words of an already normalized phrase.
pub(crate) fn skip_words(normalized: &str, count: usize) -> &str {
    if count == 0 {
        return normalized;
    }
    normalized.splitn(count + 1, ' ').nth(count).unwrap_or("").trim_start()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize_whitespace("  the \t big\n\ncat  "), "the big cat");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn lower_words_drops_empty_tokens() {
        assert_eq!(lower_words("  To  BE "), vec!["to", "be"]);
        assert!(lower_words("").is_empty());
    }

    #[test]
    fn skip_words_returns_remainder() {
        assert_eq!(skip_words("of the Cat", 2), "Cat");
        assert_eq!(skip_words("of the Cat", 0), "of the Cat");
        assert_eq!(skip_words("of the", 2), "");
        assert_eq!(skip_words("of", 5), "");
    }
}
