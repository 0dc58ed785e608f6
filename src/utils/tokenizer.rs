use std::collections::HashSet;

/// Split text into the set of normalized words it contains.
///
/// ASCII punctuation acts as a separator, so `func('param1', param2)` yields
/// `func`, `param1` and `param2`. Pieces are lowercased and empty pieces are
/// dropped. A word repeated in `text` appears once in the result.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.split(is_separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Normalize a search term the way lookups expect it.
///
/// Only case folding and trimming are applied. Punctuation is kept, so a
/// term like `os.path` will not match the separately indexed `os` and `path`.
pub fn normalize_query(term: &str) -> String {
    term.trim().to_lowercase()
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(
            tokenize("func('param1', param2)"),
            set(&["func", "param1", "param2"])
        );
    }

    #[test]
    fn test_case_folding_and_dedup() {
        assert_eq!(tokenize("Cat cat CAT dog"), set(&["cat", "dog"]));
    }

    #[test]
    fn test_dotted_and_underscored() {
        assert_eq!(
            tokenize("os.path.join(my_var)"),
            set(&["os", "path", "join", "my", "var"])
        );
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\r\n ").is_empty());
        assert!(tokenize("!!! ... ---").is_empty());
    }

    #[test]
    fn test_non_ascii_words_survive() {
        assert_eq!(tokenize("Café, naïve"), set(&["café", "naïve"]));
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let samples = [
            "fn main() { println!(\"Hello, World\"); }",
            "import os\nos.path.join()",
            "MixedCASE__with--dashes and\ttabs",
            "",
        ];
        for text in samples {
            let first = tokenize(text);
            let joined = first.iter().cloned().collect::<Vec<_>>().join(" ");
            assert_eq!(tokenize(&joined), first, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn test_normalize_query_keeps_punctuation() {
        assert_eq!(normalize_query("  Hello "), "hello");
        assert_eq!(normalize_query("os.path"), "os.path");
    }
}
