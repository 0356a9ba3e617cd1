use crate::vocab::LANGUAGES;

/// Characters treated as word separators, in addition to whitespace.
/// Hyphens and semicolons are deliberately absent: a hyphenated compound
/// stays joined and will not match a vocabulary entry on its own.
const SEPARATORS: &[char] = &[',', '.', ':', '(', ')', '/', '*'];

/// Split a text blob into lowercase words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(SEPARATORS, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Exact whole-token matches against the vocabulary. Repeats are preserved;
/// callers union the description-body and list-item scans into a set before
/// use. Substrings never match: "javascripting" is not "javascript".
pub fn detect_languages(tokens: &[String]) -> Vec<&'static str> {
    tokens
        .iter()
        .filter_map(|token| {
            LANGUAGES
                .iter()
                .find(|lang| **lang == token.as_str())
                .copied()
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_have_no_whitespace_or_empties() {
        let tokens = tokenize("We use: Python, C++ (and SQL).  \n Go/Rust*");
        assert!(!tokens.is_empty());
        for t in &tokens {
            assert!(!t.is_empty());
            assert!(!t.chars().any(char::is_whitespace), "token {:?}", t);
        }
    }

    #[test]
    fn separators_split_and_lowercase() {
        assert_eq!(
            tokenize("Bonus: Rust/Go (remote)"),
            vec!["bonus", "rust", "go", "remote"]
        );
    }

    #[test]
    fn hyphens_are_not_separators() {
        // Compound words stay joined and therefore do not match.
        assert_eq!(tokenize("full-stack c++-heavy"), vec!["full-stack", "c++-heavy"]);
    }

    #[test]
    fn exact_match_only() {
        let tokens = tokenize("rustic javascripting rust javascript");
        assert_eq!(detect_languages(&tokens), vec!["rust", "javascript"]);
    }

    #[test]
    fn go_does_not_match_golang() {
        let tokens = tokenize("we use go and golang");
        assert_eq!(detect_languages(&tokens), vec!["golang"]);
    }

    #[test]
    fn repeats_are_preserved() {
        let tokens = tokenize("python python sql");
        assert_eq!(detect_languages(&tokens), vec!["python", "python", "sql"]);
    }

    #[test]
    fn matches_are_vocabulary_entries() {
        let tokens = tokenize("kotlin c# c++ r perl nonsense");
        for lang in detect_languages(&tokens) {
            assert!(LANGUAGES.contains(&lang));
        }
    }
}
