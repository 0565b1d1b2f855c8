//! Tokenization for lexical similarity.
//!
//! Lower-cases, treats every non-alphanumeric character as a separator, and
//! optionally drops common English function words.

/// Function words that carry no signal when comparing a resume to a posting.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "do", "for", "from", "has", "have", "he", "her", "his", "i", "if", "in",
    "into", "is", "its", "me", "more", "my", "no", "not", "of", "on", "or", "our", "out",
    "over", "she", "so", "such", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "to", "up", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "will", "with", "would", "you", "your",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Splits `text` into lower-case alphanumeric tokens, in order of appearance.
pub fn tokenize(text: &str, remove_stop_words: bool) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|raw| !raw.is_empty())
        .map(str::to_lowercase)
        .filter(|token| !(remove_stop_words && is_stop_word(token)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_sorted_for_binary_search() {
        let mut sorted = STOP_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOP_WORDS);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(tokenize("Rust RUST rust", false), vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_punctuation_and_whitespace_runs_are_separators() {
        assert_eq!(
            tokenize("  Python,   Go;\n\tKubernetes!!  (AWS) ", false),
            vec!["python", "go", "kubernetes", "aws"]
        );
    }

    #[test]
    fn test_dotted_names_split() {
        assert_eq!(tokenize("node.js", false), vec!["node", "js"]);
    }

    #[test]
    fn test_stop_words_removed_when_requested() {
        assert_eq!(
            tokenize("Seeking a pastry chef for the bakery", true),
            vec!["seeking", "pastry", "chef", "bakery"]
        );
        assert_eq!(tokenize("a for the", false).len(), 3);
    }

    #[test]
    fn test_meaningful_short_words_survive_stop_word_removal() {
        assert_eq!(
            tokenize("IT support for US citizens", true),
            vec!["it", "support", "us", "citizens"]
        );
    }

    #[test]
    fn test_unicode_letters_kept() {
        assert_eq!(tokenize("Café München", false), vec!["café", "münchen"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(tokenize("", true).is_empty());
        assert!(tokenize("--- !!! ...", true).is_empty());
    }
}
