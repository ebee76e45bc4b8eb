//! Lexical context similarity between two statements.

use std::collections::HashSet;

use doccheck_core::constants::MIN_SHARED_TOKEN_CHARS;

/// Share of whitespace tokens the two texts have in common.
///
/// Each token of `text1` longer than three characters that also occurs
/// anywhere in `text2` counts once per occurrence in `text1`. The count is
/// divided by the longer token sequence. Punctuation stays attached to
/// tokens. Returns 0.0 when both texts are empty.
pub fn context_similarity(text1: &str, text2: &str) -> f64 {
    let lower1 = text1.to_lowercase();
    let lower2 = text2.to_lowercase();
    let words1: Vec<&str> = lower1.split_whitespace().collect();
    let words2: Vec<&str> = lower2.split_whitespace().collect();

    let longest = words1.len().max(words2.len());
    if longest == 0 {
        return 0.0;
    }

    let vocabulary2: HashSet<&str> = words2.iter().copied().collect();
    let common = words1
        .iter()
        .filter(|w| w.chars().count() > MIN_SHARED_TOKEN_CHARS && vocabulary2.contains(*w))
        .count();

    common as f64 / longest as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_long_words() {
        assert!((context_similarity("alpha beta gamma", "alpha beta gamma") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn short_tokens_never_count() {
        assert_eq!(context_similarity("the cat sat", "the cat sat"), 0.0);
    }

    #[test]
    fn case_insensitive() {
        assert!((context_similarity("Policy RULES", "policy rules") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn divides_by_longer_sequence() {
        // 2 shared out of max(2, 4).
        let s = context_similarity("students attendance", "students attendance is low");
        assert!((s - 0.5).abs() < 1e-12);
    }

    #[test]
    fn repeated_tokens_count_per_occurrence() {
        // "rule" x2 in text1 both count; max len 4.
        let s = context_similarity("rule rule is on", "rule set one two");
        assert!((s - 0.5).abs() < 1e-12);
    }

    #[test]
    fn punctuation_is_part_of_token() {
        assert_eq!(context_similarity("deadline,", "deadline"), 0.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(context_similarity("", ""), 0.0);
        assert_eq!(context_similarity("", "something longer"), 0.0);
        assert_eq!(context_similarity("   ", "words here"), 0.0);
    }
}
