//! sentence-level filtering
use super::Filter;

use crate::parsing::Sentence;

/// Simple length filter.
/// Returns `false` if the provided sentence holds fewer than
/// [MinTokens::min_tokens] raw tokens.
///
/// Counts raw tokens, before placeholder decoding: a `<space>` token that
/// decodes away still counts here.
pub struct MinTokens {
    min_tokens: usize,
}

impl MinTokens {
    /// specify a minimum token count
    pub fn with_min_tokens(min_tokens: usize) -> Self {
        Self { min_tokens }
    }

    /// Get a reference to the filter's min token count.
    pub fn min_tokens(&self) -> &usize {
        &self.min_tokens
    }
}

impl Filter<&Sentence> for MinTokens {
    fn detect(&self, sentence: &Sentence) -> bool {
        sentence.len() >= self.min_tokens
    }
}

impl Default for MinTokens {
    /// Default minimum length for sentences is 1 token
    fn default() -> Self {
        MinTokens { min_tokens: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, MinTokens};

    fn sentence(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn min_tokens_default() {
        let valid = sentence(&["a"]);
        let invalid = sentence(&[]);

        let f = MinTokens::default();
        assert_eq!(true, f.detect(&valid));
        assert_eq!(false, f.detect(&invalid));
    }

    #[test]
    fn threshold_is_inclusive() {
        let f = MinTokens::with_min_tokens(2);
        assert_eq!(true, f.detect(&sentence(&["a", "b"])));
        assert_eq!(false, f.detect(&sentence(&["a"])));
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let f = MinTokens::with_min_tokens(0);
        assert_eq!(true, f.detect(&sentence(&[])));
    }
}
