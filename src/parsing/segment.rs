//! Sentence segmentation.
//!
//! Folds the classified line sequence into sentences of raw tokens. Tokens
//! stay undecoded here; placeholder symbols are resolved later, after the
//! length filter has seen the raw token counts.
use crate::markup::Markup;

use super::classify::{classify, LineKind};

/// Ordered raw tokens of one closed sentence.
pub type Sentence = Vec<String>;

/// Segments lines into sentences.
///
/// A sentence is emitted when a closer is seen and the pending token list is
/// non-empty; a closer with nothing pending is a no-op. A non-empty pending
/// list left open at end of input is discarded, never flushed.
pub fn segment(markup: &Markup, lines: &[String]) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut pending: Sentence = Vec::new();

    for line in lines {
        match classify(markup, line) {
            LineKind::Token(word) => pending.push(word.to_owned()),
            LineKind::EndOfSentence(_) if !pending.is_empty() => {
                sentences.push(std::mem::take(&mut pending));
            }
            _ => (),
        }
    }

    sentences
}
