//! Line classification.
//!
//! Each corpus line plays exactly one role, decided without looking at
//! surrounding lines. Unrecognized lines are dropped silently: that is
//! corpus cleaning, not an error.
use crate::markup::Markup;

/// Role of a single corpus line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Annotated word unit; carries the text before the POS delimiter.
    Token(&'a str),
    /// Sentence closer. A bare `//` line carries no fragment; otherwise the
    /// fragment is the text before the first occurrence of the marker.
    EndOfSentence(Option<&'a str>),
    /// In-progress sentence fragment, text before the first occurrence of
    /// the marker.
    Continuation(&'a str),
    /// Paragraph markers, empty and malformed lines.
    Ignored,
}

/// Classifies one line.
///
/// Precedence: token, then continuation, then sentence closer. A line ending
/// with a marker is never a token, even if it contains the POS delimiter,
/// and a continuation line never closes a sentence. A bare `\\` carries no
/// fragment and is ignored.
pub fn classify<'a>(markup: &Markup, line: &'a str) -> LineKind<'a> {
    let eos = markup.eos_marker();
    let oos = markup.oos_marker();

    if !line.ends_with(eos) && !line.ends_with(oos) {
        if let Some((word, _tag)) = line.split_once(markup.attr_delim()) {
            return LineKind::Token(word);
        }
    }

    if line.ends_with(oos) && line.len() > oos.len() {
        if let Some((fragment, _)) = line.split_once(oos) {
            return LineKind::Continuation(fragment);
        }
    }

    if line.ends_with(eos) {
        if line.len() > eos.len() {
            if let Some((fragment, _)) = line.split_once(eos) {
                return LineKind::EndOfSentence(Some(fragment));
            }
        }
        return LineKind::EndOfSentence(None);
    }

    LineKind::Ignored
}
