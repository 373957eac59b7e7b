//! Placeholder decoding.
//!
//! Corpus tokens escape punctuation and whitespace as placeholder symbols.
//! Decoding substitutes every symbol with its literal value, in the fixed
//! order of the [Markup] table, then collapses space runs left behind by
//! deleted `<space>` tokens.
use crate::markup::Markup;

/// Decodes one sentence's space-joined tokens.
///
/// Substitution order follows [Markup::char_syms]; symbols can be substrings
/// of one another, so reordering would change results.
pub fn decode(markup: &Markup, sentence: &str) -> String {
    let mut decoded = sentence.to_owned();
    for (sym, lit) in markup.char_syms() {
        if decoded.contains(sym) {
            decoded = decoded.replace(sym, lit);
        }
    }
    collapse_spaces(&decoded)
}

/// Collapses every run of two or more spaces into one.
fn collapse_spaces(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut last_was_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !last_was_space {
                collapsed.push(c);
            }
            last_was_space = true;
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }
    collapsed
}
