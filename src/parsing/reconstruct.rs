//! Raw sentence reconstruction.
//!
//! Rebuilds plain sentence text from fragment lines, independently of the
//! token path. Only feeds the pre-filter sentence count of the statistics
//! report; its boundaries can diverge from [super::segment] on malformed
//! input, and both counts are reported without reconciliation.
use crate::markup::Markup;

use super::classify::{classify, LineKind};

/// Concatenates fragment lines into plain sentence strings.
///
/// Fragments are joined with no separator. A closer that carries a fragment
/// emits the pending text; a bare `//` line emits nothing and leaves pending
/// fragments in place.
pub fn reconstruct(markup: &Markup, lines: &[String]) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut fragments: Vec<&str> = Vec::new();

    for line in lines {
        match classify(markup, line) {
            LineKind::Continuation(fragment) => fragments.push(fragment),
            LineKind::EndOfSentence(Some(fragment)) => {
                let mut sentence = fragments.concat();
                sentence.push_str(fragment);
                sentences.push(sentence);
                fragments.clear();
            }
            _ => (),
        }
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn fragments_concatenate_without_separator() {
        let lines = lines(&["สวัส\\\\", "ดี\\\\", "ครับ//"]);
        let sentences = reconstruct(&Markup::orchid(), &lines);
        assert_eq!(vec!["สวัสดีครับ"], sentences);
    }

    #[test]
    fn closer_alone_emits_its_fragment() {
        let lines = lines(&["จบแล้ว//"]);
        let sentences = reconstruct(&Markup::orchid(), &lines);
        assert_eq!(vec!["จบแล้ว"], sentences);
    }

    #[test]
    fn bare_closer_emits_nothing_and_keeps_fragments() {
        let lines = lines(&["ต้น\\\\", "//", "ปลาย//"]);
        let sentences = reconstruct(&Markup::orchid(), &lines);
        assert_eq!(vec!["ต้นปลาย"], sentences);
    }

    #[test]
    fn token_lines_contribute_nothing() {
        let lines = lines(&["คำ/NN", "พูด/VV", "//"]);
        let sentences = reconstruct(&Markup::orchid(), &lines);
        assert!(sentences.is_empty());
    }

    #[test]
    fn diverges_from_token_segmentation() {
        // one token sentence for the segmenter, zero here
        let lines = lines(&["คำ/NN", "//", "อีก\\\\", "ที//"]);
        let sentences = reconstruct(&Markup::orchid(), &lines);
        assert_eq!(vec!["อีกที"], sentences);
        assert_eq!(1, super::super::segment::segment(&Markup::orchid(), &lines).len());
    }
}
