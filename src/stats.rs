//! Corpus statistics.
//!
//! Computed once per run from already-produced artifacts: the raw line
//! sequence length, the reconstructed pre-filter sentence count, and the
//! gold records. Nothing is re-parsed.
use log::info;
use serde::Serialize;

/// Aggregate snapshot of one cooking run.
///
/// The pre-filter sentence count comes from fragment reconstruction and the
/// post-filter count from gold records; the two are independent and can
/// diverge on malformed input. Both are reported as-is.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct CorpusStats {
    pub n_lines: usize,
    pub n_pre_sentences: usize,
    pub n_sentences: usize,
    pub n_words: usize,
    pub n_chars: usize,
    pub min_words_per_sent: usize,
    pub max_words_per_sent: usize,
    pub avg_words_per_sent: f64,
    pub min_chars_per_sent: usize,
    pub max_chars_per_sent: usize,
    pub avg_chars_per_sent: f64,
    pub min_chars_per_word: usize,
    pub max_chars_per_word: usize,
    pub avg_chars_per_word: f64,
}

impl CorpusStats {
    /// Computes statistics over gold records.
    ///
    /// Works on whitespace-split record tokens, so SL and WL records yield
    /// the same numbers. Character counts are Unicode scalar values,
    /// delimiters excluded. An empty gold set reports zeros.
    pub fn compute(n_lines: usize, n_pre_sentences: usize, gold: &[String]) -> Self {
        let sents: Vec<Vec<&str>> = gold
            .iter()
            .map(|record| record.split_whitespace().collect())
            .collect();

        let n_sentences = sents.len();
        let n_words = sents.iter().map(|words| words.len()).sum();
        let n_chars = sents
            .iter()
            .flat_map(|words| words.iter())
            .map(|word| word.chars().count())
            .sum();

        let mut stats = CorpusStats {
            n_lines,
            n_pre_sentences,
            n_sentences,
            n_words,
            n_chars,
            ..Default::default()
        };

        let (longest, shortest) = match extremes(&sents) {
            Some(extremes) => extremes,
            None => return stats,
        };

        // min/max chars per sentence and per word are taken from the same
        // sentence that wins the token-count extreme, not re-scanned
        // corpus-wide
        stats.max_words_per_sent = longest.len();
        stats.max_chars_per_sent = char_count(longest);
        stats.max_chars_per_word = longest.iter().map(|w| w.chars().count()).max().unwrap_or(0);

        stats.min_words_per_sent = shortest.len();
        stats.min_chars_per_sent = char_count(shortest);
        stats.min_chars_per_word = shortest.iter().map(|w| w.chars().count()).min().unwrap_or(0);

        stats.avg_words_per_sent = n_words as f64 / n_sentences as f64;
        stats.avg_chars_per_sent = n_chars as f64 / n_sentences as f64;
        if n_words > 0 {
            stats.avg_chars_per_word = n_chars as f64 / n_words as f64;
        }

        stats
    }

    /// Logs the report.
    pub fn report(&self) {
        info!("### report");
        info!("# [PRE] line: {} ...", self.n_lines);
        info!("# [PRE] sent: {} ...", self.n_pre_sentences);
        info!("# [POST] sent: {} ...", self.n_sentences);
        info!("# [POST] word: {} ...", self.n_words);
        info!("# [POST] char: {} ...", self.n_chars);
        info!(
            "# [POST] words/sent: min={} max={} avg={}",
            self.min_words_per_sent, self.max_words_per_sent, self.avg_words_per_sent
        );
        info!(
            "# [POST] chars/sent: min={} max={} avg={}",
            self.min_chars_per_sent, self.max_chars_per_sent, self.avg_chars_per_sent
        );
        info!(
            "# [POST] chars/word: min={} max={} avg={}",
            self.min_chars_per_word, self.max_chars_per_word, self.avg_chars_per_word
        );
    }
}

/// First longest and first shortest sentence by token count.
fn extremes<'a>(sents: &'a [Vec<&'a str>]) -> Option<(&'a Vec<&'a str>, &'a Vec<&'a str>)> {
    let mut iter = sents.iter();
    let first = iter.next()?;

    let mut longest = first;
    let mut shortest = first;
    for words in iter {
        if words.len() > longest.len() {
            longest = words;
        }
        if words.len() < shortest.len() {
            shortest = words;
        }
    }
    Some((longest, shortest))
}

fn char_count(words: &[&str]) -> usize {
    words.iter().map(|w| w.chars().count()).sum()
}
