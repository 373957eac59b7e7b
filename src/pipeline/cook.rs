//! Corpus cooking pipeline.
//!
//! One synchronous batch pass: load lines, segment into sentences, decode
//! and filter into gold records, write them out, report statistics.
use std::path::PathBuf;

use log::{debug, info};

use crate::error::Error;
use crate::formatting::{gen_gold_data, GoldFormat};
use crate::io::reader::{load_lines, InputFormat};
use crate::io::writer::GoldWriter;
use crate::markup::Markup;
use crate::parsing::{reconstruct, segment};
use crate::pipeline::Pipeline;
use crate::stats::CorpusStats;

/// Cooking run configuration.
///
/// `dst` is optional: without it no gold file is written and the run only
/// produces statistics.
pub struct Cook {
    src: PathBuf,
    dst: Option<PathBuf>,
    input_format: InputFormat,
    output_format: GoldFormat,
    threshold: usize,
    quiet: bool,
}

impl Cook {
    pub fn new(
        src: PathBuf,
        dst: Option<PathBuf>,
        input_format: InputFormat,
        output_format: GoldFormat,
        threshold: usize,
        quiet: bool,
    ) -> Self {
        Self {
            src,
            dst,
            input_format,
            output_format,
            threshold,
            quiet,
        }
    }
}

impl Pipeline<CorpusStats> for Cook {
    fn run(&self) -> Result<CorpusStats, Error> {
        let markup = Markup::orchid();

        let lines = load_lines(&markup, &self.src, self.input_format)?;

        let sentences = segment(&markup, &lines);
        debug!("segmented {} sentences", sentences.len());

        let gold = gen_gold_data(&markup, &sentences, self.output_format, self.threshold);
        debug!("{} gold records after filtering", gold.len());

        if let Some(dst) = &self.dst {
            let path = GoldWriter::new(dst, self.output_format).write(&gold)?;
            if !self.quiet {
                info!("save cooked data: {:?}", path);
            }
        }

        let pre_sentences = reconstruct(&markup, &lines);
        let stats = CorpusStats::compute(lines.len(), pre_sentences.len(), &gold);
        if !self.quiet {
            stats.report();
        }

        Ok(stats)
    }
}
