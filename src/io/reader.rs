//! Corpus loading.
//!
//! Materializes the whole input as an ordered line sequence before any
//! processing happens. Gzip is detected by the `.gz` extension; the `bin`
//! format decodes the legacy TIS-620 single-byte encoding (via its
//! windows-874 superset), `txt` expects UTF-8. Comment lines never reach
//! the parser.
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use encoding_rs::WINDOWS_874;
use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error::Error;
use crate::markup::Markup;

/// Input data encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// legacy TIS-620 bytes
    Bin,
    /// UTF-8 text
    Txt,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bin" => Ok(Self::Bin),
            "txt" => Ok(Self::Txt),
            other => Err(format!("invalid input data format: {}", other)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bin => write!(f, "bin"),
            Self::Txt => write!(f, "txt"),
        }
    }
}

/// Loads the corpus as an ordered sequence of decoded lines, comment lines
/// removed and line terminators stripped.
pub fn load_lines(markup: &Markup, src: &Path, format: InputFormat) -> Result<Vec<String>, Error> {
    let raw = read_raw(src)?;
    let text = match format {
        InputFormat::Bin => WINDOWS_874.decode(&raw).0.into_owned(),
        InputFormat::Txt => String::from_utf8(raw)?,
    };

    let lines: Vec<String> = text
        .lines()
        .filter(|line| !markup.is_comment(line))
        .map(|line| line.to_owned())
        .collect();

    debug!("loaded {} lines from {:?}", lines.len(), src);
    Ok(lines)
}

fn read_raw(src: &Path) -> Result<Vec<u8>, Error> {
    let f = File::open(src)?;
    let mut raw = Vec::new();

    if is_gz_file(src) {
        let mut gzd = MultiGzDecoder::new(BufReader::new(f));
        gzd.read_to_end(&mut raw)?;
    } else {
        BufReader::new(f).read_to_end(&mut raw)?;
    }

    Ok(raw)
}

fn is_gz_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}
