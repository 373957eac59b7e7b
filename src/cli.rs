//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::formatting::GoldFormat;
use crate::io::reader::InputFormat;

#[derive(Debug, StructOpt)]
#[structopt(name = "orchid-cooker", about = "ORCHID corpus cooking tool.")]
/// Cook command and parameters.
///
/// ```sh
/// orchid-cooker 0.1.0
/// ORCHID corpus cooking tool.
///
/// USAGE:
///     orchid-cooker [FLAGS] [OPTIONS] --input-data <input-data>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -q, --quiet      do not log the statistics report
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -i, --input-data <input-data>                      file path to input data
///     -f, --input-data-format <input-data-format>        format of input data, 'bin' or 'txt' [default: txt]
///     -o, --output-data <output-data>                    directory path for output data
///         --output-data-format <output-data-format>     format of output data, 'sl' or 'wl' [default: sl]
///         --report-json <report-json>                    write the statistics report to this path as JSON
///         --sentence-len-threshold <sentence-len-threshold>    sentence length threshold [default: 1]
/// ```
pub struct Cook {
    #[structopt(short = "q", long = "quiet", help = "do not log the statistics report")]
    pub quiet: bool,
    #[structopt(
        short = "i",
        long = "input-data",
        parse(from_os_str),
        help = "file path to input data"
    )]
    pub input_data: PathBuf,
    #[structopt(
        short = "o",
        long = "output-data",
        parse(from_os_str),
        help = "directory path for output data. Leave blank to only report statistics."
    )]
    pub output_data: Option<PathBuf>,
    #[structopt(
        short = "f",
        long = "input-data-format",
        default_value = "txt",
        help = "format of input data, 'bin' or 'txt'"
    )]
    pub input_data_format: InputFormat,
    #[structopt(
        long = "output-data-format",
        default_value = "sl",
        help = "format of output data, 'sl' or 'wl'"
    )]
    pub output_data_format: GoldFormat,
    #[structopt(
        long = "sentence-len-threshold",
        default_value = "1",
        help = "sentences shorter than the threshold (in raw tokens) are ignored"
    )]
    pub sentence_len_threshold: usize,
    #[structopt(
        long = "report-json",
        parse(from_os_str),
        help = "write the statistics report to this path as JSON"
    )]
    pub report_json: Option<PathBuf>,
}
