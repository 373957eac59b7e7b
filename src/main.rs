//! Binary entry point: argument parsing, logging setup, pipeline dispatch.
use std::fs::File;

use structopt::StructOpt;

#[macro_use]
extern crate log;

use orchid_cooker::cli;
use orchid_cooker::error::Error;
use orchid_cooker::pipeline::{Cook, Pipeline};

fn main() -> Result<(), Error> {
    let opt = cli::Cook::from_args();
    init_logger(opt.quiet);
    debug!("cli args\n{:#?}", opt);

    let pipeline = Cook::new(
        opt.input_data,
        opt.output_data,
        opt.input_data_format,
        opt.output_data_format,
        opt.sentence_len_threshold,
        opt.quiet,
    );
    let stats = pipeline.run()?;

    if let Some(path) = opt.report_json {
        let report = File::create(path)?;
        serde_json::to_writer_pretty(report, &stats)?;
    }

    Ok(())
}

/// Report lines go through `info!`; `--quiet` demotes the default filter so
/// only warnings surface. `RUST_LOG` still overrides either way.
fn init_logger(quiet: bool) {
    let default_filter = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
