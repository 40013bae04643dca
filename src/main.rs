//! # Rock-Eval Converter
//!
//! A command-line tool for exporting Rock-Eval 6 / Rock-Eval 7 instrument
//! files to CSV curves and JSON metadata.
//!
//! ## Usage
//!
//! ```bash
//! # Export normalized curves of two RE7 samples
//! rockeval convert example_data sample_a sample_b --instrument RE7
//!
//! # Raw detector signals into a chosen folder
//! rockeval convert example_data sample_a -i RE6 --raw -o out
//!
//! # Inspect or check a single sample
//! rockeval info example_data sample_a -i RE7
//! rockeval validate example_data sample_a -i RE7
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
