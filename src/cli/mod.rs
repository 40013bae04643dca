use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use rockeval::instrument::InstrumentVersion;

mod config;
mod convert;
mod info;
mod validate;

pub use config::Config;

/// rockeval - Rock-Eval pyrolysis file parser and normalizer
#[derive(Parser)]
#[command(name = "rockeval")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Instrument generation as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InstrumentArg {
    /// Rock-Eval 6 (.R00 + .S00)
    #[value(name = "RE6")]
    Re6,
    /// Rock-Eval 7 (.B00)
    #[value(name = "RE7")]
    Re7,
}

impl From<InstrumentArg> for InstrumentVersion {
    fn from(arg: InstrumentArg) -> Self {
        match arg {
            InstrumentArg::Re6 => InstrumentVersion::Re6,
            InstrumentArg::Re7 => InstrumentVersion::Re7,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Export curves (CSV) and metadata (JSON) of one or more samples
    Convert {
        /// Folder holding the raw instrument files
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// Sample names (file stems of the raw files)
        #[arg(value_name = "SAMPLE", required = true)]
        samples: Vec<String>,

        /// Instrument generation (overrides the config file)
        #[arg(short, long, value_enum)]
        instrument: Option<InstrumentArg>,

        /// Output folder (default: <FOLDER>_treated)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Export raw detector signals instead of normalized curves
        #[arg(long, conflicts_with = "normalized")]
        raw: bool,

        /// Export normalized curves even if the config file disables them
        #[arg(long)]
        normalized: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Display the sections and curves of a sample
    Info {
        /// Folder holding the raw instrument files
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// Sample name
        #[arg(value_name = "SAMPLE")]
        sample: String,

        /// Instrument generation
        #[arg(short, long, value_enum)]
        instrument: InstrumentArg,
    },

    /// Check that a sample parses and normalizes
    Validate {
        /// Folder holding the raw instrument files
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// Sample name
        #[arg(value_name = "SAMPLE")]
        sample: String,

        /// Instrument generation
        #[arg(short, long, value_enum)]
        instrument: InstrumentArg,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            folder,
            samples,
            instrument,
            output,
            raw,
            normalized,
            config,
        } => convert::run(
            folder,
            samples,
            instrument.map(InstrumentVersion::from),
            output,
            normalized_flag(raw, normalized),
            config,
        ),
        Commands::Info {
            folder,
            sample,
            instrument,
        } => info::run(folder, sample, instrument.into()),
        Commands::Validate {
            folder,
            sample,
            instrument,
        } => validate::run(folder, sample, instrument.into()),
    }
}

/// `--raw` / `--normalized` as an override; clap rejects both at once.
fn normalized_flag(raw: bool, normalized: bool) -> Option<bool> {
    if raw {
        Some(false)
    } else if normalized {
        Some(true)
    } else {
        None
    }
}
