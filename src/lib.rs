//! # rockeval - Rock-Eval Instrument File Parser
//!
//! `rockeval` reads the text output of Rock-Eval 6 and Rock-Eval 7
//! pyrolysis/oxidation instruments, extracts the run metadata and the
//! pyrolysis and oxidation curves, and converts raw detector signals into
//! quantities per unit of sample mass.
//!
//! ## Key Features
//!
//! - **Both generations**: RE6 (`.R00` metadata + `.S00` curves) and RE7
//!   (single `.B00` file), selected once per sample.
//!
//! - **Lossless metadata**: every section and field is kept as written, in
//!   file order, including free-text lines.
//!
//! - **Typed curves**: curve tables with a fixed column layout per instrument;
//!   malformed rows and cells are reported with their section and position.
//!
//! - **Normalization**: baseline subtraction followed by mass normalization
//!   of the FID, CO, CO2 and SO2 channels.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rockeval::sample::RockEvalSample;
//! use rockeval::export::{export_sample, ExportOptions};
//! use std::path::Path;
//!
//! let sample = RockEvalSample::open("example", "RE7", "example_data")?;
//!
//! // Raw and normalized curves
//! let raw = sample.curves(false)?;
//! let normalized = sample.curves(true)?;
//! assert_eq!(raw.pyrolysis.n_rows(), normalized.pyrolysis.n_rows());
//!
//! // CSV + JSON export
//! export_sample(&sample, Path::new("example_treated_data"), &ExportOptions::default())?;
//! # Ok::<(), rockeval::RockEvalError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`instrument`]: per-generation conventions (files, section names, columns, baselines)
//! - [`parser`]: tokenizes a file into [`metadata`] and raw [`data`] sections
//! - [`curves`]: typed curve tables built from the raw sections
//! - [`normalize`]: baseline subtraction and unit conversion
//! - [`sample`]: the per-sample handle tying the above together
//! - [`export`]: CSV and JSON writers
//! - [`validator`]: step-by-step sample checks with a printable report

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod curves;
pub mod data;
mod error;
pub mod export;
pub mod instrument;
pub mod metadata;
pub mod normalize;
pub mod parser;
pub mod sample;
pub mod validator;

pub use error::{Result, RockEvalError};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::curves::{Column, CurveTable, Curves, Phase};
    pub use crate::data::RawData;
    pub use crate::error::{Result, RockEvalError};
    pub use crate::export::{export_sample, ExportOptions, ExportSummary};
    pub use crate::instrument::{FileType, InstrumentVersion};
    pub use crate::metadata::{Metadata, Section};
    pub use crate::normalize::{Baselines, NormalizationParams};
    pub use crate::sample::RockEvalSample;
    pub use crate::validator::{validate_sample, ValidationReport};
}
