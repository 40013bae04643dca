//! # Sample validation
//!
//! Checks that a sample can be taken all the way from raw files to
//! normalized curves, and reports every problem found on the way instead of
//! stopping at the first error.
//!
//! ## Validation Checklist
//!
//! 1. **Files**: every source file exists and tokenizes
//! 2. **Metadata**: sample mass, FID calibration, and baselines are present and numeric
//! 3. **Curves**: curve sections exist and every row has the instrument's column layout
//! 4. **Normalization**: normalized curves contain only finite values
//!
//! A stage only runs when the stages it depends on passed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rockeval::instrument::InstrumentVersion;
//! use rockeval::validator::validate_sample;
//! use std::path::Path;
//!
//! let report = validate_sample(Path::new("data"), "sample_01", InstrumentVersion::Re7);
//! println!("{}", report);
//! if report.has_failures() {
//!     std::process::exit(1);
//! }
//! ```

use std::path::Path;

use crate::instrument::InstrumentVersion;
use crate::parser::ParsedFile;

pub use report::{CheckStatus, Stage, ValidationCheck, ValidationReport};

mod data;
mod metadata;
mod report;
mod structure;

/// Run every validation stage on one sample.
pub fn validate_sample(
    folder: &Path,
    sample_name: &str,
    version: InstrumentVersion,
) -> ValidationReport {
    let mut report = ValidationReport::new(format!(
        "{} ({}) in {}",
        sample_name,
        version,
        folder.display()
    ));

    // 1. Files
    let Some(parsed) = structure::check_files(folder, sample_name, version, &mut report) else {
        return report;
    };

    validate_parsed(&parsed, version, &mut report);
    report
}

/// Run the metadata, curve, and normalization stages on content that is
/// already in memory.
pub fn validate_parsed(
    parsed: &ParsedFile,
    version: InstrumentVersion,
    report: &mut ValidationReport,
) {
    // 2. Metadata
    metadata::check_metadata(&parsed.metadata, version, report);

    // 3. Curves
    let Some(curves) = data::check_curves(&parsed.data, version, report) else {
        return;
    };

    // 4. Normalization
    if !report.stage_failed(Stage::Metadata) {
        data::check_normalization(&curves, &parsed.metadata, version, report);
    }
}
