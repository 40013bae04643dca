use anyhow::Result;
use log::info;
use std::path::PathBuf;

use rockeval::instrument::InstrumentVersion;
use rockeval::validator::validate_sample;

/// Run the sample checks and print the report
pub fn run(folder: PathBuf, sample_name: String, version: InstrumentVersion) -> Result<()> {
    info!("Rock-Eval Validator");
    info!("===================");
    info!("Folder: {}", folder.display());
    info!("Sample: {} ({})", sample_name, version);
    info!("");

    let report = validate_sample(&folder, &sample_name, version);

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    // Exit with error code if validation failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
