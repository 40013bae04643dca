use anyhow::{Context, Result};
use std::path::PathBuf;

use rockeval::curves::Phase;
use rockeval::instrument::InstrumentVersion;
use rockeval::metadata::EXTRA_FIELD;
use rockeval::sample::RockEvalSample;

/// Display sections, curves and normalization parameters of a sample
pub fn run(folder: PathBuf, sample_name: String, version: InstrumentVersion) -> Result<()> {
    let sample = RockEvalSample::open(&sample_name, version, &folder)
        .with_context(|| format!("Failed to read sample '{}'", sample_name))?;

    println!("Rock-Eval Sample Information");
    println!("============================");
    println!("Sample:     {}", sample.name());
    println!("Instrument: {}", sample.version());
    for path in sample.source_paths() {
        println!("File:       {}", path.display());
    }
    println!();

    println!("Metadata Sections:");
    for (name, section) in sample.metadata().sections() {
        let extra = section.extra().len();
        if extra > 0 {
            println!("  [{}] {} fields, {} {} lines", name, section.len(), extra, EXTRA_FIELD);
        } else {
            println!("  [{}] {} fields", name, section.len());
        }
    }
    println!();

    println!("Data Sections:");
    for (name, rows) in sample.raw_data().sections() {
        println!("  [{}] {} rows", name, rows.len());
    }
    println!();

    let curves = sample.curves(false)?;
    println!("Curves:");
    for phase in Phase::ALL {
        let table = curves.get(phase);
        let columns: Vec<&str> = table.columns().iter().map(|c| c.name()).collect();
        println!(
            "  {:<10} {:>6} rows  [{}]",
            phase.to_string(),
            table.n_rows(),
            columns.join(", ")
        );
    }
    println!();

    println!("Normalization:");
    match sample.normalization_params() {
        Ok(params) => {
            println!("  Weight: {}", params.weight);
            println!("  KFID:   {}", params.kfid);
            for (phase, channel, value) in params.baselines.iter() {
                println!("  {} {} baseline: {}", phase.short_name(), channel, value);
            }
        }
        Err(e) => println!("  unavailable: {}", e),
    }

    Ok(())
}
