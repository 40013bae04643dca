use anyhow::{Context, Result};
use log::{error, info};
use std::path::{Path, PathBuf};

use rockeval::export::{export_sample, ExportOptions};
use rockeval::instrument::InstrumentVersion;
use rockeval::sample::RockEvalSample;

use super::Config;

/// Export curves and metadata of each sample found in `folder`.
///
/// `normalized` is `Some` when `--raw` or `--normalized` was given.
pub fn run(
    folder: PathBuf,
    samples: Vec<String>,
    instrument: Option<InstrumentVersion>,
    output: Option<PathBuf>,
    normalized: Option<bool>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    if !folder.is_dir() {
        anyhow::bail!("Input folder does not exist: {}", folder.display());
    }

    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::from_file(&path)?
        }
        None => Config::default(),
    };

    // Command-line flags win over the config file
    let version = match instrument {
        Some(version) => version,
        None => config.conversion.instrument()?.with_context(|| {
            format!(
                "No instrument given; pass --instrument ({}) or set it in the config file",
                InstrumentVersion::variants().join(", ")
            )
        })?,
    };
    let normalized = resolve_normalized(normalized, config.conversion.normalized);
    let output = output
        .or(config.conversion.output_dir)
        .unwrap_or_else(|| default_output_dir(&folder));

    info!("Rock-Eval Converter");
    info!("===================");
    info!("Input:      {}", folder.display());
    info!("Output:     {}", output.display());
    info!("Instrument: {}", version);
    info!("Curves:     {}", if normalized { "normalized" } else { "raw" });

    let options = ExportOptions { normalized };
    let mut failed = Vec::new();

    for name in &samples {
        let result = RockEvalSample::open(name, version, &folder)
            .and_then(|sample| export_sample(&sample, &output, &options));
        match result {
            Ok(summary) => {
                info!("  {}: {}", name, summary.pyrolysis_csv.display());
                info!("  {}: {}", name, summary.oxidation_csv.display());
                info!("  {}: {}", name, summary.metadata_json.display());
            }
            Err(e) => {
                error!("Sample '{}' failed: {}", name, e);
                failed.push(name.as_str());
            }
        }
    }

    info!(
        "Conversion complete: {} of {} samples exported",
        samples.len() - failed.len(),
        samples.len()
    );

    if !failed.is_empty() {
        anyhow::bail!("{} sample(s) failed: {}", failed.len(), failed.join(", "));
    }

    Ok(())
}

/// Flag, then config file, then normalized by default
fn resolve_normalized(flag: Option<bool>, config: Option<bool>) -> bool {
    flag.or(config).unwrap_or(true)
}

/// `<folder>_treated` next to the input folder
fn default_output_dir(folder: &Path) -> PathBuf {
    match folder.file_name() {
        Some(name) => folder.with_file_name(format!("{}_treated", name.to_string_lossy())),
        None => folder.join("treated"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_precedence() {
        let config = Config::from_str("[conversion]\nnormalized = false\n").unwrap();
        let from_file = config.conversion.normalized;

        assert!(!resolve_normalized(None, from_file));
        assert!(resolve_normalized(Some(true), from_file));
        assert!(!resolve_normalized(Some(false), None));
        assert!(resolve_normalized(None, None));
    }

    #[test]
    fn test_default_output_dir() {
        assert_eq!(
            default_output_dir(Path::new("data/example_data")),
            PathBuf::from("data/example_data_treated")
        );
        assert_eq!(default_output_dir(Path::new("/")), PathBuf::from("/treated"));
    }
}
