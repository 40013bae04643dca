//! # Export
//!
//! Writes a sample's curves as CSV and its metadata as JSON:
//!
//! ```text
//! <output_dir>/
//! ├── <sample>_pyr.csv        # time,T,FID,CO,CO2[,SO2]
//! ├── <sample>_oxi.csv        # time,T,CO,CO2[,SO2]
//! └── <sample>_metadata.json  # { "section": { "field": "value", "Extra": [...] } }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::curves::{Column, CurveTable, Phase};
use crate::error::Result;
use crate::metadata::Metadata;
use crate::sample::RockEvalSample;

/// What to export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Normalize curves to sample mass before writing (default: true)
    pub normalized: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { normalized: true }
    }
}

/// Files written for one sample
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Pyrolysis curve CSV
    pub pyrolysis_csv: PathBuf,
    /// Oxidation curve CSV
    pub oxidation_csv: PathBuf,
    /// Metadata JSON
    pub metadata_json: PathBuf,
    /// Rows written to the pyrolysis CSV
    pub pyrolysis_rows: usize,
    /// Rows written to the oxidation CSV
    pub oxidation_rows: usize,
}

/// Write a curve table as CSV: a header of column names, then one line per row.
pub fn write_curve_csv<W: Write>(table: &CurveTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(table.columns().iter().map(Column::name))?;
    for row in table.rows() {
        // `{:?}` keeps a decimal point on whole numbers (15.0, not 15)
        csv_writer.write_record(row.iter().map(|v| format!("{:?}", v)))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a curve table to a CSV file
pub fn write_curve_csv_file(table: &CurveTable, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_curve_csv(table, BufWriter::new(file))
}

/// Write metadata as a JSON document indented with four spaces.
pub fn write_metadata_json<W: Write>(metadata: &Metadata, writer: W) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    metadata.serialize(&mut serializer)?;
    serializer.into_inner().flush()?;
    Ok(())
}

/// Write metadata to a JSON file
pub fn write_metadata_json_file(metadata: &Metadata, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_metadata_json(metadata, BufWriter::new(file))
}

/// Export curves and metadata of one sample into `output_dir`, creating it
/// if needed.
pub fn export_sample(
    sample: &RockEvalSample,
    output_dir: &Path,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    std::fs::create_dir_all(output_dir)?;

    let curves = sample.curves(options.normalized)?;
    let curve_path = |phase: Phase| {
        output_dir.join(format!("{}_{}.csv", sample.name(), phase.short_name()))
    };

    let pyrolysis_csv = curve_path(Phase::Pyrolysis);
    write_curve_csv_file(&curves.pyrolysis, &pyrolysis_csv)?;
    let oxidation_csv = curve_path(Phase::Oxidation);
    write_curve_csv_file(&curves.oxidation, &oxidation_csv)?;

    let metadata_json = output_dir.join(format!("{}_metadata.json", sample.name()));
    write_metadata_json_file(sample.metadata(), &metadata_json)?;

    info!(
        "Exported '{}' to {} ({} pyrolysis rows, {} oxidation rows)",
        sample.name(),
        output_dir.display(),
        curves.pyrolysis.n_rows(),
        curves.oxidation.n_rows()
    );

    Ok(ExportSummary {
        pyrolysis_csv,
        oxidation_csv,
        metadata_json,
        pyrolysis_rows: curves.pyrolysis.n_rows(),
        oxidation_rows: curves.oxidation.n_rows(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::FileType;
    use crate::parser::parse_str;

    #[test]
    fn test_curve_csv() {
        let mut table = CurveTable::new(&[Column::Time, Column::Temperature, Column::Co]);
        table.push_row(&[0.0, 300.0, 1.5]).unwrap();
        table.push_row(&[1.0, 301.0, 0.000125]).unwrap();

        let mut out = Vec::new();
        write_curve_csv(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines, vec!["time,T,CO", "0.0,300.0,1.5", "1.0,301.0,0.000125"]);
    }

    #[test]
    fn test_metadata_json() {
        let content = "[Param]\nQuant=2.5\nfree text\n[Empty]\n";
        let parsed = parse_str(content, FileType::Metadata).unwrap();

        let mut out = Vec::new();
        write_metadata_json(&parsed.metadata, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\n    \"Param\": {\n        \"Quant\": \"2.5\","));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["Param"]["Extra"], serde_json::json!(["free text"]));
        assert_eq!(value["Empty"], serde_json::json!({}));
    }
}
