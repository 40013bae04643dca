//! Instrument generations and the file conventions each one uses.
//!
//! Everything that differs between Rock-Eval 6 and Rock-Eval 7 lives here:
//! which files make up a sample, how the curve sections are spelled, which
//! columns each curve carries, and where the normalization constants sit in
//! the metadata. The version is chosen once when a sample is opened and then
//! passed to the parser, extractor, and normalizer.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::curves::{Column, Phase};
use crate::error::{Result, RockEvalError};

/// Supported Rock-Eval instrument generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrumentVersion {
    /// Rock-Eval 6: metadata in `.R00`, curves in `.S00`.
    Re6,
    /// Rock-Eval 7: metadata and curves in a single `.B00` file.
    Re7,
}

/// Location of a single metadata value: `[section]` then `field=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRef {
    /// Section name, without brackets
    pub section: &'static str,
    /// Field name inside the section
    pub field: &'static str,
}

impl FieldRef {
    const fn new(section: &'static str, field: &'static str) -> Self {
        Self { section, field }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section, self.field)
    }
}

/// Sample mass, identical for both generations.
pub const WEIGHT_FIELD: FieldRef = FieldRef::new("Param", "Quant");

const RE6_PYRO_COLUMNS: &[Column] = &[
    Column::Time,
    Column::Temperature,
    Column::Fid,
    Column::Co,
    Column::Co2,
];
const RE6_OXI_COLUMNS: &[Column] = &[Column::Time, Column::Temperature, Column::Co, Column::Co2];
const RE7_PYRO_COLUMNS: &[Column] = &[
    Column::Time,
    Column::Temperature,
    Column::Fid,
    Column::Co,
    Column::Co2,
    Column::So2,
];
const RE7_OXI_COLUMNS: &[Column] = &[
    Column::Time,
    Column::Temperature,
    Column::Co,
    Column::Co2,
    Column::So2,
];

impl InstrumentVersion {
    /// Returns all supported version names.
    pub fn variants() -> &'static [&'static str] {
        &["RE6", "RE7"]
    }

    /// File the metadata sections are read from.
    pub fn metadata_file(&self) -> FileType {
        match self {
            InstrumentVersion::Re6 => FileType::Metadata,
            InstrumentVersion::Re7 => FileType::Combined,
        }
    }

    /// File the curve sections are read from.
    pub fn data_file(&self) -> FileType {
        match self {
            InstrumentVersion::Re6 => FileType::Data,
            InstrumentVersion::Re7 => FileType::Combined,
        }
    }

    /// Distinct files that make up one sample, in the order they are read.
    pub fn source_files(&self) -> Vec<FileType> {
        let mut files = vec![self.metadata_file()];
        if self.data_file() != self.metadata_file() {
            files.push(self.data_file());
        }
        files
    }

    /// Exact (case-sensitive) name of the raw data section for a curve.
    pub fn curve_section(&self, phase: Phase) -> &'static str {
        match (self, phase) {
            (InstrumentVersion::Re6, Phase::Pyrolysis) => "Curves pyro",
            (InstrumentVersion::Re6, Phase::Oxidation) => "Curves oxi",
            (InstrumentVersion::Re7, Phase::Pyrolysis) => "Curves Pyro",
            (InstrumentVersion::Re7, Phase::Oxidation) => "Curves Oxi",
        }
    }

    /// Column layout of a curve section, in file order.
    pub fn curve_columns(&self, phase: Phase) -> &'static [Column] {
        match (self, phase) {
            (InstrumentVersion::Re6, Phase::Pyrolysis) => RE6_PYRO_COLUMNS,
            (InstrumentVersion::Re6, Phase::Oxidation) => RE6_OXI_COLUMNS,
            (InstrumentVersion::Re7, Phase::Pyrolysis) => RE7_PYRO_COLUMNS,
            (InstrumentVersion::Re7, Phase::Oxidation) => RE7_OXI_COLUMNS,
        }
    }

    /// Signal channels of a curve: every column except time and temperature.
    pub fn signal_channels(&self, phase: Phase) -> impl Iterator<Item = Column> {
        self.curve_columns(phase)
            .iter()
            .copied()
            .filter(|c| c.is_signal())
    }

    /// FID calibration constant.
    pub fn kfid_field(&self) -> FieldRef {
        match self {
            InstrumentVersion::Re6 => FieldRef::new("Standard", "KFid"),
            InstrumentVersion::Re7 => FieldRef::new("Standard", "K_FID"),
        }
    }

    /// Baseline field for a signal channel, or `None` if the channel is not
    /// recorded by this generation.
    pub fn baseline_field(&self, phase: Phase, channel: Column) -> Option<FieldRef> {
        use Column::*;
        use Phase::*;
        match self {
            InstrumentVersion::Re6 => {
                let section = match (phase, channel) {
                    (Pyrolysis, Fid) => "Curs manu_1",
                    (Pyrolysis, Co) => "Curs manu_2",
                    (Pyrolysis, Co2) => "Curs manu_3",
                    (Oxidation, Co) => "Curs manu_4",
                    (Oxidation, Co2) => "Curs manu_5",
                    _ => return None,
                };
                Some(FieldRef::new(section, "Base"))
            }
            InstrumentVersion::Re7 => {
                let field = match (phase, channel) {
                    (Pyrolysis, Fid) => "LB_FID",
                    (Pyrolysis, Co) => "LB_CO_P",
                    (Pyrolysis, Co2) => "LB_CO2_P",
                    (Pyrolysis, So2) => "LB_SO2_P",
                    (Oxidation, Co) => "LB_CO_O",
                    (Oxidation, Co2) => "LB_CO2_O",
                    (Oxidation, So2) => "LB_SO2_O",
                    _ => return None,
                };
                Some(FieldRef::new("base ligne", field))
            }
        }
    }

    /// RE7 leaves unused baselines blank; those count as zero. RE6 has no
    /// such fallback.
    pub fn empty_baseline_is_zero(&self) -> bool {
        matches!(self, InstrumentVersion::Re7)
    }
}

impl fmt::Display for InstrumentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstrumentVersion::Re6 => write!(f, "RE6"),
            InstrumentVersion::Re7 => write!(f, "RE7"),
        }
    }
}

impl FromStr for InstrumentVersion {
    type Err = RockEvalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RE6" => Ok(InstrumentVersion::Re6),
            "RE7" => Ok(InstrumentVersion::Re7),
            _ => Err(RockEvalError::Configuration(format!(
                "Unsupported instrument version '{}'. Valid options: {}",
                s,
                InstrumentVersion::variants().join(", ")
            ))),
        }
    }
}

/// Kind of Rock-Eval output file, identified by its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
    /// `.R00`: metadata sections only
    Metadata,
    /// `.S00`: curve sections only
    Data,
    /// `.B00`: metadata sections followed by curve sections
    Combined,
}

impl FileType {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Metadata => "R00",
            FileType::Data => "S00",
            FileType::Combined => "B00",
        }
    }

    /// Identify a file type from a path's extension (exact match).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        ext.parse()
    }

    /// `<folder>/<sample_name>.<EXT>`
    pub fn path_for(&self, folder: &Path, sample_name: &str) -> PathBuf {
        folder.join(format!("{}.{}", sample_name, self.extension()))
    }

    /// Whether opening `section` ends the metadata part of the file.
    pub fn starts_data(&self, section: &str) -> bool {
        match self {
            FileType::Metadata => false,
            FileType::Data => true,
            FileType::Combined => section == "Curves Pyro",
        }
    }
}

impl FromStr for FileType {
    type Err = RockEvalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "R00" => Ok(FileType::Metadata),
            "S00" => Ok(FileType::Data),
            "B00" => Ok(FileType::Combined),
            other => Err(RockEvalError::Configuration(format!(
                "Unsupported file extension '.{}'. Valid options: .R00, .S00, .B00",
                other
            ))),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
