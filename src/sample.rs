//! # Sample handle
//!
//! [`RockEvalSample`] is the entry point most callers need: it locates and
//! parses a sample's files once, then hands out metadata and curves.
//!
//! ```rust,no_run
//! use rockeval::sample::RockEvalSample;
//!
//! let sample = RockEvalSample::open("example", "RE6", "example_data")?;
//! println!("Sample mass: {:?}", sample.metadata().get("Param", "Quant"));
//!
//! let curves = sample.curves(true)?;
//! println!("{} pyrolysis rows", curves.pyrolysis.n_rows());
//! # Ok::<(), rockeval::RockEvalError>(())
//! ```

use std::path::{Path, PathBuf};

use log::debug;

use crate::curves::{extract_curves, Curves};
use crate::data::RawData;
use crate::error::Result;
use crate::instrument::InstrumentVersion;
use crate::metadata::Metadata;
use crate::normalize::{normalize_curves, NormalizationParams};
use crate::parser::parse_sample;

/// Version argument accepted by [`RockEvalSample::open`]: either a parsed
/// [`InstrumentVersion`] or its name (`"RE6"`, `"RE7"`).
pub trait IntoInstrumentVersion {
    /// Resolve to a supported version
    fn into_version(self) -> Result<InstrumentVersion>;
}

impl IntoInstrumentVersion for InstrumentVersion {
    fn into_version(self) -> Result<InstrumentVersion> {
        Ok(self)
    }
}

impl IntoInstrumentVersion for &str {
    fn into_version(self) -> Result<InstrumentVersion> {
        self.parse()
    }
}

impl IntoInstrumentVersion for &String {
    fn into_version(self) -> Result<InstrumentVersion> {
        self.parse()
    }
}

/// One parsed Rock-Eval sample. Metadata and raw data are read-only once
/// loaded; curves are rebuilt from the raw data on every request.
#[derive(Debug, Clone)]
pub struct RockEvalSample {
    name: String,
    version: InstrumentVersion,
    folder: PathBuf,
    metadata: Metadata,
    data: RawData,
}

impl RockEvalSample {
    /// Locate and parse the files of `sample_name` inside `folder`.
    ///
    /// The version is checked before any file is opened.
    pub fn open<V, P>(sample_name: &str, version: V, folder: P) -> Result<Self>
    where
        V: IntoInstrumentVersion,
        P: AsRef<Path>,
    {
        let version = version.into_version()?;
        let folder = folder.as_ref().to_path_buf();
        debug!("Opening {} sample '{}' in {}", version, sample_name, folder.display());

        let parsed = parse_sample(&folder, sample_name, version)?;
        Ok(Self {
            name: sample_name.to_string(),
            version,
            folder,
            metadata: parsed.metadata,
            data: parsed.data,
        })
    }

    /// Build a sample from content that was parsed elsewhere.
    pub fn from_parts(
        sample_name: impl Into<String>,
        version: InstrumentVersion,
        metadata: Metadata,
        data: RawData,
    ) -> Self {
        Self {
            name: sample_name.into(),
            version,
            folder: PathBuf::new(),
            metadata,
            data,
        }
    }

    /// Sample name (file stem of its source files)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instrument generation
    pub fn version(&self) -> InstrumentVersion {
        self.version
    }

    /// Folder the sample was read from (empty for [`from_parts`](Self::from_parts))
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Paths of the source files, in reading order
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.version
            .source_files()
            .into_iter()
            .map(|ft| ft.path_for(&self.folder, &self.name))
            .collect()
    }

    /// Metadata sections
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Raw data sections
    pub fn raw_data(&self) -> &RawData {
        &self.data
    }

    /// Pyrolysis and oxidation curves, optionally normalized to sample mass.
    pub fn curves(&self, normalized: bool) -> Result<Curves> {
        let raw = extract_curves(&self.data, self.version)?;
        if normalized {
            normalize_curves(&raw, &self.metadata, self.version)
        } else {
            Ok(raw)
        }
    }

    /// Normalization constants read from this sample's metadata
    pub fn normalization_params(&self) -> Result<NormalizationParams> {
        NormalizationParams::from_metadata(&self.metadata, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RockEvalError;
    use crate::instrument::FileType;
    use crate::parser::parse_str;

    #[test]
    fn test_unknown_version_fails_before_io() {
        // The folder does not exist; a version error proves no file was opened.
        let err = RockEvalSample::open("s1", "RE5", "/nonexistent/folder").unwrap_err();
        assert!(matches!(err, RockEvalError::Configuration(_)));
    }

    #[test]
    fn test_missing_files_are_io_errors() {
        let err = RockEvalSample::open("s1", "RE7", "/nonexistent/folder").unwrap_err();
        assert!(matches!(err, RockEvalError::Io { .. }));
    }

    #[test]
    fn test_from_parts() {
        let parsed = parse_str(
            "[Param]\nQuant=1\n[Standard]\nK_FID=1\n\
             [Curves Pyro]\n0\t1\t2\t3\t4\t5\n[Curves Oxi]\n0\t1\t2\t3\t4\n",
            FileType::Combined,
        )
        .unwrap();
        let sample =
            RockEvalSample::from_parts("mem", InstrumentVersion::Re7, parsed.metadata, parsed.data);

        assert_eq!(sample.name(), "mem");
        let raw = sample.curves(false).unwrap();
        assert_eq!(raw.pyrolysis.n_columns(), 6);
        assert_eq!(raw.oxidation.n_columns(), 5);

        // Baselines are missing, so normalization is a configuration error
        assert!(matches!(sample.curves(true), Err(RockEvalError::Configuration(_))));
    }

    #[test]
    fn test_source_paths() {
        let sample = RockEvalSample::from_parts(
            "s1",
            InstrumentVersion::Re6,
            Metadata::new(),
            RawData::new(),
        );
        let names: Vec<_> = sample
            .source_paths()
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["s1.R00", "s1.S00"]);
    }
}
