//! # Rock-Eval file parser
//!
//! Rock-Eval output files are line-oriented text:
//!
//! ```text
//! [Param]
//! Quant=62.3
//! Operator=JD
//! [Curs manu_1]
//! Base=10.0
//! free text without an equals sign
//! [Curves pyro]
//! 0	300.1	12.0	3.1	4.2
//! 1	300.4	12.5	3.0	4.4
//! ```
//!
//! Each file starts in metadata mode, where lines are `key=value` pairs of the
//! current section. Depending on the [`FileType`], one section header switches
//! the rest of the file to data mode, where lines are tab-separated rows:
//!
//! - `.R00` never switches
//! - `.S00` switches at its first header
//! - `.B00` switches at `[Curves Pyro]`
//!
//! The switch is one-way: once in data mode, a line containing `=` is still
//! a data row.

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use log::{debug, warn};

use crate::data::RawData;
use crate::error::{Result, RockEvalError};
use crate::instrument::{FileType, InstrumentVersion};
use crate::metadata::Metadata;

/// Everything read from one file, or merged from a sample's files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    /// Sections read in metadata mode
    pub metadata: Metadata,
    /// Sections read in data mode
    pub data: RawData,
}

/// Parse a single Rock-Eval file; the file type comes from its extension.
pub fn parse_file(path: &Path) -> Result<ParsedFile> {
    let file_type = FileType::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|source| RockEvalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = decode(&bytes, path);

    debug!("Parsing {} as {} file", path.display(), file_type);
    parse_str(&content, file_type)
}

/// UTF-8 when valid, otherwise Windows-1252 (the instrument software's
/// native code page). A UTF-8 byte order mark is dropped.
fn decode<'a>(bytes: &'a [u8], path: &Path) -> Cow<'a, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(e) => {
            warn!(
                "{} is not valid UTF-8 (byte {}); decoding as Windows-1252",
                path.display(),
                e.valid_up_to()
            );
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}

/// Parse the files of one sample and merge them.
///
/// For a two-file instrument the metadata comes from the metadata file and
/// the curve data from the data file; anything else in either file is
/// ignored.
pub fn parse_sample(
    folder: &Path,
    sample_name: &str,
    version: InstrumentVersion,
) -> Result<ParsedFile> {
    let metadata_file = version.metadata_file();
    let data_file = version.data_file();

    let first = parse_file(&metadata_file.path_for(folder, sample_name))?;
    if metadata_file == data_file {
        return Ok(first);
    }

    let second = parse_file(&data_file.path_for(folder, sample_name))?;
    Ok(ParsedFile {
        metadata: first.metadata,
        data: second.data,
    })
}

/// Parse file content that has already been read into memory.
pub fn parse_str(content: &str, file_type: FileType) -> Result<ParsedFile> {
    let mut parsed = ParsedFile::default();
    let mut reading_metadata = true;
    let mut current: Option<String> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = section_header(line) {
            if reading_metadata && file_type.starts_data(name) {
                debug!("Data part starts at [{}] (line {})", name, idx + 1);
                reading_metadata = false;
            }
            let existed = if reading_metadata {
                parsed.metadata.open_section(name).1
            } else {
                parsed.data.open_section(name).1
            };
            if existed {
                warn!("Section [{}] appears more than once; merging (line {})", name, idx + 1);
            }
            current = Some(name.to_string());
            continue;
        }

        let section = current.as_deref().ok_or_else(|| {
            RockEvalError::structural(
                format!(".{} file", file_type),
                format!("line {}: content before the first section header", idx + 1),
            )
        })?;

        if reading_metadata {
            let (entry, _) = parsed.metadata.open_section(section);
            match line.split_once('=') {
                Some((key, value)) => entry.insert(key, value),
                None => entry.push_extra(line),
            }
        } else {
            let (rows, _) = parsed.data.open_section(section);
            rows.push(line.split('\t').map(str::to_string).collect());
        }
    }

    debug!(
        "Parsed {} metadata sections and {} data sections",
        parsed.metadata.len(),
        parsed.data.len()
    );
    Ok(parsed)
}

/// `[name]` → `name`
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}
