use std::path::Path;

use crate::instrument::InstrumentVersion;
use crate::parser::{parse_file, ParsedFile};

use super::{Stage, ValidationCheck, ValidationReport};

/// Step 1: every source file exists and tokenizes. Returns the merged
/// content when all files could be read.
pub(crate) fn check_files(
    folder: &Path,
    sample_name: &str,
    version: InstrumentVersion,
    report: &mut ValidationReport,
) -> Option<ParsedFile> {
    let metadata_file = version.metadata_file();
    let data_file = version.data_file();
    let mut merged = ParsedFile::default();
    let mut all_read = true;

    for file_type in version.source_files() {
        let path = file_type.path_for(folder, sample_name);
        let label = format!("{} file", file_type);

        if !path.is_file() {
            report.add_check(ValidationCheck::failed(
                Stage::Files,
                label,
                format!("Not found: {}", path.display()),
            ));
            all_read = false;
            continue;
        }

        match parse_file(&path) {
            Ok(parsed) => {
                report.add_check(ValidationCheck::ok(
                    Stage::Files,
                    format!(
                        "{} parsed ({} metadata sections, {} data sections)",
                        label,
                        parsed.metadata.len(),
                        parsed.data.len()
                    ),
                ));
                if file_type == metadata_file {
                    merged.metadata = parsed.metadata;
                }
                if file_type == data_file {
                    merged.data = parsed.data;
                }
            }
            Err(e) => {
                report.add_check(ValidationCheck::failed(Stage::Files, label, e.to_string()));
                all_read = false;
            }
        }
    }

    all_read.then_some(merged)
}
