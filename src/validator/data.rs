use crate::curves::{extract_curve, Column, Curves, Phase};
use crate::data::RawData;
use crate::instrument::InstrumentVersion;
use crate::metadata::Metadata;
use crate::normalize::normalize_curves;

use super::{Stage, ValidationCheck, ValidationReport};

/// Step 3: curve sections exist and have the instrument's column layout.
/// Returns the raw curves when both could be built.
pub(crate) fn check_curves(
    data: &RawData,
    version: InstrumentVersion,
    report: &mut ValidationReport,
) -> Option<Curves> {
    let mut tables = Vec::with_capacity(2);

    for phase in Phase::ALL {
        let name = format!("{} curve [{}]", phase, version.curve_section(phase));
        match extract_curve(data, version, phase) {
            Ok(table) if table.is_empty() => {
                report.add_check(ValidationCheck::warning(Stage::Curves, name, "no rows"));
                tables.push(table);
            }
            Ok(table) => {
                report.add_check(ValidationCheck::ok(
                    Stage::Curves,
                    format!("{}: {} rows x {} columns", name, table.n_rows(), table.n_columns()),
                ));
                if let Some(time) = table.column(Column::Time) {
                    if let Some(idx) = time.windows(2).position(|w| w[1] < w[0]) {
                        report.add_check(ValidationCheck::warning(
                            Stage::Curves,
                            format!("{} time axis", phase),
                            format!("time decreases at row {}", idx + 1),
                        ));
                    }
                }
                tables.push(table);
            }
            Err(e) => {
                report.add_check(ValidationCheck::failed(Stage::Curves, name, e.to_string()));
            }
        }
    }

    if tables.len() != Phase::ALL.len() {
        return None;
    }
    let oxidation = tables.pop()?;
    let pyrolysis = tables.pop()?;
    Some(Curves {
        pyrolysis,
        oxidation,
    })
}

/// Step 4: normalization succeeds and yields finite values
pub(crate) fn check_normalization(
    raw: &Curves,
    metadata: &Metadata,
    version: InstrumentVersion,
    report: &mut ValidationReport,
) {
    let normalized = match normalize_curves(raw, metadata, version) {
        Ok(curves) => curves,
        Err(e) => {
            report.add_check(ValidationCheck::failed(
                Stage::Normalization,
                "Normalize curves",
                e.to_string(),
            ));
            return;
        }
    };

    for phase in Phase::ALL {
        let table = normalized.get(phase);
        let non_finite: usize = version
            .signal_channels(phase)
            .filter_map(|c| table.column(c))
            .map(|values| values.iter().filter(|v| !v.is_finite()).count())
            .sum();
        let name = format!("Normalized {} curve", phase);
        if non_finite == 0 {
            report.add_check(ValidationCheck::ok(Stage::Normalization, name));
        } else {
            report.add_check(ValidationCheck::warning(
                Stage::Normalization,
                name,
                format!("{} non-finite values", non_finite),
            ));
        }
    }
}
