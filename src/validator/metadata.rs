use crate::curves::Phase;
use crate::instrument::{FieldRef, InstrumentVersion, WEIGHT_FIELD};
use crate::metadata::Metadata;

use super::{Stage, ValidationCheck, ValidationReport};

/// Step 2: fields the normalizer reads are present and numeric
pub(crate) fn check_metadata(
    metadata: &Metadata,
    version: InstrumentVersion,
    report: &mut ValidationReport,
) {
    if let Some(weight) = check_number(metadata, WEIGHT_FIELD, "Sample weight", report) {
        if weight == 0.0 {
            report.add_check(ValidationCheck::failed(
                Stage::Metadata,
                "Sample weight is non-zero",
                format!("{} is 0", WEIGHT_FIELD),
            ));
        }
    }

    check_number(metadata, version.kfid_field(), "FID calibration", report);

    for phase in Phase::ALL {
        for channel in version.signal_channels(phase) {
            let Some(field) = version.baseline_field(phase, channel) else {
                continue;
            };
            let name = format!("{} {} baseline", phase, channel);
            match metadata.require(field) {
                Ok(value) if value.trim().is_empty() && version.empty_baseline_is_zero() => {
                    report.add_check(ValidationCheck::warning(
                        Stage::Metadata,
                        name,
                        format!("{} is blank, treated as 0", field),
                    ));
                }
                _ => {
                    check_number(metadata, field, &name, report);
                }
            }
        }
    }
}

fn check_number(
    metadata: &Metadata,
    field: FieldRef,
    name: &str,
    report: &mut ValidationReport,
) -> Option<f64> {
    let value = match metadata.require(field) {
        Ok(value) => value,
        Err(e) => {
            report.add_check(ValidationCheck::failed(Stage::Metadata, name, e.to_string()));
            return None;
        }
    };

    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => {
            report.add_check(ValidationCheck::ok(
                Stage::Metadata,
                format!("{} ({} = {})", name, field, number),
            ));
            Some(number)
        }
        _ => {
            report.add_check(ValidationCheck::failed(
                Stage::Metadata,
                name,
                format!("{} = '{}' is not a finite number", field, value),
            ));
            None
        }
    }
}
