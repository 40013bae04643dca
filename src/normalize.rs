//! # Curve normalization
//!
//! Turns raw detector signals into quantities per unit of sample mass. For
//! every signal channel, in this order:
//!
//! 1. subtract the channel's baseline (instrument zero drift), then
//! 2. scale by the channel's conversion factor.
//!
//! | Channel | Converted value |
//! |---------|-----------------|
//! | FID     | `kfid * 100 * 0.83 * v / weight` |
//! | CO      | `(12/28) * v / (1000 * weight)` |
//! | CO2     | `(12/44) * v / (1000 * weight)` |
//! | SO2     | `0.5 * v / (1000 * weight)` |
//!
//! `weight` is the sample mass (`[Param] Quant`) and `kfid` the FID
//! calibration constant. Time and temperature are never touched.

use std::collections::BTreeMap;

use crate::curves::{Column, Curves, Phase};
use crate::error::{Result, RockEvalError};
use crate::instrument::{FieldRef, InstrumentVersion, WEIGHT_FIELD};
use crate::metadata::Metadata;

/// FID response to hydrocarbon mass: 100 × 0.83 (carbon fraction of HC)
pub const HC_FACTOR: f64 = 100.0 * 0.83;
/// Carbon fraction of CO by mass
pub const CO_MASS_RATIO: f64 = 12.0 / 28.0;
/// Carbon fraction of CO2 by mass
pub const CO2_MASS_RATIO: f64 = 12.0 / 44.0;
/// Sulfur fraction of SO2 by mass
pub const SO2_MASS_RATIO: f64 = 0.5;

/// Per-channel baseline offsets, keyed by phase and signal column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Baselines {
    values: BTreeMap<(Phase, Column), f64>,
}

impl Baselines {
    /// Read every baseline the instrument defines from the metadata.
    pub fn from_metadata(metadata: &Metadata, version: InstrumentVersion) -> Result<Self> {
        let mut values = BTreeMap::new();
        for phase in Phase::ALL {
            for channel in version.signal_channels(phase) {
                let Some(field) = version.baseline_field(phase, channel) else {
                    continue;
                };
                let raw = metadata.require(field)?;
                let value = if version.empty_baseline_is_zero() && raw.trim().is_empty() {
                    0.0
                } else {
                    parse_number(field, raw)?
                };
                values.insert((phase, channel), value);
            }
        }
        Ok(Self { values })
    }

    /// Baseline for one channel
    pub fn get(&self, phase: Phase, channel: Column) -> Option<f64> {
        self.values.get(&(phase, channel)).copied()
    }

    /// All baselines, ordered by phase then channel
    pub fn iter(&self) -> impl Iterator<Item = (Phase, Column, f64)> + '_ {
        self.values.iter().map(|(&(p, c), &v)| (p, c, v))
    }
}

/// Everything the normalizer needs from a sample's metadata
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationParams {
    /// Sample mass
    pub weight: f64,
    /// FID calibration constant
    pub kfid: f64,
    /// Baseline offsets
    pub baselines: Baselines,
}

impl NormalizationParams {
    /// Read and check the sample mass, calibration constant, and baselines.
    pub fn from_metadata(metadata: &Metadata, version: InstrumentVersion) -> Result<Self> {
        let weight = parse_number(WEIGHT_FIELD, metadata.require(WEIGHT_FIELD)?)?;
        if weight == 0.0 || !weight.is_finite() {
            return Err(RockEvalError::Configuration(format!(
                "Sample weight {} must be a non-zero finite number, got {}",
                WEIGHT_FIELD, weight
            )));
        }

        let kfid_field = version.kfid_field();
        let kfid = parse_number(kfid_field, metadata.require(kfid_field)?)?;
        let baselines = Baselines::from_metadata(metadata, version)?;

        Ok(Self {
            weight,
            kfid,
            baselines,
        })
    }

    /// Convert one baseline-corrected value of a signal channel.
    /// Time and temperature pass through unchanged.
    pub fn convert(&self, channel: Column, value: f64) -> f64 {
        match channel {
            Column::Fid => self.kfid * HC_FACTOR * value / self.weight,
            Column::Co => gas_mass(CO_MASS_RATIO, value, self.weight),
            Column::Co2 => gas_mass(CO2_MASS_RATIO, value, self.weight),
            Column::So2 => gas_mass(SO2_MASS_RATIO, value, self.weight),
            Column::Time | Column::Temperature => value,
        }
    }

    /// Baseline subtraction followed by conversion, for one raw value.
    pub fn normalize_value(&self, phase: Phase, channel: Column, value: f64) -> f64 {
        let baseline = self.baselines.get(phase, channel).unwrap_or(0.0);
        self.convert(channel, value - baseline)
    }
}

fn gas_mass(mass_ratio: f64, value: f64, weight: f64) -> f64 {
    mass_ratio * value / (1000.0 * weight)
}

/// Normalize a sample's raw curves. The input is left untouched.
pub fn normalize_curves(
    raw: &Curves,
    metadata: &Metadata,
    version: InstrumentVersion,
) -> Result<Curves> {
    let params = NormalizationParams::from_metadata(metadata, version)?;
    Ok(normalize_with(raw, &params, version))
}

/// Normalize with parameters that were already read.
pub fn normalize_with(
    raw: &Curves,
    params: &NormalizationParams,
    version: InstrumentVersion,
) -> Curves {
    let mut curves = raw.clone();
    for phase in Phase::ALL {
        let table = curves.get_mut(phase);
        for channel in version.signal_channels(phase) {
            table.map_column(channel, |v| params.normalize_value(phase, channel, v));
        }
    }
    curves
}

fn parse_number(field: FieldRef, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RockEvalError::malformed(field.section, field.field, raw))
}
