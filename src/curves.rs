//! # Curve tables
//!
//! Typed, column-oriented curves built from the raw data sections. Every
//! cell is parsed with a plain per-row loop; there is no type inference,
//! and a row that does not match the instrument's column layout is an error
//! rather than being padded or truncated.

use std::fmt;

use log::debug;

use crate::data::RawData;
use crate::error::{Result, RockEvalError};
use crate::instrument::InstrumentVersion;

/// Thermal program phase a curve was recorded in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Heating under inert gas
    Pyrolysis,
    /// Heating under air
    Oxidation,
}

impl Phase {
    /// Both phases, pyrolysis first
    pub const ALL: [Phase; 2] = [Phase::Pyrolysis, Phase::Oxidation];

    /// Short tag used in exported file names (`pyr`, `oxi`)
    pub fn short_name(&self) -> &'static str {
        match self {
            Phase::Pyrolysis => "pyr",
            Phase::Oxidation => "oxi",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Pyrolysis => write!(f, "pyrolysis"),
            Phase::Oxidation => write!(f, "oxidation"),
        }
    }
}

/// Column of a curve table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Acquisition time
    Time,
    /// Oven temperature
    Temperature,
    /// Flame ionization detector (hydrocarbons)
    Fid,
    /// Carbon monoxide
    Co,
    /// Carbon dioxide
    Co2,
    /// Sulfur dioxide (RE7 only)
    So2,
}

impl Column {
    /// Column header as written in exports
    pub fn name(&self) -> &'static str {
        match self {
            Column::Time => "time",
            Column::Temperature => "T",
            Column::Fid => "FID",
            Column::Co => "CO",
            Column::Co2 => "CO2",
            Column::So2 => "SO2",
        }
    }

    /// Detector signal, as opposed to the time and temperature axes
    pub fn is_signal(&self) -> bool {
        !matches!(self, Column::Time | Column::Temperature)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric table with a fixed set of named columns, one row per sample instant
#[derive(Debug, Clone, PartialEq)]
pub struct CurveTable {
    columns: Vec<Column>,
    values: Vec<Vec<f64>>,
}

impl CurveTable {
    /// Empty table with the given column layout
    pub fn new(columns: &[Column]) -> Self {
        Self::with_capacity(columns, 0)
    }

    /// Empty table with room for `rows` rows
    pub fn with_capacity(columns: &[Column], rows: usize) -> Self {
        Self {
            columns: columns.to_vec(),
            values: columns.iter().map(|_| Vec::with_capacity(rows)).collect(),
        }
    }

    /// Append one row; its length must match the column count
    pub fn push_row(&mut self, row: &[f64]) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(RockEvalError::structural(
                "curve table",
                format!(
                    "row {}: expected {} values, found {}",
                    self.n_rows(),
                    self.columns.len(),
                    row.len()
                ),
            ));
        }
        for (column, value) in self.values.iter_mut().zip(row) {
            column.push(*value);
        }
        Ok(())
    }

    /// Column layout, in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Values of one column, if the table has it
    pub fn column(&self, column: Column) -> Option<&[f64]> {
        self.index_of(column).map(|idx| self.values[idx].as_slice())
    }

    /// Apply `f` to every value of one column. Returns false if the table
    /// has no such column.
    pub fn map_column(&mut self, column: Column, f: impl Fn(f64) -> f64) -> bool {
        match self.index_of(column) {
            Some(idx) => {
                self.values[idx].iter_mut().for_each(|v| *v = f(*v));
                true
            }
            None => false,
        }
    }

    /// Values of one row, in column order
    pub fn row(&self, idx: usize) -> Option<Vec<f64>> {
        if idx >= self.n_rows() {
            return None;
        }
        Some(self.values.iter().map(|col| col[idx]).collect())
    }

    /// Iterate rows in acquisition order
    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.n_rows()).map(move |idx| self.values.iter().map(|col| col[idx]).collect())
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Number of columns
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    fn index_of(&self, column: Column) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }
}

/// The two curves of one sample
#[derive(Debug, Clone, PartialEq)]
pub struct Curves {
    /// Pyrolysis curve
    pub pyrolysis: CurveTable,
    /// Oxidation curve
    pub oxidation: CurveTable,
}

impl Curves {
    /// Curve for a phase
    pub fn get(&self, phase: Phase) -> &CurveTable {
        match phase {
            Phase::Pyrolysis => &self.pyrolysis,
            Phase::Oxidation => &self.oxidation,
        }
    }

    /// Mutable curve for a phase
    pub fn get_mut(&mut self, phase: Phase) -> &mut CurveTable {
        match phase {
            Phase::Pyrolysis => &mut self.pyrolysis,
            Phase::Oxidation => &mut self.oxidation,
        }
    }
}

/// Build both curves of a sample from its raw data sections.
pub fn extract_curves(data: &RawData, version: InstrumentVersion) -> Result<Curves> {
    Ok(Curves {
        pyrolysis: extract_curve(data, version, Phase::Pyrolysis)?,
        oxidation: extract_curve(data, version, Phase::Oxidation)?,
    })
}

/// Build one curve from its raw data section.
pub fn extract_curve(
    data: &RawData,
    version: InstrumentVersion,
    phase: Phase,
) -> Result<CurveTable> {
    let section = version.curve_section(phase);
    let columns = version.curve_columns(phase);
    let rows = data.section(section).ok_or_else(|| {
        RockEvalError::structural(section, format!("{} curve section not found", phase))
    })?;

    let mut table = CurveTable::with_capacity(columns, rows.len());
    let mut parsed = Vec::with_capacity(columns.len());

    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(RockEvalError::structural(
                section,
                format!(
                    "row {}: expected {} fields ({}), found {}",
                    row_idx,
                    columns.len(),
                    columns.iter().map(Column::name).collect::<Vec<_>>().join(", "),
                    row.len()
                ),
            ));
        }

        parsed.clear();
        for (cell, column) in row.iter().zip(columns) {
            let value = cell.trim().parse::<f64>().map_err(|_| {
                let location = format!("row {}, column {}", row_idx, column);
                RockEvalError::malformed(section, location, cell.as_str())
            })?;
            parsed.push(value);
        }
        table.push_row(&parsed)?;
    }

    debug!("Extracted {} curve: {} rows from [{}]", phase, table.n_rows(), section);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::FileType;
    use crate::parser::parse_str;

    fn raw(content: &str) -> RawData {
        parse_str(content, FileType::Data).unwrap().data
    }

    #[test]
    fn test_re6_extraction() {
        let data = raw(
            "[Curves pyro]\n0\t100\t15\t0\t0\n1\t101\t16.5\t1\t2\n[Curves oxi]\n0\t300\t2\t3\n",
        );
        let curves = extract_curves(&data, InstrumentVersion::Re6).unwrap();

        assert_eq!(curves.pyrolysis.n_columns(), 5);
        assert_eq!(curves.pyrolysis.n_rows(), 2);
        assert_eq!(curves.pyrolysis.column(Column::Fid).unwrap(), &[15.0, 16.5]);
        assert!(curves.pyrolysis.column(Column::So2).is_none());
        assert_eq!(
            curves.oxidation.columns(),
            &[Column::Time, Column::Temperature, Column::Co, Column::Co2]
        );
        assert_eq!(curves.oxidation.row(0), Some(vec![0.0, 300.0, 2.0, 3.0]));
    }

    #[test]
    fn test_section_names_are_case_sensitive() {
        // RE7 spelling in an RE6 sample
        let data = raw("[Curves Pyro]\n0\t100\t15\t0\t0\n[Curves oxi]\n0\t300\t2\t3\n");
        let err = extract_curves(&data, InstrumentVersion::Re6).unwrap_err();
        assert!(
            matches!(err, RockEvalError::Structural { ref section, .. } if section == "Curves pyro")
        );
    }

    #[test]
    fn test_wrong_field_count() {
        let data = raw("[Curves Pyro]\n0\t100\t15\t0\t0\n[Curves Oxi]\n0\t300\t2\t3\t1\n");
        let err = extract_curve(&data, InstrumentVersion::Re7, Phase::Pyrolysis).unwrap_err();
        match err {
            RockEvalError::Structural { section, message } => {
                assert_eq!(section, "Curves Pyro");
                assert!(message.contains("row 0"));
                assert!(message.contains("expected 6"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_cell_is_malformed() {
        let mut data = RawData::new();
        data.open_section("Curves oxi")
            .0
            .push(vec!["0".into(), "300".into(), "".into(), "3".into()]);
        let err = extract_curve(&data, InstrumentVersion::Re6, Phase::Oxidation).unwrap_err();
        match err {
            RockEvalError::MalformedValue { location, value, .. } => {
                assert_eq!(location, "row 0, column CO");
                assert_eq!(value, "");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_cell() {
        let data = raw("[Curves oxi]\n0\t300\tn/a\t3\n");
        let err = extract_curve(&data, InstrumentVersion::Re6, Phase::Oxidation).unwrap_err();
        assert!(matches!(err, RockEvalError::MalformedValue { .. }));
    }

    #[test]
    fn test_cells_are_trimmed() {
        let data = raw("[Curves oxi]\n0\t 300 \t2\t3\n");
        let table = extract_curve(&data, InstrumentVersion::Re6, Phase::Oxidation).unwrap();
        assert_eq!(table.column(Column::Temperature).unwrap(), &[300.0]);
    }

    #[test]
    fn test_empty_section_gives_empty_table() {
        let data = raw("[Curves oxi]\n");
        let table = extract_curve(&data, InstrumentVersion::Re6, Phase::Oxidation).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.n_columns(), 4);
    }

    #[test]
    fn test_map_column() {
        let mut table = CurveTable::new(&[Column::Time, Column::Co]);
        table.push_row(&[0.0, 4.0]).unwrap();
        table.push_row(&[1.0, 6.0]).unwrap();

        assert!(table.map_column(Column::Co, |v| v / 2.0));
        assert!(!table.map_column(Column::So2, |v| v / 2.0));
        assert_eq!(table.column(Column::Co).unwrap(), &[2.0, 3.0]);
        assert_eq!(table.column(Column::Time).unwrap(), &[0.0, 1.0]);
        assert_eq!(table.rows().collect::<Vec<_>>(), vec![vec![0.0, 2.0], vec![1.0, 3.0]]);
    }

    #[test]
    fn test_push_row_length_mismatch() {
        let mut table = CurveTable::new(&[Column::Time, Column::Co]);
        assert!(table.push_row(&[1.0]).is_err());
        assert!(table.is_empty());
    }
}
