//! # Sample metadata
//!
//! Rock-Eval files open with a run of `[section]` blocks holding `key=value`
//! lines: sample mass, calibration constants, baselines, oven program, and
//! so on. They are kept here exactly as read, as strings, in file order.
//! Interpretation (numbers, units) is left to the normalizer.
//!
//! Lines inside a section that have no `=` are kept as free text under the
//! reserved [`EXTRA_FIELD`] name.

mod section;


use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, RockEvalError};
use crate::instrument::FieldRef;

pub use section::{Section, EXTRA_FIELD};

/// Two-level ordered mapping: section name → field name → value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    sections: Vec<(String, Section)>,
}

impl Metadata {
    /// Create an empty metadata container
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a section by exact name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Return the named section, creating it at the end if it does not exist.
    /// The flag reports whether it already existed.
    pub(crate) fn open_section(&mut self, name: &str) -> (&mut Section, bool) {
        match self.sections.iter().position(|(n, _)| n == name) {
            Some(idx) => (&mut self.sections[idx].1, true),
            None => {
                self.sections.push((name.to_string(), Section::new()));
                let last = self.sections.len() - 1;
                (&mut self.sections[last].1, false)
            }
        }
    }

    /// Value of `field` inside `section`, if both exist
    pub fn get(&self, section: &str, field: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(field))
    }

    /// Value at a well-known location, or a configuration error naming it
    pub fn require(&self, field: FieldRef) -> Result<&str> {
        let section = self.section(field.section).ok_or_else(|| {
            RockEvalError::Configuration(format!(
                "Missing metadata section [{}] (needed for {})",
                field.section, field
            ))
        })?;
        section.get(field.field).ok_or_else(|| {
            RockEvalError::Configuration(format!("Missing metadata field {}", field))
        })
    }

    /// Sections in file order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Section names in file order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(n, _)| n.as_str())
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no section was read
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}
