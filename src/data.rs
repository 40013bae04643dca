//! Raw curve tables, as tokenized from the data part of a file.

/// Section name → rows of tab-separated string fields, both in file order.
///
/// Nothing is validated here: rows may have any number of fields. Shape and
/// numeric checks happen when curves are extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawData {
    sections: Vec<(String, Vec<Vec<String>>)>,
}

impl RawData {
    /// Create an empty table set
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of a section, by exact name
    pub fn section(&self, name: &str) -> Option<&[Vec<String>]> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rows)| rows.as_slice())
    }

    /// Return the rows of the named section, creating it if needed.
    /// The flag reports whether it already existed.
    pub(crate) fn open_section(&mut self, name: &str) -> (&mut Vec<Vec<String>>, bool) {
        match self.sections.iter().position(|(n, _)| n == name) {
            Some(idx) => (&mut self.sections[idx].1, true),
            None => {
                self.sections.push((name.to_string(), Vec::new()));
                let last = self.sections.len() - 1;
                (&mut self.sections[last].1, false)
            }
        }
    }

    /// Sections in file order, with their rows
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[Vec<String>])> {
        self.sections.iter().map(|(n, rows)| (n.as_str(), rows.as_slice()))
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no data section was read
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keep_order() {
        let mut data = RawData::new();
        let (rows, existed) = data.open_section("Curves pyro");
        assert!(!existed);
        rows.push(vec!["0".into(), "300".into()]);
        rows.push(vec!["1".into(), "301".into()]);

        let rows = data.section("Curves pyro").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "301");
        assert!(data.section("Curves Pyro").is_none());
    }

    #[test]
    fn test_reopen_appends() {
        let mut data = RawData::new();
        data.open_section("A").0.push(vec!["1".into()]);
        data.open_section("B");
        let (rows, existed) = data.open_section("A");
        assert!(existed);
        rows.push(vec!["2".into()]);

        assert_eq!(data.len(), 2);
        assert_eq!(data.section("A").unwrap().len(), 2);
    }
}
