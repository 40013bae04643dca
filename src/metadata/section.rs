use serde::ser::{Serialize, SerializeMap, Serializer};

/// Reserved field name under which free-text lines are exported.
pub const EXTRA_FIELD: &str = "Extra";

/// One `[section]` of metadata: ordered `key=value` fields plus the lines
/// that carried no `=` at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    fields: Vec<(String, String)>,
    extra: Vec<String>,
}

impl Section {
    /// Create an empty section
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field, if present
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_str())
    }

    /// Set a field. An existing field keeps its position and takes the new value.
    ///
    /// [`EXTRA_FIELD`] is never a field: `Extra=value` is kept verbatim as a
    /// free-text line.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if field == EXTRA_FIELD {
            self.extra.push(format!("{}={}", field, value));
            return;
        }
        match self.fields.iter_mut().find(|(k, _)| *k == field) {
            Some((_, v)) => *v = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Append a free-text line
    pub fn push_extra(&mut self, line: impl Into<String>) {
        self.extra.push(line.into());
    }

    /// Fields in file order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Free-text lines in file order
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Number of `key=value` fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the section has neither fields nor free-text lines
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.extra.is_empty()
    }
}

// Free-text lines go out as an `Extra` array after the regular fields.
impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_extra = !self.extra.is_empty();
        let mut map = serializer.serialize_map(Some(self.fields.len() + usize::from(has_extra)))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        if has_extra {
            map.serialize_entry(EXTRA_FIELD, &self.extra)?;
        }
        map.end()
    }
}
