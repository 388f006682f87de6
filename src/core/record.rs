use std::collections::HashMap;

/// Raw genotype records keyed by their leading marker identifier.
///
/// Each value is the full (trimmed) source line; it is only ever searched
/// for substrings, never split into fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    lines: HashMap<String, String>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier line with the same identifier
    pub fn insert(&mut self, identifier: impl Into<String>, line: impl Into<String>) {
        self.lines.insert(identifier.into(), line.into());
    }

    /// Record line for an identifier
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.lines.get(identifier).map(String::as_str)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.lines.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut records = Self::new();
        for (identifier, line) in iter {
            records.insert(identifier, line);
        }
        records
    }
}
