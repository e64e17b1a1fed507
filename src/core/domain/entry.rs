//! Store entries.
//!
//! An `EntryRef` names an entry without its value; a `ResolvedEntry` carries
//! the value plus whatever metadata the store returned with it.

/// Reference to a store entry, as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryRef {
    name: String,
}

impl EntryRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Entry name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl std::fmt::Display for EntryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An entry resolved to its value.
///
/// Metadata keeps the order the store backend inserted it in and is looked up
/// by the same field names the column specs use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    name: String,
    value: String,
    metadata: Vec<(&'static str, String)>,
}

impl ResolvedEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            metadata: Vec::new(),
        }
    }

    /// Attach a metadata field. Absent values are skipped.
    pub fn with(mut self, field: &'static str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.metadata.push((field, value.into()));
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Look up a field by column name.
    ///
    /// `Name` and `Value` map to the entry itself, anything else to metadata.
    pub fn field(&self, field: &str) -> Option<&str> {
        match field {
            "Name" => Some(&self.name),
            "Value" => Some(&self.value),
            _ => self
                .metadata
                .iter()
                .find(|(key, _)| *key == field)
                .map(|(_, value)| value.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ref_display() {
        let entry = EntryRef::new("/app/db/password");
        assert_eq!(entry.to_string(), "/app/db/password");
        assert_eq!(entry.into_name(), "/app/db/password");
    }

    #[test]
    fn test_resolved_entry_fields() {
        let entry = ResolvedEntry::new("test", "hello")
            .with("ARN", Some("testARN"))
            .with("Version", Some(3.to_string()))
            .with("Type", None::<String>);

        assert_eq!(entry.field("Name"), Some("test"));
        assert_eq!(entry.field("Value"), Some("hello"));
        assert_eq!(entry.field("ARN"), Some("testARN"));
        assert_eq!(entry.field("Version"), Some("3"));
        assert_eq!(entry.field("Type"), None);
    }
}
