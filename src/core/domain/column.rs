//! Column specs and store naming.

/// A table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header text
    pub header: &'static str,
    /// Field looked up on a `ResolvedEntry`
    pub field: &'static str,
    /// Only shown with `--extended`
    pub extended: bool,
}

impl Column {
    pub const fn new(header: &'static str, field: &'static str) -> Self {
        Self {
            header,
            field,
            extended: false,
        }
    }

    pub const fn extended(header: &'static str, field: &'static str) -> Self {
        Self {
            header,
            field,
            extended: true,
        }
    }
}

/// How a store names its entries in user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Noun {
    /// Capitalized plural, e.g. `Parameters`
    pub title: &'static str,
    /// Lowercase plural, e.g. `parameters`
    pub plural: &'static str,
}

impl Noun {
    pub const PARAMETERS: Noun = Noun {
        title: "Parameters",
        plural: "parameters",
    };

    pub const SECRETS: Noun = Noun {
        title: "Secrets",
        plural: "secrets",
    };

    /// Warning shown when a search or fetch comes back empty.
    pub fn not_found(&self) -> String {
        format!("No {} found", self.title)
    }

    /// Notice shown when the operator confirms an empty selection.
    pub fn none_selected(&self) -> String {
        format!("No {} selected", self.plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_messages() {
        assert_eq!(Noun::PARAMETERS.not_found(), "No Parameters found");
        assert_eq!(Noun::SECRETS.not_found(), "No Secrets found");
        assert_eq!(Noun::SECRETS.none_selected(), "No secrets selected");
    }

    #[test]
    fn test_column_constructors() {
        assert!(!Column::new("Name", "Name").extended);
        assert!(Column::extended("ARN", "ARN").extended);
    }
}
