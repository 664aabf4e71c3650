//! Section related type definitions

use serde::{Deserialize, Serialize};

/// One résumé section as it appears in the outline
///
/// The `id` is assigned by the catalog and never changes afterwards; `name`
/// and `enabled` are the user-editable parts. `description` is fixed helper
/// text shown next to the section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable section ID
    pub id: String,
    /// Display name (user renamable)
    pub name: String,
    /// Helper text describing what belongs in the section
    pub description: String,
    /// Whether the section is included in the final résumé
    pub enabled: bool,
}

impl Section {
    /// Construct a section from owned parts
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_json_shape_is_stable() {
        let section = Section::new("section1", "Profile Summary", "A summary of your profile", true);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["id"], "section1");
        assert_eq!(json["name"], "Profile Summary");
        assert_eq!(json["description"], "A summary of your profile");
        assert_eq!(json["enabled"], true);
    }

    #[test]
    fn section_json_roundtrip() {
        let section = Section::new("section9", "Education", "Your educational background", false);
        let json = serde_json::to_string(&section).unwrap();
        let parsed: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, section);
    }
}
