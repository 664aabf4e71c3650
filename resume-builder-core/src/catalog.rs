//! Master section catalog
//!
//! The catalog is the source an outline is initialized from. The master
//! catalog is a fixed compiled-in table; custom catalogs can be injected
//! for front ends or tests that want a different starting set.

use crate::types::Section;

/// One entry of the compiled-in master table
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
}

/// The nine standard résumé sections, in their default order
const MASTER_SECTIONS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "section1",
        name: "Profile Summary",
        description: "A summary of your profile",
    },
    CatalogEntry {
        id: "section2",
        name: "Academic and Cocurricular Achievements",
        description: "Any awards or honors received",
    },
    CatalogEntry {
        id: "section3",
        name: "Summer Internship Experience",
        description: "Any internship experiences",
    },
    CatalogEntry {
        id: "section4",
        name: "Work Experience",
        description: "Your work experience",
    },
    CatalogEntry {
        id: "section5",
        name: "Projects",
        description: "Your personal or professional projects",
    },
    CatalogEntry {
        id: "section6",
        name: "Certifications",
        description: "Your certifications and qualifications",
    },
    CatalogEntry {
        id: "section7",
        name: "Leadership Positions",
        description: "Any leadership qualifications",
    },
    CatalogEntry {
        id: "section8",
        name: "Extracurricular",
        description: "Any participation in activities other than academical curriculum",
    },
    CatalogEntry {
        id: "section9",
        name: "Education",
        description: "Your educational background",
    },
];

/// An ordered list of prototype sections
///
/// Section IDs must be unique within a catalog; the outline derives its
/// own uniqueness guarantee from this one.
#[derive(Debug, Clone)]
pub struct SectionCatalog {
    sections: Vec<Section>,
}

impl SectionCatalog {
    /// Build a catalog from prototype sections
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        debug_assert!(
            {
                let ids: std::collections::HashSet<&str> =
                    sections.iter().map(|s| s.id.as_str()).collect();
                ids.len() == sections.len()
            },
            "catalog section IDs must be unique"
        );
        Self { sections }
    }

    /// The compiled-in master catalog, every section enabled
    #[must_use]
    pub fn master() -> Self {
        let sections = MASTER_SECTIONS
            .iter()
            .map(|entry| Section::new(entry.id, entry.name, entry.description, true))
            .collect();
        Self::new(sections)
    }

    /// Prototype sections in catalog order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::master()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_catalog_has_nine_sections() {
        assert_eq!(SectionCatalog::master().len(), 9);
    }

    #[test]
    fn master_catalog_ids_are_unique() {
        let catalog = SectionCatalog::master();
        let mut ids: Vec<&str> = catalog.sections().iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn master_sections_start_enabled() {
        assert!(SectionCatalog::master().sections().iter().all(|s| s.enabled));
    }

    #[test]
    fn master_catalog_order_starts_with_profile() {
        let catalog = SectionCatalog::master();
        assert_eq!(catalog.sections()[0].id, "section1");
        assert_eq!(catalog.sections()[0].name, "Profile Summary");
        assert_eq!(catalog.sections()[8].id, "section9");
        assert_eq!(catalog.sections()[8].name, "Education");
    }

    #[test]
    fn custom_catalog_keeps_given_order() {
        let catalog = SectionCatalog::new(vec![
            Section::new("b", "B", "second letter", true),
            Section::new("a", "A", "first letter", false),
        ]);
        assert_eq!(catalog.sections()[0].id, "b");
        assert_eq!(catalog.sections()[1].id, "a");
        assert!(!catalog.sections()[1].enabled);
    }
}
