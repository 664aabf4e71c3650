//! Section outline manager
//!
//! `SectionOutline` owns the working copy of the section list and every
//! operation a front end performs on it: reordering, renaming, toggling
//! visibility, describing, plus the dirty flag and the save/cancel pair.
//!
//! All operations are synchronous and total. Mutators aimed at a missing
//! section or an impossible index degrade to no-ops, so a front end can
//! forward user gestures without pre-validating them. The only fallible
//! call is [`SectionOutline::describe`], which has to produce a value.

use crate::catalog::SectionCatalog;
use crate::error::{CoreError, CoreResult};
use crate::types::Section;

/// Working state of the résumé section list
///
/// Invariants held between calls:
/// - section IDs stay unique and the ID set never changes after construction
/// - `dirty` is false exactly when the working copy is untouched since the
///   last construction, `save` or `cancel`
/// - the editing marker, when set, names a section present in the list
#[derive(Debug, Clone)]
pub struct SectionOutline {
    /// Catalog the outline was initialized from, kept for `cancel`
    catalog: SectionCatalog,
    /// Working copy of the sections, in display order
    sections: Vec<Section>,
    /// Whether the working copy differs from the last saved state
    dirty: bool,
    /// ID of the section currently under rename, if any
    editing: Option<String>,
}

impl SectionOutline {
    /// Create an outline initialized from a catalog
    #[must_use]
    pub fn new(catalog: SectionCatalog) -> Self {
        let sections = catalog.sections().to_vec();
        Self {
            catalog,
            sections,
            dirty: false,
            editing: None,
        }
    }

    /// Create an outline over the compiled-in master catalog
    #[must_use]
    pub fn with_master() -> Self {
        Self::new(SectionCatalog::master())
    }

    // ========== read accessors ==========

    /// Sections in current display order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections in the outline
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the outline holds no sections
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether the working copy has unsaved changes
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// ID of the section currently under rename
    #[must_use]
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Look up a section by ID
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Whether a section with this ID is in the outline
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Current position of a section in display order
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    // ========== operations ==========

    /// Apply a completed move gesture
    ///
    /// Removes the section at `source` and reinserts it at `dest`, where
    /// `dest` is counted against the list with the moved section already
    /// taken out. A `dest` past the end appends; `None` means the gesture
    /// ended without a target and the order is kept as is.
    pub fn reorder(&mut self, source: usize, dest: Option<usize>) {
        let Some(dest) = dest else {
            log::debug!("move gesture released without a target, keeping order");
            return;
        };

        if source >= self.sections.len() {
            log::warn!(
                "move gesture source {source} outside outline of {} sections, ignoring",
                self.sections.len()
            );
            return;
        }

        let section = self.sections.remove(source);
        let dest = dest.min(self.sections.len());
        self.sections.insert(dest, section);
        self.dirty = true;
    }

    /// Mark a section as being renamed
    ///
    /// The marker only ever points at a section present in the outline;
    /// an unknown ID leaves it unchanged.
    pub fn begin_edit(&mut self, id: &str) {
        if self.contains(id) {
            self.editing = Some(id.to_string());
        }
    }

    /// Replace a section's display name
    ///
    /// No-op when the ID is not in the outline. Renaming never touches the
    /// description, which stays with the section through moves and renames.
    pub fn rename(&mut self, id: &str, name: impl Into<String>) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.name = name.into();
            self.dirty = true;
        }
    }

    /// Clear the rename marker
    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    /// Flip whether a section is included in the final résumé
    ///
    /// No-op when the ID is not in the outline.
    pub fn toggle_enabled(&mut self, id: &str) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.enabled = !section.enabled;
            self.dirty = true;
        }
    }

    /// Helper text for a section
    pub fn describe(&self, id: &str) -> CoreResult<&str> {
        self.get(id)
            .map(|s| s.description.as_str())
            .ok_or_else(|| CoreError::SectionNotFound(id.to_string()))
    }

    /// Accept the working copy as the saved state
    ///
    /// Only clears the dirty flag; the sections themselves are already in
    /// their final shape. Committing them anywhere is the caller's concern.
    pub fn save(&mut self) {
        self.dirty = false;
        log::debug!("outline saved, {} sections", self.sections.len());
    }

    /// Discard the working copy and return to the catalog state
    ///
    /// Equivalent to constructing the outline anew: catalog order, catalog
    /// names and flags, clean, no rename in progress.
    pub fn cancel(&mut self) {
        self.sections = self.catalog.sections().to_vec();
        self.dirty = false;
        self.editing = None;
        log::debug!("outline reset to catalog state");
    }
}

impl Default for SectionOutline {
    fn default() -> Self {
        Self::with_master()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(outline: &SectionOutline) -> Vec<&str> {
        outline.sections().iter().map(|s| s.id.as_str()).collect()
    }

    fn small_outline() -> SectionOutline {
        SectionOutline::new(SectionCatalog::new(vec![
            Section::new("intro", "Intro", "who you are", true),
            Section::new("work", "Work", "where you worked", true),
            Section::new("links", "Links", "where to find you", false),
        ]))
    }

    #[test]
    fn new_outline_copies_master_catalog() {
        let outline = SectionOutline::with_master();
        assert_eq!(outline.len(), 9);
        assert!(!outline.is_dirty());
        assert!(outline.editing().is_none());
        assert_eq!(outline.sections()[0].id, "section1");
        assert!(outline.sections().iter().all(|s| s.enabled));
    }

    #[test]
    fn reorder_moves_section_down() {
        let mut outline = SectionOutline::with_master();
        outline.reorder(0, Some(3));
        assert_eq!(
            ids(&outline)[..5],
            ["section2", "section3", "section4", "section1", "section5"]
        );
        assert_eq!(outline.position("section1"), Some(3));
        assert!(outline.is_dirty());
    }

    #[test]
    fn reorder_moves_section_up() {
        let mut outline = SectionOutline::with_master();
        outline.reorder(3, Some(0));
        assert_eq!(
            ids(&outline)[..4],
            ["section4", "section1", "section2", "section3"]
        );
        assert!(outline.is_dirty());
    }

    #[test]
    fn reorder_to_same_position_still_marks_dirty() {
        let mut outline = SectionOutline::with_master();
        let before = outline.sections().to_vec();
        outline.reorder(2, Some(2));
        assert_eq!(outline.sections(), &before[..]);
        assert!(outline.is_dirty());
    }

    #[test]
    fn reorder_without_target_keeps_order_and_stays_clean() {
        let mut outline = SectionOutline::with_master();
        let before = outline.sections().to_vec();
        outline.reorder(0, None);
        assert_eq!(outline.sections(), &before[..]);
        assert!(!outline.is_dirty());
    }

    #[test]
    fn reorder_clamps_target_past_end() {
        let mut outline = SectionOutline::with_master();
        outline.reorder(0, Some(99));
        assert_eq!(outline.position("section1"), Some(8));
        assert!(outline.is_dirty());
    }

    #[test]
    fn reorder_ignores_out_of_range_source() {
        let mut outline = SectionOutline::with_master();
        let before = outline.sections().to_vec();
        outline.reorder(99, Some(0));
        assert_eq!(outline.sections(), &before[..]);
        assert!(!outline.is_dirty());
    }

    #[test]
    fn reorder_preserves_the_section_set() {
        let mut outline = SectionOutline::with_master();
        let mut before = ids(&outline)
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        before.sort();

        outline.reorder(0, Some(7));
        outline.reorder(4, Some(1));
        outline.reorder(8, Some(0));

        let mut after = ids(&outline)
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        after.sort();
        assert_eq!(after, before);
        assert_eq!(outline.len(), 9);
    }

    #[test]
    fn rename_replaces_name_and_marks_dirty() {
        let mut outline = SectionOutline::with_master();
        outline.rename("section4", "Employment History");
        assert_eq!(
            outline.get("section4").map(|s| s.name.as_str()),
            Some("Employment History")
        );
        assert!(outline.is_dirty());
    }

    #[test]
    fn rename_unknown_id_is_a_clean_noop() {
        let mut outline = SectionOutline::with_master();
        outline.rename("section42", "Ghost");
        assert!(!outline.is_dirty());
        assert!(!outline.contains("section42"));
    }

    #[test]
    fn rename_leaves_description_unchanged() {
        let mut outline = SectionOutline::with_master();
        outline.rename("section5", "Things I Built");
        assert_eq!(
            outline.describe("section5"),
            Ok("Your personal or professional projects")
        );
    }

    #[test]
    fn toggle_flips_flag_and_marks_dirty() {
        let mut outline = SectionOutline::with_master();
        outline.toggle_enabled("section2");
        assert_eq!(outline.get("section2").map(|s| s.enabled), Some(false));
        assert!(outline.is_dirty());
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut outline = SectionOutline::with_master();
        outline.toggle_enabled("section2");
        outline.toggle_enabled("section2");
        assert_eq!(outline.get("section2").map(|s| s.enabled), Some(true));
        // both toggles were real gestures, so the outline stays dirty
        assert!(outline.is_dirty());
    }

    #[test]
    fn toggle_unknown_id_is_a_clean_noop() {
        let mut outline = SectionOutline::with_master();
        outline.toggle_enabled("section42");
        assert!(!outline.is_dirty());
    }

    #[test]
    fn describe_returns_helper_text() {
        let outline = SectionOutline::with_master();
        assert_eq!(
            outline.describe("section9"),
            Ok("Your educational background")
        );
    }

    #[test]
    fn describe_unknown_id_reports_not_found() {
        let outline = SectionOutline::with_master();
        assert_eq!(
            outline.describe("nonexistent"),
            Err(CoreError::SectionNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn save_clears_dirty_without_touching_sections() {
        let mut outline = SectionOutline::with_master();
        outline.reorder(0, Some(4));
        outline.rename("section3", "Internships");
        let snapshot = outline.sections().to_vec();

        outline.save();
        assert!(!outline.is_dirty());
        assert_eq!(outline.sections(), &snapshot[..]);
    }

    #[test]
    fn save_on_clean_outline_is_a_noop() {
        let mut outline = SectionOutline::with_master();
        let snapshot = outline.sections().to_vec();
        outline.save();
        assert!(!outline.is_dirty());
        assert_eq!(outline.sections(), &snapshot[..]);
    }

    #[test]
    fn cancel_restores_catalog_state() {
        let mut outline = SectionOutline::with_master();
        outline.reorder(0, Some(3));
        outline.rename("section1", "About Me");
        outline.toggle_enabled("section7");

        outline.cancel();
        let fresh = SectionOutline::with_master();
        assert_eq!(outline.sections(), fresh.sections());
        assert!(!outline.is_dirty());
    }

    #[test]
    fn cancel_after_saved_changes_still_restores_catalog() {
        let mut outline = SectionOutline::with_master();
        outline.toggle_enabled("section8");
        outline.save();

        outline.cancel();
        assert_eq!(outline.get("section8").map(|s| s.enabled), Some(true));
        assert!(!outline.is_dirty());
    }

    #[test]
    fn cancel_clears_rename_marker() {
        let mut outline = SectionOutline::with_master();
        outline.begin_edit("section6");
        outline.cancel();
        assert!(outline.editing().is_none());
    }

    #[test]
    fn begin_edit_sets_marker_for_known_id() {
        let mut outline = SectionOutline::with_master();
        outline.begin_edit("section6");
        assert_eq!(outline.editing(), Some("section6"));
        // marking a section for rename is not an edit by itself
        assert!(!outline.is_dirty());
    }

    #[test]
    fn begin_edit_unknown_id_leaves_marker_unchanged() {
        let mut outline = SectionOutline::with_master();
        outline.begin_edit("section42");
        assert!(outline.editing().is_none());

        outline.begin_edit("section6");
        outline.begin_edit("section42");
        assert_eq!(outline.editing(), Some("section6"));
    }

    #[test]
    fn end_edit_clears_marker() {
        let mut outline = SectionOutline::with_master();
        outline.begin_edit("section6");
        outline.end_edit();
        assert!(outline.editing().is_none());
    }

    #[test]
    fn rename_marker_survives_save() {
        let mut outline = SectionOutline::with_master();
        outline.begin_edit("section1");
        outline.rename("section1", "Summary");
        outline.save();
        assert_eq!(outline.editing(), Some("section1"));
        assert!(!outline.is_dirty());
    }

    #[test]
    fn custom_catalog_outline_round_trip() {
        let mut outline = small_outline();
        assert_eq!(outline.len(), 3);
        assert!(!outline.sections()[2].enabled);

        outline.reorder(2, Some(0));
        outline.toggle_enabled("links");
        assert_eq!(ids(&outline), ["links", "intro", "work"]);
        assert!(outline.get("links").is_some_and(|s| s.enabled));

        outline.cancel();
        assert_eq!(ids(&outline), ["intro", "work", "links"]);
        assert!(!outline.get("links").is_some_and(|s| s.enabled));
    }
}
