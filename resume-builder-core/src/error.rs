//! Unified error type definition

use thiserror::Error;

/// Core layer error type
///
/// The outline keeps its error surface deliberately small: every mutating
/// operation treats a bad target as a no-op, so only lookups that must
/// produce a value can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Section not found
    #[error("Section not found: {0}")]
    SectionNotFound(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SectionNotFound(_) => true,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_not_found_is_expected() {
        let err = CoreError::SectionNotFound("section42".to_string());
        assert!(err.is_expected());
    }

    #[test]
    fn section_not_found_display_names_the_section() {
        let err = CoreError::SectionNotFound("section42".to_string());
        assert_eq!(err.to_string(), "Section not found: section42");
    }
}
