//! Resume Builder Core Library
//!
//! Provides the section outline logic for résumé building applications:
//! - Section value types (`types`)
//! - The compiled-in master catalog (`catalog`)
//! - The outline manager: ordering, renaming, visibility, dirty tracking (`outline`)
//!
//! This library is synchronous and platform-independent. It performs no I/O;
//! front ends own the event source and any persistence, and drive the outline
//! through plain method calls.

pub mod catalog;
pub mod error;
pub mod outline;
pub mod types;

// Re-export common types
pub use catalog::SectionCatalog;
pub use error::{CoreError, CoreResult};
pub use outline::SectionOutline;
pub use types::Section;
