//! Core type definitions

mod section;

pub use section::Section;
