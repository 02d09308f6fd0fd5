//! Core data types for segmented sections and decoded header variables

pub mod property;
pub mod section;

pub use property::{HeaderProperty, VariableMap};
pub use section::{is_recognized_section, RawSection, SectionMap, SECTION_NAMES};
