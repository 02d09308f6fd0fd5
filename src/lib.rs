//! # dxfrust
//!
//! A pure Rust library for parsing DXF (Drawing Exchange Format) files into
//! named sections and decoding header variables.
//!
//! The reader splits a drawing into its top-level `SECTION ... ENDSEC` blocks
//! (HEADER, CLASSES, TABLES, BLOCKS, ENTITIES, ACDSDATA, OBJECTS) and decodes
//! the HEADER section's `$`-variables into typed property lists.
//!
//! ## Features
//!
//! - Section segmentation over ASCII DXF files of any vintage
//! - HEADER variable decoding with group-code classification
//! - Non-UTF8 drawings via configurable encoding fallback
//! - Failsafe mode: a bad section is reported, the rest still decode
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxfrust::DxfReader;
//!
//! let drawing = DxfReader::from_file("sample.dxf")?.read()?;
//!
//! for (name, section) in &drawing.sections {
//!     println!("{}: {} lines", name, section.len());
//! }
//!
//! if let Some(props) = drawing.header_variable("$ACADVER") {
//!     println!("version: {}", props[0].value);
//! }
//! # Ok::<(), dxfrust::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `DxfReader` - entry point; reads lines, segments, decodes
//! - `SectionSegmenter` - locates `SECTION ... ENDSEC` line ranges
//! - `SectionDecoder` - decodes a section's raw lines into variables
//! - `DxfDrawing` - the parsed result: raw sections plus variable maps

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod error;
pub mod io;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{HeaderProperty, RawSection, SectionMap, VariableMap, SECTION_NAMES};

// Re-export I/O types
pub use io::dxf::{
    standard_table, CodeTypeTable, DxfReader, DxfReaderConfiguration, GroupCodeValueType,
    SectionDecoder, SectionSegmenter,
};

// Re-export document
pub use document::DxfDrawing;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_drawing_creation() {
        let drawing = DxfDrawing::new();
        assert!(drawing.sections.is_empty());
        assert!(drawing.variables.is_empty());
    }
}
