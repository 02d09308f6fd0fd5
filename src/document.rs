//! Parsed drawing structure

use crate::notification::NotificationCollection;
use crate::types::{HeaderProperty, RawSection, SectionMap, VariableMap};

/// A parsed DXF drawing: raw sections plus decoded header variables.
///
/// Produced by [`crate::DxfReader::read`]. Both maps preserve the order in
/// which sections were paired; nothing is mutated after the read completes.
#[derive(Debug, Clone, Default)]
pub struct DxfDrawing {
    /// Raw line ranges for every section found in the file, keyed by the
    /// declared section name.
    pub sections: SectionMap<RawSection>,
    /// Decoded variables per section. Sections without a decoder carry an
    /// empty map.
    pub variables: SectionMap<VariableMap>,
    /// Non-fatal issues collected during a failsafe read.
    pub notifications: NotificationCollection,
}

impl DxfDrawing {
    /// Create an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw section lookup by name.
    pub fn section(&self, name: &str) -> Option<&RawSection> {
        self.sections.get(name)
    }

    /// The raw HEADER section, if present.
    pub fn header(&self) -> Option<&RawSection> {
        self.section("HEADER")
    }

    /// The decoded HEADER variables, if the section was present.
    pub fn header_variables(&self) -> Option<&VariableMap> {
        self.variables.get("HEADER")
    }

    /// Look up a single header variable by name (e.g. `$ACADVER`).
    pub fn header_variable(&self, name: &str) -> Option<&[HeaderProperty]> {
        self.header_variables()
            .and_then(|vars| vars.get(name))
            .map(Vec::as_slice)
    }
}
