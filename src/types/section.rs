//! Raw section records produced by the section segmenter

use ahash::RandomState;
use indexmap::IndexMap;

/// The top-level section names a drawing is expected to carry.
///
/// Matching is exact and case-sensitive. The segmenter itself does not
/// validate names against this set; it records whatever name a section
/// declares.
pub const SECTION_NAMES: [&str; 7] = [
    "HEADER", "CLASSES", "TABLES", "BLOCKS", "ENTITIES", "ACDSDATA", "OBJECTS",
];

/// Insertion-ordered map keyed by section name.
pub type SectionMap<V> = IndexMap<String, V, RandomState>;

/// Check whether a name is one of the recognized section names.
pub fn is_recognized_section(name: &str) -> bool {
    SECTION_NAMES.contains(&name)
}

/// A single `SECTION ... ENDSEC` block located in the source line sequence.
///
/// `start` and `end` are the half-open line-index range `[start, end)` of the
/// section's content within the source sequence; `lines` holds that content.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    /// Declared section name (the line after the `2` group code).
    pub name: String,
    /// Index of the first content line in the source sequence.
    pub start: usize,
    /// Exclusive end index of the content range.
    pub end: usize,
    /// The content lines in `[start, end)`.
    pub lines: Vec<String>,
}

impl RawSection {
    /// Number of content lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the section has no content lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when the declared name is one of [`SECTION_NAMES`].
    pub fn is_recognized(&self) -> bool {
        is_recognized_section(&self.name)
    }
}
