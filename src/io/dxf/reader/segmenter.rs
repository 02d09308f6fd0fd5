//! Section segmentation
//!
//! Locates every top-level `SECTION ... ENDSEC` block in a line sequence and
//! extracts its raw content range.

use crate::error::{DxfError, Result};
use crate::types::{RawSection, SectionMap};
use std::collections::VecDeque;

/// Scans a line sequence and extracts raw sections keyed by declared name.
pub struct SectionSegmenter<'a> {
    lines: &'a [String],
}

impl<'a> SectionSegmenter<'a> {
    /// Create a segmenter over a line sequence.
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }

    /// Locate every section in a single forward scan.
    ///
    /// A section opens where the 3-line window reads `0` / `SECTION` / `2`;
    /// its declared name sits two lines past `SECTION` and its content starts
    /// three lines past. A section closes at an `ENDSEC` followed by `0` (or
    /// by the end of input), recording the index just before `ENDSEC` as the
    /// exclusive end of the content range.
    ///
    /// Opening markers are paired with closing markers positionally: each
    /// name, in declaration order, consumes the earliest remaining close
    /// index. This assumes sections are not nested and close in declaration
    /// order; input violating that assumption pairs positionally all the
    /// same. A repeated section name overwrites the earlier start index.
    pub fn segment(&self) -> Result<SectionMap<RawSection>> {
        let mut starts: SectionMap<usize> = SectionMap::default();
        let mut ends: VecDeque<usize> = VecDeque::new();

        for i in 0..self.lines.len() {
            let previous = if i == 0 {
                None
            } else {
                Some(self.lines[i - 1].as_str())
            };
            let current = self.lines[i].as_str();
            let next = self.lines.get(i + 1).map(|line| line.as_str());

            if previous == Some("0") && current == "SECTION" && next == Some("2") {
                let name = self.lines.get(i + 2).ok_or_else(|| {
                    DxfError::Parse(format!("SECTION at line {} has no name line", i))
                })?;
                starts.insert(name.clone(), i + 3);
            }

            // End of input terminates the final record like a trailing `0`.
            // An ENDSEC on the very first line has no content before it and
            // records nothing.
            if current == "ENDSEC" && (next == Some("0") || next.is_none()) && i > 0 {
                ends.push_back(i - 1);
            }
        }

        let opens = starts.len();
        let closes = ends.len();

        let mut sections = SectionMap::default();
        for (name, start) in starts {
            let end = ends.pop_front().ok_or_else(|| DxfError::UnbalancedSections {
                section: name.clone(),
                opens,
                closes,
            })?;
            if end < start {
                return Err(DxfError::Parse(format!(
                    "section '{}' closes at line {} before its content starts at line {}",
                    name, end, start
                )));
            }
            let lines = self.lines[start..end].to_vec();
            sections.insert(
                name.clone(),
                RawSection {
                    name,
                    start,
                    end,
                    lines,
                },
            );
        }

        Ok(sections)
    }
}
