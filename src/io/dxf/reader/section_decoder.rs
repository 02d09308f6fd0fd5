//! Section decoding
//!
//! Reinterprets a section's raw lines as named variables. Only the HEADER
//! section carries `$`-variables; every other section name yields an empty
//! map.

use crate::error::{DxfError, Result};
use crate::io::dxf::{standard_table, CodeTypeTable};
use crate::types::{HeaderProperty, VariableMap};

/// The group code marking "a variable name follows" in the HEADER section.
const VARIABLE_MARKER: &str = "9";

/// Decodes raw section lines into a variable map.
pub struct SectionDecoder<'a> {
    table: &'a CodeTypeTable,
}

impl SectionDecoder<'static> {
    /// Create a decoder backed by the shared standard classification table.
    pub fn new() -> Self {
        Self {
            table: standard_table(),
        }
    }
}

impl Default for SectionDecoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SectionDecoder<'a> {
    /// Create a decoder with a custom classification table.
    pub fn with_table(table: &'a CodeTypeTable) -> Self {
        Self { table }
    }

    /// Decode a section's raw lines.
    ///
    /// Only `HEADER` has a decoding today; other sections return an empty
    /// map rather than an error.
    pub fn decode(&self, section_name: &str, lines: &[String]) -> Result<VariableMap> {
        match section_name {
            "HEADER" => self.decode_header(section_name, lines),
            _ => Ok(VariableMap::default()),
        }
    }

    /// Split the raw lines into per-variable chunks at each `9` marker, then
    /// decode each chunk's remaining lines as `(group code, value)` pairs.
    fn decode_header(&self, section_name: &str, lines: &[String]) -> Result<VariableMap> {
        let markers: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.as_str() == VARIABLE_MARKER)
            .map(|(i, _)| i)
            .collect();

        let mut variables = VariableMap::default();

        for (k, &marker) in markers.iter().enumerate() {
            let name = lines.get(marker + 1).ok_or_else(|| DxfError::TruncatedMarker {
                section: section_name.to_string(),
                index: marker,
            })?;

            let chunk_start = marker + 2;
            let chunk_end = markers.get(k + 1).copied().unwrap_or(lines.len());
            // Adjacent markers leave no room for a value chunk.
            let chunk = &lines[chunk_start.min(chunk_end)..chunk_end];

            let mut properties = Vec::with_capacity(chunk.len() / 2);
            for (pair_index, pair) in chunk.chunks(2).enumerate() {
                // An odd trailing line has no value and is dropped.
                if let [code_line, value] = pair {
                    let code = code_line.parse::<i32>().map_err(|_| {
                        DxfError::MalformedGroupCode {
                            section: section_name.to_string(),
                            index: chunk_start + pair_index * 2,
                            value: code_line.clone(),
                        }
                    })?;
                    properties.push(HeaderProperty::new(self.table.classify(code), value.clone()));
                }
            }

            variables.insert(name.clone(), properties);
        }

        Ok(variables)
    }
}
