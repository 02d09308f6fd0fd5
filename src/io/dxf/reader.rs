//! DXF file reader

mod line_reader;
mod section_decoder;
mod segmenter;

pub use line_reader::DxfLineReader;
pub use section_decoder::SectionDecoder;
pub use segmenter::SectionSegmenter;

use crate::document::DxfDrawing;
use crate::error::Result;
use crate::notification::NotificationType;
use crate::types::VariableMap;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Configuration for the DXF reader.
#[derive(Debug, Clone)]
pub struct DxfReaderConfiguration {
    /// When `true`, decode errors within individual sections are caught and
    /// reported as notifications instead of aborting the read.
    ///
    /// Default: `false` (strict mode — errors propagate).
    pub failsafe: bool,
}

impl Default for DxfReaderConfiguration {
    fn default() -> Self {
        Self { failsafe: false }
    }
}

/// DXF file reader
pub struct DxfReader {
    lines: Vec<String>,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a new DXF reader from any byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let lines = DxfLineReader::new(BufReader::new(reader)).read_lines()?;
        Ok(Self::from_lines(lines))
    }

    /// Create a new DXF reader from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Create a new DXF reader from an already materialized line sequence.
    ///
    /// The lines are expected to be trimmed of leading/trailing whitespace,
    /// as [`DxfLineReader`] produces them.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            config: DxfReaderConfiguration::default(),
        }
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Parse the line sequence into a [`DxfDrawing`].
    pub fn read(self) -> Result<DxfDrawing> {
        let mut drawing = DxfDrawing::new();

        let sections = SectionSegmenter::new(&self.lines).segment()?;

        // Sections are disjoint, so each one decodes independently.
        let decoder = SectionDecoder::new();
        let entries: Vec<(&String, &crate::types::RawSection)> = sections.iter().collect();
        let decoded: Vec<(String, Result<VariableMap>)> = entries
            .into_par_iter()
            .map(|(name, section)| (name.clone(), decoder.decode(name, &section.lines)))
            .collect();

        for (name, result) in decoded {
            match result {
                Ok(variables) => {
                    drawing.variables.insert(name, variables);
                }
                Err(e) => {
                    if self.config.failsafe {
                        drawing.notifications.notify(
                            NotificationType::Error,
                            Some(name.clone()),
                            format!("failed to decode section: {}", e),
                        );
                        drawing.variables.insert(name, VariableMap::default());
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        drawing.sections = sections;
        Ok(drawing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DxfError;
    use crate::io::dxf::GroupCodeValueType;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_read_single_header_variable() {
        let input = lines(&[
            "0", "SECTION", "2", "HEADER", "9", "$ACADVER", "1", "AC1015", "0", "ENDSEC",
        ]);
        let drawing = DxfReader::from_lines(input).read().unwrap();

        let section = drawing.section("HEADER").unwrap();
        assert_eq!(section.lines, lines(&["9", "$ACADVER", "1", "AC1015"]));

        let props = drawing.header_variable("$ACADVER").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].value_type, GroupCodeValueType::String);
        assert_eq!(props[0].value, "AC1015");
    }

    #[test]
    fn test_read_from_byte_stream() {
        let data = "  0\r\nSECTION\r\n  2\r\nHEADER\r\n  9\r\n$ACADVER\r\n  1\r\nAC1032\r\n  0\r\nENDSEC\r\n  0\r\nEOF\r\n";
        let drawing = DxfReader::from_reader(data.as_bytes()).unwrap().read().unwrap();
        assert_eq!(drawing.header_variable("$ACADVER").unwrap()[0].value, "AC1032");
    }

    #[test]
    fn test_strict_mode_propagates_decode_error() {
        let input = lines(&[
            "0", "SECTION", "2", "HEADER", "9", "$A", "abc", "X", "0", "ENDSEC",
        ]);
        let err = DxfReader::from_lines(input).read().unwrap_err();
        assert!(matches!(err, DxfError::MalformedGroupCode { .. }));
    }

    #[test]
    fn test_failsafe_mode_isolates_bad_section() {
        let input = lines(&[
            "0", "SECTION", "2", "HEADER", "9", "$A", "abc", "X", "0", "ENDSEC", "0", "SECTION",
            "2", "ENTITIES", "0", "LINE", "0", "ENDSEC", "0", "EOF",
        ]);
        let drawing = DxfReader::from_lines(input)
            .with_configuration(DxfReaderConfiguration { failsafe: true })
            .read()
            .unwrap();

        // HEADER failed but is present with an empty variable map; ENTITIES
        // still decoded (to its intentionally empty map).
        assert!(drawing.variables["HEADER"].is_empty());
        assert!(drawing.variables.contains_key("ENTITIES"));
        assert_eq!(drawing.notifications.len(), 1);
        let notification = drawing.notifications.iter().next().unwrap();
        assert_eq!(notification.section.as_deref(), Some("HEADER"));
    }
}
