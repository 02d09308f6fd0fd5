//! DXF text line reader
//!
//! Reads a DXF byte stream into a sequence of whitespace-trimmed lines, the
//! input boundary the segmenter and decoder operate on.

use crate::error::Result;
use encoding_rs::Encoding;
use std::io::{BufRead, BufReader, Read};

/// Reads trimmed text lines from a DXF byte stream.
///
/// Each line is decoded as UTF-8 first; bytes that are not valid UTF-8 fall
/// back to the configured encoding, or to Latin-1 when none is set.
pub struct DxfLineReader<R: Read> {
    reader: BufReader<R>,
    /// Non-UTF8 fallback encoding.  `None` means Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read> DxfLineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            encoding: None,
        }
    }

    /// Set the fallback encoding for non-UTF8 drawings.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Read the next line, trimmed. Returns `None` at end of stream.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let bytes = e.into_bytes();
                if let Some(encoding) = self.encoding {
                    let (decoded, _, _) = encoding.decode(&bytes);
                    decoded.into_owned()
                } else {
                    // Latin-1 maps bytes 0-255 directly to code points.
                    bytes.iter().map(|&b| b as char).collect()
                }
            }
        };

        // Trim whitespace and line terminators (including \r)
        Ok(Some(line.trim().to_string()))
    }

    /// Read every remaining line into a `Vec`.
    pub fn read_lines(mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines)
    }
}
