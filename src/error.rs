//! Error types for the dxfrust library

use std::io;
use thiserror::Error;

/// Main error type for dxfrust operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line expected to carry a DXF group code could not be parsed as a
    /// base-10 integer
    #[error("Malformed group code '{value}' in {section} section at line {index}")]
    MalformedGroupCode {
        section: String,
        index: usize,
        value: String,
    },

    /// More SECTION markers than ENDSEC markers in the file
    #[error("Unbalanced sections: {opens} opened, {closes} closed; '{section}' has no matching ENDSEC")]
    UnbalancedSections {
        section: String,
        opens: usize,
        closes: usize,
    },

    /// A variable marker appeared as the last line of a section, leaving no
    /// room for the variable name
    #[error("Truncated variable marker in {section} section at line {index}")]
    TruncatedMarker { section: String, index: usize },

    /// Error parsing DXF structure
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dxfrust operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_group_code_display() {
        let err = DxfError::MalformedGroupCode {
            section: "HEADER".to_string(),
            index: 2,
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed group code 'abc' in HEADER section at line 2"
        );
    }

    #[test]
    fn test_unbalanced_sections_display() {
        let err = DxfError::UnbalancedSections {
            section: "ENTITIES".to_string(),
            opens: 3,
            closes: 2,
        };
        assert!(err.to_string().contains("3 opened, 2 closed"));
        assert!(err.to_string().contains("ENTITIES"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}
