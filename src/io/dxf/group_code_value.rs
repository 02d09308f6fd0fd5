//! Group code value classification
//!
//! Determines how to interpret the value associated with a DXF group code.
//! Only the string-valued code ranges of the DXF reference are mapped today;
//! the integer and floating-point classifications exist in the enum but no
//! range produces them yet.

use once_cell::sync::Lazy;
use std::ops::RangeInclusive;

/// Type of value associated with a group code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCodeValueType {
    /// No classification for this code
    Undefined,

    /// Integer value
    Int,

    /// String value
    String,

    /// Floating-point value
    Decimal,
}

/// Immutable classification table mapping group-code ranges to value types.
///
/// Built once and shared through [`standard_table`]; decoders hold it by
/// reference, so alternative tables can be swapped in for testing.
#[derive(Debug, Clone)]
pub struct CodeTypeTable {
    ranges: Vec<(RangeInclusive<i32>, GroupCodeValueType)>,
}

impl CodeTypeTable {
    /// Build the standard table from the DXF reference's string code ranges.
    pub fn standard() -> Self {
        use GroupCodeValueType::String;
        let ranges = vec![
            (0..=9, String),
            (100..=100, String),
            (102..=102, String),
            (105..=105, String),
            (300..=309, String),
            (310..=319, String),
            (320..=329, String),
            (330..=369, String),
            (410..=419, String),
            (430..=439, String),
            (470..=479, String),
            (480..=481, String),
            (1000..=1009, String),
        ];
        Self { ranges }
    }

    /// Classify a numeric group code.
    pub fn classify(&self, code: i32) -> GroupCodeValueType {
        for (range, value_type) in &self.ranges {
            if range.contains(&code) {
                return *value_type;
            }
        }
        GroupCodeValueType::Undefined
    }
}

static STANDARD_TABLE: Lazy<CodeTypeTable> = Lazy::new(CodeTypeTable::standard);

/// The shared standard classification table.
pub fn standard_table() -> &'static CodeTypeTable {
    &STANDARD_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_range_boundaries() {
        let table = standard_table();
        for code in [0, 9, 100, 102, 105, 300, 309, 330, 369, 480, 481, 1000, 1009] {
            assert_eq!(
                table.classify(code),
                GroupCodeValueType::String,
                "code {} should classify as String",
                code
            );
        }
    }

    #[test]
    fn test_undefined_codes() {
        let table = standard_table();
        for code in [10, 50, 70, 99, 101, 103, 104, 106, 210, 370, 409, 420, 482, 999, 1010] {
            assert_eq!(
                table.classify(code),
                GroupCodeValueType::Undefined,
                "code {} should classify as Undefined",
                code
            );
        }
    }

    #[test]
    fn test_negative_codes_undefined() {
        let table = standard_table();
        assert_eq!(table.classify(-1), GroupCodeValueType::Undefined);
        assert_eq!(table.classify(-5), GroupCodeValueType::Undefined);
    }

    #[test]
    fn test_int_and_decimal_never_produced() {
        let table = standard_table();
        for code in -10..=1100 {
            let value_type = table.classify(code);
            assert_ne!(value_type, GroupCodeValueType::Int);
            assert_ne!(value_type, GroupCodeValueType::Decimal);
        }
    }
}
