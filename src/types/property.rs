//! Decoded header variable records

use crate::io::dxf::GroupCodeValueType;
use ahash::RandomState;
use indexmap::IndexMap;

/// A single decoded `(group code, value)` pair belonging to a header variable.
///
/// The group code itself is not retained, only its classification. The value
/// is kept as the raw string payload and never parsed numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderProperty {
    /// Classification of the group code that introduced this value.
    pub value_type: GroupCodeValueType,
    /// The value line, exactly as it appeared in the file.
    pub value: String,
}

impl HeaderProperty {
    /// Create a new property record.
    pub fn new(value_type: GroupCodeValueType, value: impl Into<String>) -> Self {
        Self {
            value_type,
            value: value.into(),
        }
    }
}

/// Map from variable name (e.g. `$ACADVER`) to its decoded property records.
///
/// Names appear in first-encounter order; a repeated name replaces the earlier
/// entry's records while keeping its original position.
pub type VariableMap = IndexMap<String, Vec<HeaderProperty>, RandomState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_creation() {
        let prop = HeaderProperty::new(GroupCodeValueType::String, "AC1015");
        assert_eq!(prop.value_type, GroupCodeValueType::String);
        assert_eq!(prop.value, "AC1015");
    }

    #[test]
    fn test_variable_map_replaces_on_repeat() {
        let mut vars = VariableMap::default();
        vars.insert(
            "$ACADVER".to_string(),
            vec![HeaderProperty::new(GroupCodeValueType::String, "AC1015")],
        );
        vars.insert(
            "$ACADVER".to_string(),
            vec![HeaderProperty::new(GroupCodeValueType::String, "AC1032")],
        );
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["$ACADVER"][0].value, "AC1032");
    }
}
