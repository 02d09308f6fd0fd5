//! DXF (Drawing Exchange Format) reading

mod group_code_value;
mod reader;

pub use group_code_value::{standard_table, CodeTypeTable, GroupCodeValueType};
pub use reader::{
    DxfLineReader, DxfReader, DxfReaderConfiguration, SectionDecoder, SectionSegmenter,
};
