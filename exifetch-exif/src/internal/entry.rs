use exifetch_common::exif::Tag;
use exifetch_common::math::*;

use super::FieldType;
use crate::error::Result;

/// Size of one directory entry
pub const ENTRY_SIZE: u32 = 12;

/// Directory entry as stored in the IFD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef {
    /// Position of the entry relative to the start of the TIFF block
    pub position: u32,
    pub tag: Tag,
    pub data_type: FieldType,
    pub count: u32,
    pub value_offset: ValueOffset,
}

impl EntryRef {
    /// Position of the four byte value or offset field
    pub fn value_offset_position(&self) -> Result<u32> {
        Ok(self.position.safe_add(8)?)
    }

    /// Number of bytes the value occupies
    ///
    /// `None` for unsupported field types.
    pub fn data_len(&self) -> Result<Option<u32>> {
        match self.data_type.size() {
            Some(size) => Ok(Some(size.safe_mul(self.count)?)),
            None => Ok(None),
        }
    }

    /// Position of the value relative to the start of the TIFF block
    pub fn value_position(&self) -> Result<u32> {
        match self.value_offset {
            ValueOffset::Value(_) => self.value_offset_position(),
            ValueOffset::Offset(offset) => Ok(offset),
        }
    }
}

/// This can either be a value or an offset where to find the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOffset {
    /// The value is stored inline
    ///
    /// The four bytes are kept in the order they appear in the file.
    Value([u8; 4]),
    /// Offset relative to the start of the TIFF block
    Offset(u32),
}

impl ValueOffset {
    /// Values up to four bytes are stored inline
    pub fn new(data_len: u32, raw: [u8; 4], offset: u32) -> Self {
        if data_len <= 4 {
            Self::Value(raw)
        } else {
            Self::Offset(offset)
        }
    }
}
