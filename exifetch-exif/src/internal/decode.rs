use exifetch_common::math::*;
use exifetch_common::prelude::*;

use super::{EntryRef, FieldType, ValueOffset, ENTRY_SIZE};
use crate::error::{Error, Result};
use crate::semantics;
use crate::value::{TagMap, Value};

/// Identifier and padding in front of the TIFF block
pub const EXIF_HEADER_LEN: u32 = 6;

/// The only supported position of the primary IFD
pub const PRIMARY_IFD_OFFSET: u32 = 8;

const TIFF_MAGIC: u16 = 0x2A;

/// Decoder for the TIFF block inside an APP1 segment
///
/// Offsets that are passed around are relative to the start of the TIFF
/// block, like the offsets stored in the directories.
#[derive(Debug, Clone)]
pub struct Decoder<S> {
    source: S,
    byte_order: ByteOrder,
    tiff_start: u32,
}

impl<S: ByteSource> Decoder<S> {
    /// Validates the Exif and TIFF headers
    ///
    /// Offset `0` of `source` is expected to hold the Exif identifier.
    pub fn new(source: S) -> Result<Self> {
        if source.array_at::<4>(0).ok() != Some(*b"Exif") {
            return Err(Error::InvalidExifHeader);
        }

        let tiff_start = EXIF_HEADER_LEN;

        let mark = source.array_at::<2>(tiff_start)?;
        let byte_order = ByteOrder::from_mark(mark)
            .ok_or(Error::InvalidByteOrderMark(u16::from_be_bytes(mark)))?;
        tracing::debug!("TIFF block uses {byte_order:?}");

        let decoder = Self {
            source,
            byte_order,
            tiff_start,
        };

        let magic = decoder.short(2)?;
        if magic != TIFF_MAGIC {
            return Err(Error::InvalidTiffMagic(magic));
        }

        let ifd_offset = decoder.long(4)?;
        if ifd_offset != PRIMARY_IFD_OFFSET {
            return Err(Error::UnsupportedIfdOffset(ifd_offset));
        }

        Ok(decoder)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Decodes the primary directory and the Exif and GPS directories
    ///
    /// Errors in the primary directory abort decoding. A broken sub-directory
    /// is skipped.
    pub fn decode(&self) -> Result<TagMap> {
        let mut tags = TagMap::new();

        self.read_directory(Ifd::Primary, PRIMARY_IFD_OFFSET, &mut tags)?;

        for ifd in Ifd::SUB_IFDS {
            let Some(pointer) = ifd.pointer() else {
                continue;
            };

            match tags.get(pointer).and_then(Value::as_i64) {
                Some(offset) if offset != 0 => match offset.u32() {
                    Ok(offset) => self.read_directory_error_silenced(ifd, offset, &mut tags),
                    Err(err) => tracing::info!("Invalid offset for IFD '{ifd:?}': {err}"),
                },
                _ => tracing::debug!("No IFD '{ifd:?}' listed"),
            }
        }

        Ok(tags)
    }

    /// Sometimes, sub-directories are not readable
    pub fn read_directory_error_silenced(&self, ifd: Ifd, offset: u32, tags: &mut TagMap) {
        if let Err(err) = self.read_directory(ifd, offset, tags) {
            tracing::info!("Failed to load IFD '{ifd:?}': {err}");
        }
    }

    /// Reads all entries of a directory into `tags`
    ///
    /// Tags that are not listed in the table of `ifd` are skipped, as are
    /// entries whose value can't be read.
    pub fn read_directory(&self, ifd: Ifd, offset: u32, tags: &mut TagMap) -> Result<()> {
        let n_entries = self.short(offset)?;
        tracing::debug!("Reading IFD '{ifd:?}' with {n_entries} entries at byte {offset}");

        let first_entry = offset.safe_add(2)?;
        for i in 0..n_entries {
            let position = first_entry.safe_add(u32::from(i).safe_mul(ENTRY_SIZE)?)?;
            let entry = self.read_entry(position)?;

            let Some(field) = TagIfd::new(entry.tag, ifd).field() else {
                tracing::trace!("Skipping unknown tag {} in IFD '{ifd:?}'", entry.tag);
                continue;
            };

            let value = match self.read_value(&entry) {
                Ok(Some(value)) => value,
                Ok(None) => {
                    tracing::debug!(
                        "Unsupported type {} for tag {field}",
                        entry.data_type.u16()
                    );
                    continue;
                }
                Err(err) => {
                    tracing::info!("Failed to read value of tag {field}: {err}");
                    continue;
                }
            };

            if let Some(value) = semantics::map(field, value) {
                tags.insert(field, value);
            }
        }

        tracing::debug!("All entries in IFD '{ifd:?}' read");

        Ok(())
    }

    pub fn read_entry(&self, position: u32) -> Result<EntryRef> {
        let tag = Tag(self.short(position)?);
        let data_type = FieldType::from(self.short(position.safe_add(2)?)?);
        let count = self.long(position.safe_add(4)?)?;

        let value_offset_position = position.safe_add(8)?;
        let raw = self.array(value_offset_position)?;
        let offset = self.long(value_offset_position)?;

        let data_len = match data_type.size() {
            Some(size) => size.safe_mul(count)?,
            None => 0,
        };

        Ok(EntryRef {
            position,
            tag,
            data_type,
            count,
            value_offset: ValueOffset::new(data_len, raw, offset),
        })
    }

    /// Reads the value an entry refers to
    ///
    /// A count of one gives a scalar, every other count a sequence. Returns
    /// `None` for unsupported field types.
    pub fn read_value(&self, entry: &EntryRef) -> Result<Option<Value>> {
        let Some(data_len) = entry.data_len()? else {
            return Ok(None);
        };

        let position = entry.value_position()?;
        let end = self.tiff_start.safe_add(position)?.safe_add(data_len)?;
        if end > self.source.len() {
            return Err(ReadError::OutOfBounds {
                offset: end,
                len: self.source.len(),
            }
            .into());
        }

        let value = match entry.data_type {
            FieldType::Byte | FieldType::Undefined => {
                self.integers(entry.count, position, 1, |x| Ok(i64::from(self.byte(x)?)))?
            }
            FieldType::Ascii => {
                let length = entry.count.saturating_sub(1);
                Value::String(
                    self.source
                        .string_at(self.tiff_start.safe_add(position)?, length)?,
                )
            }
            FieldType::Short => {
                self.integers(entry.count, position, 2, |x| Ok(i64::from(self.short(x)?)))?
            }
            FieldType::Long => {
                self.integers(entry.count, position, 4, |x| Ok(i64::from(self.long(x)?)))?
            }
            FieldType::SLong => self.integers(entry.count, position, 4, |x| {
                Ok(i64::from(self.signed_long(x)?))
            })?,
            FieldType::Rational => self.floats(entry.count, position, |x| {
                Ok(ratio(
                    f64::from(self.long(x)?),
                    f64::from(self.long(x.safe_add(4)?)?),
                ))
            })?,
            FieldType::SRational => self.floats(entry.count, position, |x| {
                Ok(ratio(
                    f64::from(self.signed_long(x)?),
                    f64::from(self.signed_long(x.safe_add(4)?)?),
                ))
            })?,
            FieldType::Unknown(_) => return Ok(None),
        };

        Ok(Some(value))
    }

    fn integers(
        &self,
        count: u32,
        position: u32,
        size: u32,
        read: impl Fn(u32) -> Result<i64>,
    ) -> Result<Value> {
        if count == 1 {
            return Ok(Value::Integer(read(position)?));
        }

        let values = (0..count)
            .map(|i| read(position.safe_add(i.safe_mul(size)?)?))
            .collect::<Result<Vec<_>>>()?;

        Ok(Value::Integers(values))
    }

    fn floats(&self, count: u32, position: u32, read: impl Fn(u32) -> Result<f64>) -> Result<Value> {
        if count == 1 {
            return Ok(Value::Float(read(position)?));
        }

        let values = (0..count)
            .map(|i| read(position.safe_add(i.safe_mul(8)?)?))
            .collect::<Result<Vec<_>>>()?;

        Ok(Value::Floats(values))
    }

    fn absolute(&self, offset: u32) -> Result<u32> {
        Ok(self.tiff_start.safe_add(offset)?)
    }

    fn byte(&self, offset: u32) -> Result<u8> {
        Ok(self.source.byte_at(self.absolute(offset)?)?)
    }

    fn array(&self, offset: u32) -> Result<[u8; 4]> {
        Ok(self.source.array_at::<4>(self.absolute(offset)?)?)
    }

    fn short(&self, offset: u32) -> Result<u16> {
        Ok(self.source.short_at(self.absolute(offset)?, self.byte_order)?)
    }

    fn long(&self, offset: u32) -> Result<u32> {
        Ok(self.source.long_at(self.absolute(offset)?, self.byte_order)?)
    }

    fn signed_long(&self, offset: u32) -> Result<i32> {
        Ok(self
            .source
            .signed_long_at(self.absolute(offset)?, self.byte_order)?)
    }
}

/// Division with float semantics, a zero denominator gives infinity or NaN
fn ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator
}

/// Decodes the Exif data of an APP1 segment
pub fn decode<S: ByteSource>(source: S) -> Result<TagMap> {
    Decoder::new(source)?.decode()
}
