//! Random access byte sources and the primitive reads on top of them
//!
//! All multi-byte reads consume consecutive bytes starting at the given
//! offset. Big endian reads the most significant byte first, little endian the
//! least significant byte first.

use crate::math::*;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    #[error("Offset {offset} is outside of data with length {len}")]
    OutOfBounds { offset: u32, len: u32 },
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

/// Byte order of multi-byte values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Byte order from the TIFF byte order mark
    ///
    /// `II` (Intel) is little endian and `MM` (Motorola) is big endian.
    pub fn from_mark(mark: [u8; 2]) -> Option<Self> {
        match &mark {
            b"II" => Some(Self::LittleEndian),
            b"MM" => Some(Self::BigEndian),
            _ => None,
        }
    }

    pub fn is_big_endian(self) -> bool {
        self == Self::BigEndian
    }
}

/// Random access to a sequence of bytes
///
/// Offsets are valid in `[0, len)`. Everything else is an
/// [`ReadError::OutOfBounds`].
pub trait ByteSource {
    fn len(&self) -> u32;

    fn byte_at(&self, offset: u32) -> Result<u8, ReadError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ByteSource for [u8] {
    fn len(&self) -> u32 {
        // Data beyond 4 GiB is not addressable by 32 bit offsets anyway
        u32::try_from(<[u8]>::len(self)).unwrap_or(u32::MAX)
    }

    fn byte_at(&self, offset: u32) -> Result<u8, ReadError> {
        self.get(offset.usize()?)
            .copied()
            .ok_or(ReadError::OutOfBounds {
                offset,
                len: ByteSource::len(self),
            })
    }
}

impl ByteSource for Vec<u8> {
    fn len(&self) -> u32 {
        ByteSource::len(self.as_slice())
    }

    fn byte_at(&self, offset: u32) -> Result<u8, ReadError> {
        self.as_slice().byte_at(offset)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn len(&self) -> u32 {
        (**self).len()
    }

    fn byte_at(&self, offset: u32) -> Result<u8, ReadError> {
        (**self).byte_at(offset)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for std::sync::Arc<T> {
    fn len(&self) -> u32 {
        (**self).len()
    }

    fn byte_at(&self, offset: u32) -> Result<u8, ReadError> {
        (**self).byte_at(offset)
    }
}

/// View into another byte source
///
/// Offset `0` of the window is offset `start` of the underlying source. The
/// window never reaches past the end of the underlying source.
///
/// ```
/// # use exifetch_common::read::*;
/// let data = b"..Exif..".as_slice();
/// let window = Window::new(data, 2, 4).unwrap();
/// assert_eq!(window.string_at(0, 4).unwrap(), "Exif");
/// assert!(window.byte_at(4).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Window<S> {
    source: S,
    start: u32,
    len: u32,
}

impl<S: ByteSource> Window<S> {
    /// Creates a window of at most `len` bytes starting at `start`
    pub fn new(source: S, start: u32, len: u32) -> Result<Self, ReadError> {
        let available = source.len().checked_sub(start).ok_or(ReadError::OutOfBounds {
            offset: start,
            len: source.len(),
        })?;

        Ok(Self {
            source,
            start,
            len: len.min(available),
        })
    }

    /// Position of the window inside the underlying source
    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ByteSource> ByteSource for Window<S> {
    fn len(&self) -> u32 {
        self.len
    }

    fn byte_at(&self, offset: u32) -> Result<u8, ReadError> {
        if offset >= self.len {
            return Err(ReadError::OutOfBounds {
                offset,
                len: self.len,
            });
        }

        self.source.byte_at(self.start.safe_add(offset)?)
    }
}

/// Primitive reads at absolute offsets
///
/// Implemented for every [`ByteSource`].
///
/// ```
/// # use exifetch_common::read::*;
/// let data = [0xFF, 0xFE, 0x00, 0x2A];
/// let data = data.as_slice();
/// assert_eq!(data.short_at(0, ByteOrder::BigEndian).unwrap(), 0xFFFE);
/// assert_eq!(data.short_at(0, ByteOrder::LittleEndian).unwrap(), 0xFEFF);
/// assert_eq!(data.signed_short_at(0, ByteOrder::BigEndian).unwrap(), -2);
/// assert_eq!(data.long_at(0, ByteOrder::BigEndian).unwrap(), 0xFFFE002A);
/// ```
pub trait ReadAt: ByteSource {
    /// Reads `N` consecutive bytes
    fn array_at<const N: usize>(&self, offset: u32) -> Result<[u8; N], ReadError> {
        let mut bytes = [0; N];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.byte_at(offset.safe_add(i.u32()?)?)?;
        }
        Ok(bytes)
    }

    fn signed_byte_at(&self, offset: u32) -> Result<i8, ReadError> {
        Ok(i8::from_be_bytes([self.byte_at(offset)?]))
    }

    fn short_at(&self, offset: u32, byte_order: ByteOrder) -> Result<u16, ReadError> {
        let bytes = self.array_at(offset)?;
        Ok(match byte_order {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
        })
    }

    fn signed_short_at(&self, offset: u32, byte_order: ByteOrder) -> Result<i16, ReadError> {
        let bytes = self.array_at(offset)?;
        Ok(match byte_order {
            ByteOrder::BigEndian => i16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i16::from_le_bytes(bytes),
        })
    }

    fn long_at(&self, offset: u32, byte_order: ByteOrder) -> Result<u32, ReadError> {
        let bytes = self.array_at(offset)?;
        Ok(match byte_order {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
        })
    }

    fn signed_long_at(&self, offset: u32, byte_order: ByteOrder) -> Result<i32, ReadError> {
        let bytes = self.array_at(offset)?;
        Ok(match byte_order {
            ByteOrder::BigEndian => i32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i32::from_le_bytes(bytes),
        })
    }

    /// Single byte as latin-1 character
    fn char_at(&self, offset: u32) -> Result<char, ReadError> {
        self.byte_at(offset).map(char::from)
    }

    /// Reads `length` bytes as latin-1 characters
    ///
    /// No encoding validation is done, every byte becomes one character.
    fn string_at(&self, offset: u32, length: u32) -> Result<String, ReadError> {
        (0..length)
            .map(|i| self.char_at(offset.safe_add(i)?))
            .collect()
    }
}

impl<T: ByteSource + ?Sized> ReadAt for T {}
