#![doc = include_str!("../README.md")]

pub mod fetch;
mod image;

pub use exifetch_common as common;
pub use exifetch_common::exif::Field;
use exifetch_common::read::{ByteSource, ReadError};
pub use exifetch_exif::{Exif, TagMap, Value};
use exifetch_jpeg::Jpeg;
pub use fetch::{ByteFetcher, ByteRange, FetchConfig, FetchError, HttpFetcher};
pub use image::{LoadState, RemoteImage};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Not a JPEG")]
    NotAJpeg,
    #[error("Malformed marker at offset {offset}: 0x{found:02X}")]
    MalformedMarker { offset: u32, found: u8 },
    #[error("No APP1 segment")]
    NoExifSegment,
    #[error("Invalid Exif header")]
    InvalidExifHeader,
    #[error("Invalid byte order mark: 0x{0:04X}")]
    InvalidByteOrderMark(u16),
    #[error("Invalid TIFF magic number: 0x{0:04X}")]
    InvalidTiffMagic(u16),
    #[error("Unsupported offset of the primary IFD: {0}")]
    UnsupportedIfdOffset(u32),
    #[error("Truncated data: {0}")]
    Truncated(ReadError),
    #[error("Fetch failed: {0}")]
    FetchFailed(#[from] FetchError),
}

impl From<exifetch_jpeg::Error> for DecodeError {
    fn from(err: exifetch_jpeg::Error) -> Self {
        match err {
            exifetch_jpeg::Error::NotAJpeg => Self::NotAJpeg,
            exifetch_jpeg::Error::MalformedMarker { offset, found } => {
                Self::MalformedMarker { offset, found }
            }
            exifetch_jpeg::Error::NoExifSegment => Self::NoExifSegment,
            exifetch_jpeg::Error::Read(err) => Self::Truncated(err),
        }
    }
}

impl From<exifetch_exif::Error> for DecodeError {
    fn from(err: exifetch_exif::Error) -> Self {
        match err {
            exifetch_exif::Error::InvalidExifHeader => Self::InvalidExifHeader,
            exifetch_exif::Error::InvalidByteOrderMark(mark) => Self::InvalidByteOrderMark(mark),
            exifetch_exif::Error::InvalidTiffMagic(magic) => Self::InvalidTiffMagic(magic),
            exifetch_exif::Error::UnsupportedIfdOffset(offset) => {
                Self::UnsupportedIfdOffset(offset)
            }
            exifetch_exif::Error::Read(err) => Self::Truncated(err),
        }
    }
}

/// Decodes the Exif data of a JPEG image
///
/// An image without APP1 segment gives an empty map.
pub fn decode<S: ByteSource + ?Sized>(data: &S) -> Result<TagMap, DecodeError> {
    let jpeg = Jpeg::new(data)?;

    let exif_data = match jpeg.exif_data() {
        Ok(exif_data) => exif_data,
        Err(exifetch_jpeg::Error::NoExifSegment) => {
            tracing::debug!("Image has no APP1 segment");
            return Ok(TagMap::new());
        }
        Err(err) => return Err(err.into()),
    };

    Ok(exifetch_exif::internal::decode(exif_data)?)
}

/// Same as [`decode`] with the result wrapped in an [`Exif`]
pub fn decode_exif<S: ByteSource + ?Sized>(data: &S) -> Result<Exif, DecodeError> {
    decode(data).map(Exif::from_tags)
}
