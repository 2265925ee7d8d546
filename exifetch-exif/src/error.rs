use exifetch_common::math::MathError;
use exifetch_common::read::ReadError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("APP1 data does not start with the Exif identifier")]
    InvalidExifHeader,
    #[error("Invalid TIFF byte order mark: 0x{0:04X}")]
    InvalidByteOrderMark(u16),
    #[error("Invalid TIFF magic number: 0x{0:04X}")]
    InvalidTiffMagic(u16),
    #[error("Primary IFD is expected at offset 8, not at {0}")]
    UnsupportedIfdOffset(u32),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        Self::Read(err.into())
    }
}
