#![doc = include_str!("../README.md")]

pub mod exif;
pub mod field;
pub mod geography;
pub mod math;
pub mod orientation;
pub mod read;
pub mod utils;

#[doc(hidden)]
pub use paste;

pub mod prelude {
    pub use crate::exif::{Field, Ifd, Tag, TagIfd};
    pub use crate::read::{ByteOrder, ByteSource, ReadAt, ReadError, Window};
}
