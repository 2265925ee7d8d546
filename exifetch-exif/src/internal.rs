//! Low level access to directory entries

mod decode;
mod entry;
mod type_;

pub use decode::{decode, Decoder, EXIF_HEADER_LEN, PRIMARY_IFD_OFFSET};
pub use entry::{EntryRef, ValueOffset, ENTRY_SIZE};
pub use exifetch_common::exif::{Ifd, Tag, TagIfd};
pub use type_::FieldType;
