#![doc = include_str!("../README.md")]

pub mod error;
mod high_level;
pub mod internal;
pub mod semantics;
pub mod value;

pub use error::{Error, Result};
pub use high_level::Exif;
pub use value::{TagMap, Value};
