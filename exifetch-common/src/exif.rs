pub use crate::field::Field;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u16);

impl Tag {
    pub const EXIF_IFD_POINTER: Self = Self(0x8769);
    pub const GPS_INFO_IFD_POINTER: Self = Self(0x8825);
    pub const INTEROPERABILITY_IFD_POINTER: Self = Self(0xA005);
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Image file directory
///
/// Each directory has its own tag table. The Exif and GPS directories are
/// reached through pointer tags in the primary directory.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ifd {
    Primary,
    Exif,
    Gps,
}

impl Ifd {
    /// Directories that are followed from the primary directory
    pub const SUB_IFDS: [Ifd; 2] = [Ifd::Exif, Ifd::Gps];

    /// Tag in the primary directory that holds the offset of this directory
    pub fn pointer(self) -> Option<Field> {
        match self {
            Self::Primary => None,
            Self::Exif => Some(Field::ExifIFDPointer),
            Self::Gps => Some(Field::GPSInfoIFDPointer),
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TagIfd {
    pub tag: Tag,
    pub ifd: Ifd,
}

impl TagIfd {
    pub fn new(tag: Tag, ifd: Ifd) -> Self {
        Self { tag, ifd }
    }

    /// Name of the tag if it is listed in the directory's tag table
    pub fn field(self) -> Option<Field> {
        Field::lookup(self.tag, self.ifd)
    }
}
