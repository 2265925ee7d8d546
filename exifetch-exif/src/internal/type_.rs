exifetch_common::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Field type of a directory entry
    pub enum FieldType {
        Byte = 1,
        Ascii = 2,
        Short = 3,
        Long = 4,
        Rational = 5,
        Undefined = 7,
        SLong = 9,
        SRational = 10,
    }
);

impl FieldType {
    /// Size of one element in bytes
    ///
    /// Returns `None` for unsupported types, which carry no value.
    pub fn size(self) -> Option<u32> {
        match self {
            Self::Byte | Self::Ascii | Self::Undefined => Some(1),
            Self::Short => Some(2),
            Self::Long | Self::SLong => Some(4),
            Self::Rational | Self::SRational => Some(8),
            Self::Unknown(_) => None,
        }
    }

    pub fn u16(self) -> u16 {
        self.into()
    }
}
