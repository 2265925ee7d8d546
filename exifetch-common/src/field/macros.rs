/// Generates the [`Field`](super::Field) enum from tag table entries
///
/// Each entry is `(tag, Name, Ifd | Ifd ...)`. A name may be listed for
/// several directories, a `(tag, ifd)` pair only once.
macro_rules! make_tags {
    ($($(#[$attrs:meta])* ($tag:literal, $id:ident, $($ifd:ident)|+)),*$(,)?) => {
        /// Tag name from one of the known tag tables
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Field {
            $(
                $(#[$attrs])*
                $id,
            )*
        }

        impl Field {
            /// All fields in table order
            pub const ALL: &'static [Field] = &[$(Self::$id,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$id => stringify!($id),)*
                }
            }

            pub fn tag(self) -> Tag {
                match self {
                    $(Self::$id => Tag($tag),)*
                }
            }

            /// Whether the directory's tag table lists this field
            pub fn in_ifd(self, ifd: Ifd) -> bool {
                match self {
                    $(Self::$id => matches!(ifd, $(Ifd::$ifd)|+),)*
                }
            }

            /// Resolves a tag through the tag table of `ifd`
            pub fn lookup(tag: Tag, ifd: Ifd) -> Option<Self> {
                match (tag.0, ifd) {
                    $($(($tag, Ifd::$ifd) => Some(Self::$id),)+)*
                    _ => None,
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($id) => Some(Self::$id),)*
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use make_tags;
