#![doc = include_str!("../README.md")]

use exifetch_common::math::*;
use exifetch_common::read::{ByteOrder, ByteSource, ReadAt, ReadError, Window};

/// Prefix of Exif data inside an APP1 segment
pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";

/// Every marker starts with this byte
pub const MARKER_START: u8 = 0xFF;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Data does not start with a JPEG start of image marker")]
    NotAJpeg,
    #[error("Expected marker prefix 0xFF at offset {offset}, found 0x{found:02X}")]
    MalformedMarker { offset: u32, found: u8 },
    #[error("No APP1 segment found")]
    NoExifSegment,
    #[error("Read: {0}")]
    Read(#[from] ReadError),
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        Self::Read(err.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    marker: Marker,
    pos: u32,
    len: u32,
}

impl Segment {
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Position of the marker prefix
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Position of the data after marker and length field
    pub fn data_pos(&self) -> u32 {
        self.pos.saturating_add(4)
    }

    /// Length of the data
    ///
    /// The length field of a segment counts itself, but not the marker.
    pub fn data_len(&self) -> u32 {
        self.len.saturating_sub(2)
    }
}

#[derive(Debug, Clone)]
pub struct Jpeg<S> {
    source: S,
}

impl<S: ByteSource> Jpeg<S> {
    /// Checks for the start of image marker
    pub fn new(source: S) -> Result<Self, Error> {
        if !Self::is_filetype(&source) {
            return Err(Error::NotAJpeg);
        }

        Ok(Self { source })
    }

    pub fn is_filetype(source: &S) -> bool {
        matches!(source.array_at::<2>(0), Ok([MARKER_START, 0xD8]))
    }

    /// Segments in their order of appearance
    ///
    /// The iterator ends after the start of scan or end of image segment, at
    /// the end of the data, or after returning an error.
    pub fn segments(&self) -> Segments<'_, S> {
        Segments {
            source: &self.source,
            offset: 2,
            done: false,
        }
    }

    /// First APP1 segment
    pub fn app1(&self) -> Result<Segment, Error> {
        for segment in self.segments() {
            let segment = segment?;
            // Legacy readers also accepted a marker value of 22400, which a
            // single byte read can never produce. Suspect, not supported.
            if segment.marker() == Marker::APP1 {
                tracing::debug!("Found APP1 segment at byte {}", segment.pos());
                return Ok(segment);
            }
        }

        Err(Error::NoExifSegment)
    }

    /// Data of the first APP1 segment
    ///
    /// Offset `0` of the returned window is the first byte after the length
    /// field, where the Exif identifier is expected.
    pub fn exif_data(&self) -> Result<Window<&S>, Error> {
        let segment = self.app1()?;
        Window::new(&self.source, segment.data_pos(), segment.data_len()).map_err(Into::into)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

pub struct Segments<'a, S> {
    source: &'a S,
    offset: u32,
    done: bool,
}

impl<S: ByteSource> Segments<'_, S> {
    fn read_segment(&mut self) -> Result<Option<Segment>, Error> {
        let pos = self.offset;

        let prefix = self.source.byte_at(pos)?;
        if prefix != MARKER_START {
            tracing::debug!("Not a valid marker at offset {pos}, found: 0x{prefix:02X}");
            return Err(Error::MalformedMarker {
                offset: pos,
                found: prefix,
            });
        }

        let marker = Marker::from(self.source.byte_at(pos.safe_add(1)?)?);

        if marker == Marker::EOI {
            self.done = true;
            return Ok(Some(Segment {
                marker,
                pos,
                len: 0,
            }));
        }

        let len = u32::from(self.source.short_at(pos.safe_add(2)?, ByteOrder::BigEndian)?);
        tracing::trace!("Segment {marker:?} at byte {pos} with length {len}");

        if marker == Marker::SOS {
            self.done = true;
        } else {
            self.offset = pos.safe_add(2)?.safe_add(len)?;
        }

        Ok(Some(Segment { marker, pos, len }))
    }
}

impl<S: ByteSource> Iterator for Segments<'_, S> {
    type Item = Result<Segment, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.source.len() {
            return None;
        }

        match self.read_segment() {
            Ok(segment) => segment.map(Ok),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

exifetch_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Marker {
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        SOF2 = 0xC2,
        /// Define Huffman table
        DHT = 0xC4,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        /// Define quantization table
        DQT = 0xDB,
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        APP13 = 0xED,
        APP14 = 0xEE,
        /// Comment
        COM = 0xFE,
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(marker: u8, data: &[u8]) -> Vec<u8> {
        let len = u16::try_from(data.len() + 2).unwrap();
        let mut out = vec![MARKER_START, marker];
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(data);
        out
    }

    fn jpeg(segments: &[Vec<u8>]) -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8];
        for segment in segments {
            data.extend_from_slice(segment);
        }
        data
    }

    #[test]
    fn not_a_jpeg() {
        let data = b"\x89PNG\r\n".to_vec();
        assert_eq!(Jpeg::new(data).err(), Some(Error::NotAJpeg));
        assert_eq!(Jpeg::new(vec![0xFF]).err(), Some(Error::NotAJpeg));
    }

    #[test]
    fn finds_app1_after_app0() {
        let data = jpeg(&[
            segment(0xE0, b"JFIF\0\x01\x01"),
            segment(0xE1, b"Exif\0\0II*\0"),
            segment(0xDB, &[0; 4]),
        ]);
        let jpeg = Jpeg::new(data).unwrap();

        let app1 = jpeg.app1().unwrap();
        assert_eq!(app1.pos(), 13);
        assert_eq!(app1.data_pos(), 17);
        assert_eq!(app1.data_len(), 10);

        let exif = jpeg.exif_data().unwrap();
        assert_eq!(exif.len(), 10);
        assert_eq!(exif.string_at(0, 4).unwrap(), "Exif");
    }

    #[test]
    fn no_app1_before_end_of_data() {
        let data = jpeg(&[segment(0xE0, b"JFIF\0"), segment(0xFE, b"comment")]);
        let jpeg = Jpeg::new(data).unwrap();
        assert_eq!(jpeg.app1(), Err(Error::NoExifSegment));

        let markers = jpeg
            .segments()
            .map(|x| x.unwrap().marker())
            .collect::<Vec<_>>();
        assert_eq!(markers, vec![Marker::APP0, Marker::COM]);
    }

    #[test]
    fn stops_at_start_of_scan() {
        let mut data = jpeg(&[segment(0xDB, &[0; 4]), segment(0xDA, &[1, 2, 3])]);
        // Entropy coded data that would not parse as segments
        data.extend_from_slice(&[0x12, 0x34, 0xFF, 0x00, 0x56]);
        data.extend_from_slice(&[0xFF, 0xD9]);

        let jpeg = Jpeg::new(data).unwrap();
        assert_eq!(jpeg.app1(), Err(Error::NoExifSegment));
        assert_eq!(
            jpeg.segments().last().unwrap().unwrap().marker(),
            Marker::SOS
        );
    }

    #[test]
    fn malformed_marker() {
        let mut data = jpeg(&[segment(0xE0, b"JFIF\0")]);
        data.extend_from_slice(&[0x00, 0xE1, 0x00, 0x02]);

        let jpeg = Jpeg::new(data).unwrap();
        assert_eq!(
            jpeg.app1(),
            Err(Error::MalformedMarker {
                offset: 11,
                found: 0x00
            })
        );
    }

    #[test]
    fn truncated_length() {
        let data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00];
        let jpeg = Jpeg::new(data).unwrap();
        assert!(matches!(jpeg.app1(), Err(Error::Read(_))));
    }

    #[test]
    fn app1_matched_by_marker_byte() {
        // 22400 is 0x5780, its low byte is no APP1 marker
        let data = jpeg(&[segment(0x80, b"Exif\0\0"), segment(0x57, b"Exif\0\0")]);
        let jpeg = Jpeg::new(data).unwrap();
        assert_eq!(jpeg.app1(), Err(Error::NoExifSegment));
        assert_eq!(
            jpeg.segments().next().unwrap().unwrap().marker(),
            Marker::Unknown(0x80)
        );
    }

    #[test]
    fn end_of_image() {
        let data = vec![0xFF, 0xD8, 0xFF, 0xD9, 0xFF, 0xE1, 0x00, 0x02];
        let jpeg = Jpeg::new(data).unwrap();
        assert_eq!(jpeg.app1(), Err(Error::NoExifSegment));
    }
}
