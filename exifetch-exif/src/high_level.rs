use std::fmt;

use exifetch_common::exif::Field;
use exifetch_common::geography::{LatRef, Location, LonRef};
use exifetch_common::orientation;
use exifetch_common::read::ByteSource;

use crate::error::Result;
use crate::internal::Decoder;
use crate::value::{TagMap, Value};

/// Decoded Exif data of one image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exif {
    tags: TagMap,
}

impl Exif {
    /// Decodes APP1 segment data
    ///
    /// Offset `0` of `data` has to be the start of the Exif identifier.
    pub fn new<S: ByteSource>(data: S) -> Result<Self> {
        let tags = Decoder::new(data)?.decode()?;
        Ok(Self { tags })
    }

    pub fn from_tags(tags: TagMap) -> Self {
        Self { tags }
    }

    /// Value of the tag with the given name
    pub fn get_tag(&self, name: &str) -> Option<&Value> {
        self.tags.get_by_name(name)
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        self.tags.get(field)
    }

    /// Copy of all decoded tags
    pub fn all_tags(&self) -> TagMap {
        self.tags.clone()
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    pub fn into_tags(self) -> TagMap {
        self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn to_display_string(&self) -> String {
        self.tags.to_display_string()
    }

    /// Image orientation
    ///
    /// Rotation and mirroring that have to be applied to show the image
    /// correctly
    pub fn orientation(&self) -> orientation::Orientation {
        self.get(Field::Orientation)
            .and_then(Value::as_i64)
            .and_then(|x| u16::try_from(x).ok())
            .and_then(|x| orientation::Orientation::try_from(x).ok())
            .unwrap_or(orientation::Orientation::Id)
    }

    /// Camera manufacturer
    pub fn make(&self) -> Option<String> {
        self.string(Field::Make)
    }

    /// Camera model
    pub fn model(&self) -> Option<String> {
        self.string(Field::Model)
    }

    /// ISO
    ///
    /// Only the first value is used if several are stored.
    pub fn iso_speed_rating(&self) -> Option<u16> {
        let iso = match self.get(Field::ISOSpeedRatings)? {
            Value::Integer(x) => *x,
            Value::Integers(x) => *x.first()?,
            _ => return None,
        };

        u16::try_from(iso).ok()
    }

    /// Aperture
    pub fn f_number(&self) -> Option<f64> {
        self.get(Field::FNumber)?.as_f64()
    }

    /// Focal length in mm
    pub fn focal_length(&self) -> Option<f64> {
        self.get(Field::FocalLength)?.as_f64()
    }

    /// Exposure time in seconds
    pub fn exposure_time(&self) -> Option<f64> {
        self.get(Field::ExposureTime)?.as_f64()
    }

    /// Capture time
    ///
    /// Sub-seconds are added if present. Exif stores local times without a
    /// timezone, hence the naive type.
    #[cfg(feature = "chrono")]
    pub fn date_time_original(&self) -> Option<chrono::NaiveDateTime> {
        let mut datetime = self.string(Field::DateTimeOriginal)?.trim().to_string();
        let mut format = String::from("%Y:%m:%d %H:%M:%S");

        if let Some(subsec) = self.string(Field::SubsecTimeOriginal) {
            // Some cameras use a leading NUL
            let subsec = subsec.trim().replace('\0', "");
            if !subsec.is_empty() {
                datetime.push('.');
                datetime.push_str(&subsec);
                format.push_str("%.f");
            }
        }

        match chrono::NaiveDateTime::parse_from_str(&datetime, &format) {
            Ok(datetime) => Some(datetime),
            Err(err) => {
                tracing::debug!("Unsupported date time '{datetime}': {err}");
                None
            }
        }
    }

    /// GPS location in decimal degrees
    pub fn location(&self) -> Option<Location> {
        let lat_ref = LatRef::try_from(self.get(Field::GPSLatitudeRef)?.as_str()?).ok()?;
        let lon_ref = LonRef::try_from(self.get(Field::GPSLongitudeRef)?.as_str()?).ok()?;

        let lat = self.deg_min_sec(Field::GPSLatitude)?;
        let lon = self.deg_min_sec(Field::GPSLongitude)?;

        Some(Location::from_ref_coord(lat_ref, lat, lon_ref, lon))
    }

    fn deg_min_sec(&self, field: Field) -> Option<(f64, f64, f64)> {
        match self.get(field)?.as_floats()? {
            [deg, min, sec] => Some((*deg, *min, *sec)),
            other => {
                tracing::debug!("{field} has {} instead of 3 values", other.len());
                None
            }
        }
    }

    fn string(&self, field: Field) -> Option<String> {
        let s = self.get(field)?.as_str()?;
        Some(s.trim_end_matches('\0').to_string())
    }
}

impl From<TagMap> for Exif {
    fn from(tags: TagMap) -> Self {
        Self::from_tags(tags)
    }
}

impl fmt::Display for Exif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tags, f)
    }
}
