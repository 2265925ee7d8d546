#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub lat: Coord,
    pub lon: Coord,
}

impl Location {
    pub fn new_from_coord(lat: Coord, lon: Coord) -> Self {
        Self { lat, lon }
    }

    /// Location from the degrees, minutes, seconds triples stored in GPS tags
    pub fn from_ref_coord(
        lat_ref: LatRef,
        lat: (f64, f64, f64),
        lon_ref: LonRef,
        lon: (f64, f64, f64),
    ) -> Self {
        let lat = Coord::from_sign_deg_min_sec(lat_ref.as_sign(), lat);
        let lon = Coord::from_sign_deg_min_sec(lon_ref.as_sign(), lon);

        Self { lat, lon }
    }

    /// Locations as `geo:` URI
    ///
    /// The precision of the coordinates is limited to six decimal places.
    ///
    /// ```
    /// # use exifetch_common::geography::*;
    /// let loc = Location::from_ref_coord(
    ///     LatRef::North,
    ///     (35., 39., 31.),
    ///     LonRef::East,
    ///     (139., 44., 43.),
    /// );
    /// assert_eq!(loc.geo_uri(), "geo:35.658611,139.745278");
    /// ```
    pub fn geo_uri(&self) -> String {
        let lat = self.lat.0;
        let lon = self.lon.0;
        format!("geo:{lat:.6},{lon:.6}")
    }
}

/// Coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub f64);

impl Coord {
    /// ```
    /// # use exifetch_common::geography::*;
    /// let ang = Coord::from_deg_min_sec((-89., 24., 2.2));
    /// assert_eq!((ang.0 * 100_000.).round() / 100_000., -89.40061);
    /// ```
    pub fn from_deg_min_sec((deg, min, sec): (f64, f64, f64)) -> Self {
        let sign = if deg.is_sign_negative() { -1. } else { 1. };
        Coord(deg + sign * min / 60. + sign * sec / 60. / 60.)
    }

    pub fn from_sign_deg_min_sec(sign: f64, deg_min_sec: (f64, f64, f64)) -> Self {
        Self(sign * Self::from_deg_min_sec(deg_min_sec).0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatRef {
    North,
    South,
}

impl LatRef {
    pub fn as_sign(&self) -> f64 {
        match self {
            Self::North => 1.,
            Self::South => -1.,
        }
    }
}

impl TryFrom<&str> for LatRef {
    type Error = InvalidRef;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim_end_matches('\0') {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            v => Err(InvalidRef::Latitude(v.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LonRef {
    East,
    West,
}

impl LonRef {
    pub fn as_sign(&self) -> f64 {
        match self {
            Self::East => 1.,
            Self::West => -1.,
        }
    }
}

impl TryFrom<&str> for LonRef {
    type Error = InvalidRef;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim_end_matches('\0') {
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            v => Err(InvalidRef::Longitude(v.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRef {
    #[error("Invalid latitude reference: '{0}'. Must be 'N' or 'S'.")]
    Latitude(String),
    #[error("Invalid longitude reference: '{0}'. Must be 'E' or 'W'.")]
    Longitude(String),
}
