//! Tag tables
//!
//! Names for the tags of the primary (TIFF), Exif and GPS directories. Tags
//! not listed here are skipped while decoding.

mod macros;

use crate::exif::{Ifd, Tag};

macros::make_tags![
    // Primary
    (0x0100, ImageWidth, Primary),
    (0x0101, ImageHeight, Primary),
    /// Offset of the Exif directory
    (0x8769, ExifIFDPointer, Primary),
    /// Offset of the GPS directory
    (0x8825, GPSInfoIFDPointer, Primary),
    /// Listed but not followed
    (0xA005, InteroperabilityIFDPointer, Primary | Exif),
    (0x0102, BitsPerSample, Primary),
    (0x0103, Compression, Primary),
    (0x0106, PhotometricInterpretation, Primary),
    /// Image orientation and mirroring
    (0x0112, Orientation, Primary),
    (0x0115, SamplesPerPixel, Primary),
    (0x011C, PlanarConfiguration, Primary),
    (0x0212, YCbCrSubSampling, Primary),
    (0x0213, YCbCrPositioning, Primary),
    (0x011A, XResolution, Primary),
    (0x011B, YResolution, Primary),
    (0x0128, ResolutionUnit, Primary),
    (0x0111, StripOffsets, Primary),
    (0x0116, RowsPerStrip, Primary),
    (0x0117, StripByteCounts, Primary),
    (0x0201, JPEGInterchangeFormat, Primary),
    (0x0202, JPEGInterchangeFormatLength, Primary),
    (0x012D, TransferFunction, Primary),
    (0x013E, WhitePoint, Primary),
    (0x013F, PrimaryChromaticities, Primary),
    (0x0211, YCbCrCoefficients, Primary),
    (0x0214, ReferenceBlackWhite, Primary),
    (0x0132, DateTime, Primary),
    (0x010E, ImageDescription, Primary),
    (0x010F, Make, Primary),
    (0x0110, Model, Primary),
    (0x0131, Software, Primary),
    (0x013B, Artist, Primary),
    (0x8298, Copyright, Primary),

    // Exif: version
    (0x9000, ExifVersion, Exif),
    (0xA000, FlashpixVersion, Exif),

    // Exif: color space and image configuration
    (0xA001, ColorSpace, Exif),
    (0xA002, PixelXDimension, Exif),
    (0xA003, PixelYDimension, Exif),
    (0x9101, ComponentsConfiguration, Exif),
    (0x9102, CompressedBitsPerPixel, Exif),

    // Exif: user information and related files
    (0x927C, MakerNote, Exif),
    (0x9286, UserComment, Exif),
    (0xA004, RelatedSoundFile, Exif),

    // Exif: date and time
    (0x9003, DateTimeOriginal, Exif),
    (0x9004, DateTimeDigitized, Exif),
    (0x9290, SubsecTime, Exif),
    (0x9291, SubsecTimeOriginal, Exif),
    (0x9292, SubsecTimeDigitized, Exif),

    // Exif: picture-taking conditions
    /// Exposure time in seconds
    (0x829A, ExposureTime, Exif),
    (0x829D, FNumber, Exif),
    (0x8822, ExposureProgram, Exif),
    (0x8824, SpectralSensitivity, Exif),
    (0x8827, ISOSpeedRatings, Exif),
    /// Optoelectric conversion factor
    (0x8828, OECF, Exif),
    (0x9201, ShutterSpeedValue, Exif),
    /// Lens aperture with unit APEX
    (0x9202, ApertureValue, Exif),
    (0x9203, BrightnessValue, Exif),
    (0x9204, ExposureBias, Exif),
    (0x9205, MaxApertureValue, Exif),
    /// Distance to subject in meters
    (0x9206, SubjectDistance, Exif),
    (0x9207, MeteringMode, Exif),
    (0x9208, LightSource, Exif),
    (0x9209, Flash, Exif),
    (0x9214, SubjectArea, Exif),
    /// Focal length in mm
    (0x920A, FocalLength, Exif),
    (0xA20B, FlashEnergy, Exif),
    (0xA20C, SpatialFrequencyResponse, Exif),
    (0xA20E, FocalPlaneXResolution, Exif),
    (0xA20F, FocalPlaneYResolution, Exif),
    (0xA210, FocalPlaneResolutionUnit, Exif),
    (0xA214, SubjectLocation, Exif),
    (0xA215, ExposureIndex, Exif),
    (0xA217, SensingMethod, Exif),
    (0xA300, FileSource, Exif),
    (0xA301, SceneType, Exif),
    (0xA302, CFAPattern, Exif),
    (0xA401, CustomRendered, Exif),
    (0xA402, ExposureMode, Exif),
    (0xA403, WhiteBalance, Exif),
    (0xA404, DigitalZoomRation, Exif),
    /// Equivalent focal length assuming a 35mm film camera
    (0xA405, FocalLengthIn35mmFilm, Exif),
    (0xA406, SceneCaptureType, Exif),
    (0xA407, GainControl, Exif),
    (0xA408, Contrast, Exif),
    (0xA409, Saturation, Exif),
    (0xA40A, Sharpness, Exif),
    (0xA40B, DeviceSettingDescription, Exif),
    (0xA40C, SubjectDistanceRange, Exif),
    (0xA420, ImageUniqueID, Exif),

    // GPS
    (0x0000, GPSVersionID, Gps),
    (0x0001, GPSLatitudeRef, Gps),
    (0x0002, GPSLatitude, Gps),
    (0x0003, GPSLongitudeRef, Gps),
    (0x0004, GPSLongitude, Gps),
    (0x0005, GPSAltitudeRef, Gps),
    (0x0006, GPSAltitude, Gps),
    (0x0007, GPSTimeStamp, Gps),
    (0x0008, GPSSatellites, Gps),
    (0x0009, GPSStatus, Gps),
    (0x000A, GPSMeasureMode, Gps),
    (0x000B, GPSDOP, Gps),
    (0x000C, GPSSpeedRef, Gps),
    (0x000D, GPSSpeed, Gps),
    (0x000E, GPSTrackRef, Gps),
    (0x000F, GPSTrack, Gps),
    (0x0010, GPSImgDirectionRef, Gps),
    (0x0011, GPSImgDirection, Gps),
    (0x0012, GPSMapDatum, Gps),
    (0x0013, GPSDestLatitudeRef, Gps),
    (0x0014, GPSDestLatitude, Gps),
    (0x0015, GPSDestLongitudeRef, Gps),
    (0x0016, GPSDestLongitude, Gps),
    (0x0017, GPSDestBearingRef, Gps),
    (0x0018, GPSDestBearing, Gps),
    (0x0019, GPSDestDistanceRef, Gps),
    (0x001A, GPSDestDistance, Gps),
    (0x001B, GPSProcessingMethod, Gps),
    (0x001C, GPSAreaInformation, Gps),
    (0x001D, GPSDateStamp, Gps),
    (0x001E, GPSDifferential, Gps),
];

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Field {
    type Err = UnknownFieldName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownFieldName(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tag name '{0}'")]
pub struct UnknownFieldName(pub String);
