//! Human readable values for enumerated tags
//!
//! Applied to every decoded value before it is stored. Raw codes of
//! enumerated tags are replaced by their label, version bytes are turned into
//! strings.

use exifetch_common::exif::Field;

use crate::value::Value;

/// Maps a decoded value to its presentation form
///
/// Returns `None` if the entry should not be stored, which happens for codes
/// of enumerated tags that have no label.
pub fn map(field: Field, value: Value) -> Option<Value> {
    match field {
        Field::ExifVersion | Field::FlashpixVersion => Some(version_string(value)),
        Field::ComponentsConfiguration => Some(components(value)),
        Field::GPSVersionID => Some(gps_version(value)),
        _ => match value {
            Value::Integer(code) if is_enumerated(field) => {
                let label = label(field, code);
                if label.is_none() {
                    tracing::debug!("No label for {field} code {code}, dropping entry");
                }
                label.map(Value::from)
            }
            value => Some(value),
        },
    }
}

/// Whether raw codes of this tag are replaced by a label
pub fn is_enumerated(field: Field) -> bool {
    matches!(
        field,
        Field::ExposureProgram
            | Field::MeteringMode
            | Field::LightSource
            | Field::Flash
            | Field::SensingMethod
            | Field::SceneCaptureType
            | Field::SceneType
            | Field::CustomRendered
            | Field::WhiteBalance
            | Field::GainControl
            | Field::Contrast
            | Field::Saturation
            | Field::Sharpness
            | Field::SubjectDistanceRange
            | Field::FileSource
    )
}

/// Label for the raw code of an enumerated tag
pub fn label(field: Field, code: i64) -> Option<&'static str> {
    let label = match (field, code) {
        (Field::ExposureProgram, 0) => "Not defined",
        (Field::ExposureProgram, 1) => "Manual",
        (Field::ExposureProgram, 2) => "Normal program",
        (Field::ExposureProgram, 3) => "Aperture priority",
        (Field::ExposureProgram, 4) => "Shutter priority",
        (Field::ExposureProgram, 5) => "Creative program",
        (Field::ExposureProgram, 6) => "Action program",
        (Field::ExposureProgram, 7) => "Portrait mode",
        (Field::ExposureProgram, 8) => "Landscape mode",

        (Field::MeteringMode, 0) => "Unknown",
        (Field::MeteringMode, 1) => "Average",
        (Field::MeteringMode, 2) => "CenterWeightedAverage",
        (Field::MeteringMode, 3) => "Spot",
        (Field::MeteringMode, 4) => "MultiSpot",
        (Field::MeteringMode, 5) => "Pattern",
        (Field::MeteringMode, 6) => "Partial",
        (Field::MeteringMode, 255) => "Other",

        (Field::LightSource, 0) => "Unknown",
        (Field::LightSource, 1) => "Daylight",
        (Field::LightSource, 2) => "Fluorescent",
        (Field::LightSource, 3) => "Tungsten (incandescent light)",
        (Field::LightSource, 4) => "Flash",
        (Field::LightSource, 9) => "Fine weather",
        (Field::LightSource, 10) => "Cloudy weather",
        (Field::LightSource, 11) => "Shade",
        (Field::LightSource, 12) => "Daylight fluorescent (D 5700 - 7100K)",
        (Field::LightSource, 13) => "Day white fluorescent (N 4600 - 5400K)",
        (Field::LightSource, 14) => "Cool white fluorescent (W 3900 - 4500K)",
        (Field::LightSource, 15) => "White fluorescent (WW 3200 - 3700K)",
        (Field::LightSource, 17) => "Standard light A",
        (Field::LightSource, 18) => "Standard light B",
        (Field::LightSource, 19) => "Standard light C",
        (Field::LightSource, 20) => "D55",
        (Field::LightSource, 21) => "D65",
        (Field::LightSource, 22) => "D75",
        (Field::LightSource, 23) => "D50",
        (Field::LightSource, 24) => "ISO studio tungsten",
        (Field::LightSource, 255) => "Other",

        (Field::Flash, 0x00) => "Flash did not fire",
        (Field::Flash, 0x01) => "Flash fired",
        (Field::Flash, 0x05) => "Strobe return light not detected",
        (Field::Flash, 0x07) => "Strobe return light detected",
        (Field::Flash, 0x09) => "Flash fired, compulsory flash mode",
        (Field::Flash, 0x0D) => "Flash fired, compulsory flash mode, return light not detected",
        (Field::Flash, 0x0F) => "Flash fired, compulsory flash mode, return light detected",
        (Field::Flash, 0x10) => "Flash did not fire, compulsory flash mode",
        (Field::Flash, 0x18) => "Flash did not fire, auto mode",
        (Field::Flash, 0x19) => "Flash fired, auto mode",
        (Field::Flash, 0x1D) => "Flash fired, auto mode, return light not detected",
        (Field::Flash, 0x1F) => "Flash fired, auto mode, return light detected",
        (Field::Flash, 0x20) => "No flash function",
        (Field::Flash, 0x41) => "Flash fired, red-eye reduction mode",
        (Field::Flash, 0x45) => "Flash fired, red-eye reduction mode, return light not detected",
        (Field::Flash, 0x47) => "Flash fired, red-eye reduction mode, return light detected",
        (Field::Flash, 0x49) => "Flash fired, compulsory flash mode, red-eye reduction mode",
        (Field::Flash, 0x4D) => {
            "Flash fired, compulsory flash mode, red-eye reduction mode, return light not detected"
        }
        (Field::Flash, 0x4F) => {
            "Flash fired, compulsory flash mode, red-eye reduction mode, return light detected"
        }
        (Field::Flash, 0x59) => "Flash fired, auto mode, red-eye reduction mode",
        (Field::Flash, 0x5D) => {
            "Flash fired, auto mode, return light not detected, red-eye reduction mode"
        }
        (Field::Flash, 0x5F) => "Flash fired, auto mode, return light detected, red-eye reduction mode",

        (Field::SensingMethod, 1) => "Not defined",
        (Field::SensingMethod, 2) => "One-chip color area sensor",
        (Field::SensingMethod, 3) => "Two-chip color area sensor",
        (Field::SensingMethod, 4) => "Three-chip color area sensor",
        (Field::SensingMethod, 5) => "Color sequential area sensor",
        (Field::SensingMethod, 7) => "Trilinear sensor",
        (Field::SensingMethod, 8) => "Color sequential linear sensor",

        (Field::SceneCaptureType, 0) => "Standard",
        (Field::SceneCaptureType, 1) => "Landscape",
        (Field::SceneCaptureType, 2) => "Portrait",
        (Field::SceneCaptureType, 3) => "Night scene",

        (Field::SceneType, 1) => "Directly photographed",

        (Field::CustomRendered, 0) => "Normal process",
        (Field::CustomRendered, 1) => "Custom process",

        (Field::WhiteBalance, 0) => "Auto white balance",
        (Field::WhiteBalance, 1) => "Manual white balance",

        (Field::GainControl, 0) => "None",
        (Field::GainControl, 1) => "Low gain up",
        (Field::GainControl, 2) => "High gain up",
        (Field::GainControl, 3) => "Low gain down",
        (Field::GainControl, 4) => "High gain down",

        (Field::Contrast | Field::Sharpness, 0) => "Normal",
        (Field::Contrast | Field::Sharpness, 1) => "Soft",
        (Field::Contrast | Field::Sharpness, 2) => "Hard",

        (Field::Saturation, 0) => "Normal",
        (Field::Saturation, 1) => "Low saturation",
        (Field::Saturation, 2) => "High saturation",

        (Field::SubjectDistanceRange, 0) => "Unknown",
        (Field::SubjectDistanceRange, 1) => "Macro",
        (Field::SubjectDistanceRange, 2) => "Close view",
        (Field::SubjectDistanceRange, 3) => "Distant view",

        (Field::FileSource, 3) => "DSC",

        _ => return None,
    };

    Some(label)
}

/// Component name for `ComponentsConfiguration` codes
pub fn component(code: i64) -> Option<&'static str> {
    match code {
        0 => Some(""),
        1 => Some("Y"),
        2 => Some("Cb"),
        3 => Some("Cr"),
        4 => Some("R"),
        5 => Some("G"),
        6 => Some("B"),
        _ => None,
    }
}

/// Four ASCII digit bytes like `[0x30, 0x32, 0x32, 0x30]` to `"0220"`
fn version_string(value: Value) -> Value {
    match value {
        Value::Integers(bytes) => {
            let version = bytes
                .iter()
                .filter_map(|x| u8::try_from(*x).ok())
                .map(char::from)
                .collect::<String>();
            Value::String(version)
        }
        value => value,
    }
}

fn components(value: Value) -> Value {
    match value {
        Value::Integers(codes) => {
            let config = codes
                .iter()
                .filter_map(|code| {
                    let name = component(*code);
                    if name.is_none() {
                        tracing::debug!("Skipping unknown component code {code}");
                    }
                    name
                })
                .collect::<String>();
            Value::String(config)
        }
        value => value,
    }
}

fn gps_version(value: Value) -> Value {
    match value {
        Value::Integers(parts) => Value::String(
            parts
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("."),
        ),
        value => value,
    }
}
