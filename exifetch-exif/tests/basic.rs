mod utils;

use exifetch_common::exif::Field;
use exifetch_exif::error::Error;
use exifetch_exif::internal::*;
use exifetch_exif::{TagMap, Value};
use utils::{ByteOrder, Data, Tiff};

fn decode(data: &[u8]) -> Result<TagMap, Error> {
    exifetch_exif::internal::decode(data)
}

fn sample() -> Tiff {
    Tiff::le()
        .entry(Ifd::Primary, 0x010F, Data::Ascii("Canon".into()))
        .entry(Ifd::Primary, 0x0112, Data::Shorts(vec![6]))
        .entry(Ifd::Primary, 0x0102, Data::Shorts(vec![8, 8, 8]))
        .entry(Ifd::Primary, 0x011A, Data::Rationals(vec![(72, 1)]))
        .entry(Ifd::Exif, 0x9000, Data::Undefined(b"0220".to_vec()))
        .entry(Ifd::Exif, 0x829D, Data::Rationals(vec![(28, 10)]))
        .entry(Ifd::Exif, 0x9209, Data::Shorts(vec![0x19]))
        .entry(Ifd::Exif, 0x9204, Data::SRationals(vec![(-2, 3)]))
        .entry(Ifd::Exif, 0x9214, Data::Shorts(vec![10, 20, 30, 40]))
        .entry(Ifd::Exif, 0xA002, Data::Longs(vec![4000]))
        .entry(Ifd::Exif, 0x9101, Data::Undefined(vec![1, 2, 3, 0]))
        .entry(Ifd::Gps, 0x0000, Data::Bytes(vec![2, 2, 0, 0]))
        .entry(Ifd::Gps, 0x0001, Data::Ascii("N".into()))
        .entry(
            Ifd::Gps,
            0x0002,
            Data::Rationals(vec![(35, 1), (39, 1), (31, 1)]),
        )
}

#[test]
fn basic_low_level() {
    let data = sample().app1();
    let decoder = Decoder::new(&data[..]).unwrap();
    assert_eq!(decoder.byte_order(), ByteOrder::LittleEndian);

    // First entry of the primary IFD
    let entry = decoder.read_entry(PRIMARY_IFD_OFFSET + 2).unwrap();
    assert_eq!(entry.tag, Tag(0x010F));
    assert_eq!(entry.data_type, FieldType::Ascii);
    assert_eq!(entry.count, 6);
    assert!(matches!(entry.value_offset, ValueOffset::Offset(_)));
    assert_eq!(
        decoder.read_value(&entry).unwrap(),
        Some(Value::from("Canon"))
    );

    let entry = decoder
        .read_entry(PRIMARY_IFD_OFFSET + 2 + ENTRY_SIZE)
        .unwrap();
    assert_eq!(entry.tag, Tag(0x0112));
    assert_eq!(entry.value_offset, ValueOffset::Value([6, 0, 0, 0]));
}

#[test]
fn all_directories() {
    let tags = decode(&sample().app1()).unwrap();

    assert_eq!(tags.get(Field::Make), Some(&Value::from("Canon")));
    assert_eq!(tags.get(Field::Orientation), Some(&Value::Integer(6)));
    assert_eq!(
        tags.get(Field::BitsPerSample),
        Some(&Value::Integers(vec![8, 8, 8]))
    );
    assert_eq!(tags.get(Field::XResolution), Some(&Value::Float(72.)));
    assert_eq!(tags.get(Field::ExifVersion), Some(&Value::from("0220")));
    assert_eq!(tags.get(Field::FNumber), Some(&Value::Float(2.8)));
    assert_eq!(
        tags.get(Field::Flash),
        Some(&Value::from("Flash fired, auto mode"))
    );
    assert_eq!(
        tags.get(Field::ExposureBias),
        Some(&Value::Float(-2. / 3.))
    );
    assert_eq!(
        tags.get(Field::SubjectArea),
        Some(&Value::Integers(vec![10, 20, 30, 40]))
    );
    assert_eq!(tags.get(Field::PixelXDimension), Some(&Value::Integer(4000)));
    assert_eq!(
        tags.get(Field::ComponentsConfiguration),
        Some(&Value::from("YCbCr"))
    );
    assert_eq!(tags.get(Field::GPSVersionID), Some(&Value::from("2.2.0.0")));
    assert_eq!(tags.get(Field::GPSLatitudeRef), Some(&Value::from("N")));
    assert_eq!(
        tags.get(Field::GPSLatitude),
        Some(&Value::Floats(vec![35., 39., 31.]))
    );

    // Pointers are kept as regular tags
    assert!(tags.contains(Field::ExifIFDPointer));
    assert!(tags.contains(Field::GPSInfoIFDPointer));
}

#[test]
fn endianness_invariance() {
    let le = sample();
    let be = le.with_order(ByteOrder::BigEndian);
    assert_ne!(le.app1(), be.app1());

    let le = decode(&le.app1()).unwrap();
    let be = decode(&be.app1()).unwrap();

    assert_eq!(le, be);
    assert_eq!(le.len(), 16);
}

#[test]
fn rational_half() {
    let data = Tiff::be()
        .entry(Ifd::Primary, 0x011A, Data::Rationals(vec![(1, 2)]))
        .app1();

    let tags = decode(&data).unwrap();
    assert_eq!(tags.get(Field::XResolution), Some(&Value::Float(0.5)));
}

#[test]
fn signed_values() {
    let data = Tiff::be()
        .entry(Ifd::Exif, 0x9204, Data::SRationals(vec![(-1, 3)]))
        .entry(Ifd::Exif, 0x9203, Data::SRationals(vec![(1, -4), (-3, 4)]))
        .app1();

    let tags = decode(&data).unwrap();
    assert_eq!(tags.get(Field::ExposureBias), Some(&Value::Float(-1. / 3.)));
    assert_eq!(
        tags.get(Field::BrightnessValue),
        Some(&Value::Floats(vec![-0.25, -0.75]))
    );
}

#[test]
fn signed_long_sequence() {
    let data = Tiff::le()
        .entry(Ifd::Exif, 0x9214, Data::SLongs(vec![-1, 2]))
        .app1();

    let tags = decode(&data).unwrap();
    assert_eq!(
        tags.get(Field::SubjectArea),
        Some(&Value::Integers(vec![-1, 2]))
    );
}

#[test]
fn unknown_tags_and_types_skipped() {
    let data = Tiff::le()
        .entry(Ifd::Primary, 0x010F, Data::Ascii("Make".into()))
        // Not in the primary table
        .entry(Ifd::Primary, 0x9209, Data::Shorts(vec![1]))
        .entry(Ifd::Primary, 0xC4A5, Data::Longs(vec![1]))
        // Unsupported type
        .entry(
            Ifd::Primary,
            0x0110,
            Data::Raw {
                type_: 129,
                count: 2,
                value: 0,
            },
        )
        .app1();

    let tags = decode(&data).unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags.get(Field::Make), Some(&Value::from("Make")));
}

#[test]
fn unreadable_value_dropped() {
    let data = Tiff::le()
        .entry(Ifd::Primary, 0x010F, Data::Ascii("Make".into()))
        .entry(
            Ifd::Primary,
            0x0110,
            Data::Raw {
                type_: 2,
                count: 20,
                value: 0xFFFF,
            },
        )
        .app1();

    let tags = decode(&data).unwrap();
    assert_eq!(tags.get(Field::Make), Some(&Value::from("Make")));
    assert_eq!(tags.get(Field::Model), None);
}

#[test]
fn broken_sub_ifd_skipped() {
    let data = Tiff::le()
        .entry(Ifd::Primary, 0x010F, Data::Ascii("Make".into()))
        .entry(Ifd::Primary, 0x8825, Data::Longs(vec![0xFFFF]))
        .entry(Ifd::Exif, 0x9209, Data::Shorts(vec![0x00]))
        .app1();

    let tags = decode(&data).unwrap();
    assert_eq!(tags.get(Field::Make), Some(&Value::from("Make")));
    assert_eq!(
        tags.get(Field::Flash),
        Some(&Value::from("Flash did not fire"))
    );
    assert_eq!(tags.get(Field::GPSInfoIFDPointer), Some(&Value::Integer(0xFFFF)));
}

#[test]
fn unlabeled_code_dropped() {
    let data = Tiff::le()
        .entry(Ifd::Exif, 0x9207, Data::Shorts(vec![42]))
        .entry(Ifd::Exif, 0xA403, Data::Shorts(vec![1]))
        .app1();

    let tags = decode(&data).unwrap();
    assert_eq!(tags.get(Field::MeteringMode), None);
    assert_eq!(
        tags.get(Field::WhiteBalance),
        Some(&Value::from("Manual white balance"))
    );
}

#[test]
fn header_errors() {
    let valid = Tiff::le().app1();

    let mut data = valid.clone();
    data[0] = b'X';
    assert_eq!(decode(&data), Err(Error::InvalidExifHeader));
    assert_eq!(decode(b"Exi"), Err(Error::InvalidExifHeader));

    let mut data = valid.clone();
    data[6..8].copy_from_slice(b"XY");
    assert_eq!(decode(&data), Err(Error::InvalidByteOrderMark(0x5859)));

    let mut data = valid.clone();
    data[8] = 43;
    assert_eq!(decode(&data), Err(Error::InvalidTiffMagic(43)));

    let mut data = valid.clone();
    data[10] = 16;
    assert_eq!(decode(&data), Err(Error::UnsupportedIfdOffset(16)));

    assert!(matches!(decode(b"Exif\0\0II"), Err(Error::Read(_))));
}
