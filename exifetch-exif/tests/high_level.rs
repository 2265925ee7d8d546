mod utils;

use exifetch_common::orientation::Orientation;
use exifetch_exif::{Exif, Value};
use exifetch_jpeg::Jpeg;
use utils::{Data, Ifd, Tiff};

fn jpeg(app1: &[u8]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    data.extend_from_slice(&[0xFF, 0xE1]);
    data.extend_from_slice(&u16::try_from(app1.len() + 2).unwrap().to_be_bytes());
    data.extend_from_slice(app1);
    data.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02, 0xFF, 0xD9]);
    data
}

fn camera() -> Vec<u8> {
    let tiff = Tiff::be()
        .entry(Ifd::Primary, 0x010F, Data::Ascii("Canon".into()))
        .entry(
            Ifd::Primary,
            0x0110,
            Data::Ascii("Canon EOS 400D DIGITAL".into()),
        )
        .entry(Ifd::Primary, 0x0112, Data::Shorts(vec![8]))
        .entry(Ifd::Exif, 0x829A, Data::Rationals(vec![(1, 60)]))
        .entry(Ifd::Exif, 0x829D, Data::Rationals(vec![(56, 10)]))
        .entry(Ifd::Exif, 0x8827, Data::Shorts(vec![200]))
        .entry(Ifd::Exif, 0x920A, Data::Rationals(vec![(53, 1)]))
        .entry(
            Ifd::Exif,
            0x9003,
            Data::Ascii("2007:10:19 19:57:06".into()),
        )
        .entry(Ifd::Exif, 0x9291, Data::Ascii("50".into()))
        .entry(Ifd::Gps, 0x0001, Data::Ascii("S".into()))
        .entry(
            Ifd::Gps,
            0x0002,
            Data::Rationals(vec![(33, 1), (51, 1), (54, 1)]),
        )
        .entry(Ifd::Gps, 0x0003, Data::Ascii("E".into()))
        .entry(
            Ifd::Gps,
            0x0004,
            Data::Rationals(vec![(151, 1), (12, 1), (36, 1)]),
        );

    jpeg(&tiff.app1())
}

#[test]
fn canon() {
    let data = camera();
    let jpeg = Jpeg::new(&data[..]).unwrap();
    let exif = Exif::new(jpeg.exif_data().unwrap()).unwrap();

    assert_eq!(exif.make().unwrap().as_str(), "Canon");
    assert_eq!(exif.model().unwrap().as_str(), "Canon EOS 400D DIGITAL");
    assert_eq!(exif.orientation(), Orientation::Rotation90);
    assert_eq!(exif.iso_speed_rating().unwrap(), 200);
    assert_eq!(exif.f_number().unwrap(), 5.6);
    assert_eq!(exif.focal_length().unwrap(), 53.);
    assert_eq!(exif.exposure_time().unwrap(), 1. / 60.);
    assert_eq!(
        exif.date_time_original().unwrap().to_string(),
        "2007-10-19 19:57:06.500"
    );

    let location = exif.location().unwrap();
    assert_eq!((location.lat.0 * 1000.).round() / 1000., -33.865);
    assert_eq!((location.lon.0 * 1000.).round() / 1000., 151.21);
}

#[test]
fn display_string() {
    let data = camera();
    let jpeg = Jpeg::new(&data[..]).unwrap();
    let exif = Exif::new(jpeg.exif_data().unwrap()).unwrap();

    let display = exif.to_display_string();
    let lines = display.lines().collect::<Vec<_>>();

    assert!(lines.contains(&"Make : Canon"));
    assert!(lines.contains(&"Orientation : 8"));
    assert!(lines.contains(&"FNumber : 5.6"));
    assert!(lines.contains(&"GPSLatitude : [3 values]"));
    assert_eq!(lines.len(), exif.all_tags().len());
    assert_eq!(exif.get_tag("ISOSpeedRatings"), Some(&Value::Integer(200)));
}
