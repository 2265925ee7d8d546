use exifetch_exif::Exif;
use exifetch_jpeg::Jpeg;

fn main() {
    let path = std::env::args().nth(1).unwrap();

    let image_data = std::fs::read(path).unwrap();
    let image = Jpeg::new(&image_data[..]).unwrap();
    let exif = Exif::new(image.exif_data().unwrap()).unwrap();

    print!("{exif}");
}
