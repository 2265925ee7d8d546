use exifetch_jpeg::Jpeg;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("First agument must be a file path.");
    let data = std::fs::read(path).unwrap();
    let jpeg = Jpeg::new(data).unwrap();

    for segment in jpeg.segments() {
        match segment {
            Ok(segment) => println!(
                "{:x?} at byte {} ({} bytes)",
                segment.marker(),
                segment.pos(),
                segment.data_len()
            ),
            Err(err) => println!("Error: {err}"),
        }
    }
}
