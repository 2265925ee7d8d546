#![allow(dead_code)]

//! Builder for hand-made Exif blocks

pub use exifetch_common::exif::Ifd;
pub use exifetch_common::read::ByteOrder;

#[derive(Debug, Clone)]
pub enum Data {
    Bytes(Vec<u8>),
    Undefined(Vec<u8>),
    Ascii(String),
    Shorts(Vec<u16>),
    Longs(Vec<u32>),
    SLongs(Vec<i32>),
    Rationals(Vec<(u32, u32)>),
    SRationals(Vec<(i32, i32)>),
    /// Entry with arbitrary type, count and value or offset field
    Raw { type_: u16, count: u32, value: u32 },
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub tag: u16,
    pub data: Data,
}

impl Entry {
    pub fn new(tag: u16, data: Data) -> Self {
        Self { tag, data }
    }

    fn type_count(&self) -> (u16, u32) {
        let count = |n: usize| u32::try_from(n).unwrap();
        match &self.data {
            Data::Bytes(x) => (1, count(x.len())),
            Data::Ascii(x) => (2, count(x.len() + 1)),
            Data::Shorts(x) => (3, count(x.len())),
            Data::Longs(x) => (4, count(x.len())),
            Data::Rationals(x) => (5, count(x.len())),
            Data::Undefined(x) => (7, count(x.len())),
            Data::SLongs(x) => (9, count(x.len())),
            Data::SRationals(x) => (10, count(x.len())),
            Data::Raw { type_, count, .. } => (*type_, *count),
        }
    }

    fn encode(&self, order: ByteOrder) -> Vec<u8> {
        let mut out = Vec::new();
        match &self.data {
            Data::Bytes(x) | Data::Undefined(x) => out.extend_from_slice(x),
            Data::Ascii(x) => {
                out.extend(x.chars().map(|c| u8::try_from(c).unwrap()));
                out.push(0);
            }
            Data::Shorts(x) => x.iter().for_each(|v| out.extend(u16_bytes(*v, order))),
            Data::Longs(x) => x.iter().for_each(|v| out.extend(u32_bytes(*v, order))),
            Data::SLongs(x) => x
                .iter()
                .for_each(|v| out.extend(u32_bytes(*v as u32, order))),
            Data::Rationals(x) => x.iter().for_each(|(n, d)| {
                out.extend(u32_bytes(*n, order));
                out.extend(u32_bytes(*d, order));
            }),
            Data::SRationals(x) => x.iter().for_each(|(n, d)| {
                out.extend(u32_bytes(*n as u32, order));
                out.extend(u32_bytes(*d as u32, order));
            }),
            Data::Raw { .. } => {}
        }
        out
    }
}

pub fn u16_bytes(v: u16, order: ByteOrder) -> [u8; 2] {
    match order {
        ByteOrder::LittleEndian => v.to_le_bytes(),
        ByteOrder::BigEndian => v.to_be_bytes(),
    }
}

pub fn u32_bytes(v: u32, order: ByteOrder) -> [u8; 4] {
    match order {
        ByteOrder::LittleEndian => v.to_le_bytes(),
        ByteOrder::BigEndian => v.to_be_bytes(),
    }
}

/// TIFF block with primary, Exif and GPS directories
///
/// Pointers to the Exif and GPS directories are added when these directories
/// have entries.
#[derive(Debug, Clone)]
pub struct Tiff {
    pub order: ByteOrder,
    pub primary: Vec<Entry>,
    pub exif: Vec<Entry>,
    pub gps: Vec<Entry>,
}

impl Tiff {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            primary: Vec::new(),
            exif: Vec::new(),
            gps: Vec::new(),
        }
    }

    pub fn le() -> Self {
        Self::new(ByteOrder::LittleEndian)
    }

    pub fn be() -> Self {
        Self::new(ByteOrder::BigEndian)
    }

    pub fn with_order(&self, order: ByteOrder) -> Self {
        Self {
            order,
            ..self.clone()
        }
    }

    pub fn entry(mut self, ifd: Ifd, tag: u16, data: Data) -> Self {
        let entry = Entry::new(tag, data);
        match ifd {
            Ifd::Primary => self.primary.push(entry),
            Ifd::Exif => self.exif.push(entry),
            Ifd::Gps => self.gps.push(entry),
        }
        self
    }

    /// Data as stored in the APP1 segment, starting with the Exif identifier
    pub fn app1(&self) -> Vec<u8> {
        let mut out = b"Exif\0\0".to_vec();
        out.extend(self.tiff());
        out
    }

    pub fn tiff(&self) -> Vec<u8> {
        let order = self.order;
        let mut out = Vec::new();

        out.extend_from_slice(match order {
            ByteOrder::LittleEndian => b"II",
            ByteOrder::BigEndian => b"MM",
        });
        out.extend(u16_bytes(42, order));
        out.extend(u32_bytes(8, order));

        let mut primary = self.primary.clone();
        let n_pointers = [&self.exif, &self.gps]
            .iter()
            .filter(|x| !x.is_empty())
            .count();

        let primary_size = dir_size(primary.len() + n_pointers, &primary, order);
        let mut next = 8 + primary_size;

        let exif_offset = next;
        if !self.exif.is_empty() {
            primary.push(Entry::new(0x8769, Data::Longs(vec![exif_offset])));
            next += dir_size(self.exif.len(), &self.exif, order);
        }

        let gps_offset = next;
        if !self.gps.is_empty() {
            primary.push(Entry::new(0x8825, Data::Longs(vec![gps_offset])));
        }

        write_dir(&mut out, &primary, order);
        write_dir(&mut out, &self.exif, order);
        write_dir(&mut out, &self.gps, order);

        out
    }
}

fn padded_len(entry: &Entry, order: ByteOrder) -> u32 {
    let len = entry.encode(order).len();
    if len <= 4 {
        0
    } else {
        u32::try_from(len + len % 2).unwrap()
    }
}

fn dir_size(n_entries: usize, entries: &[Entry], order: ByteOrder) -> u32 {
    let data: u32 = entries.iter().map(|e| padded_len(e, order)).sum();
    u32::try_from(2 + 12 * n_entries + 4).unwrap() + data
}

/// Directory at the current end of `out`, followed by its out of line data
fn write_dir(out: &mut Vec<u8>, entries: &[Entry], order: ByteOrder) {
    if entries.is_empty() {
        return;
    }

    let start = u32::try_from(out.len()).unwrap();
    let mut data_offset = start + u32::try_from(2 + 12 * entries.len() + 4).unwrap();
    let mut data_area = Vec::new();

    out.extend(u16_bytes(u16::try_from(entries.len()).unwrap(), order));

    for entry in entries {
        let (type_, count) = entry.type_count();
        out.extend(u16_bytes(entry.tag, order));
        out.extend(u16_bytes(type_, order));
        out.extend(u32_bytes(count, order));

        if let Data::Raw { value, .. } = entry.data {
            out.extend(u32_bytes(value, order));
            continue;
        }

        let mut data = entry.encode(order);
        if data.len() <= 4 {
            data.resize(4, 0);
            out.extend(data);
        } else {
            if data.len() % 2 == 1 {
                data.push(0);
            }
            out.extend(u32_bytes(data_offset, order));
            data_offset += u32::try_from(data.len()).unwrap();
            data_area.extend(data);
        }
    }

    // Next IFD
    out.extend([0; 4]);
    out.extend(data_area);
}
