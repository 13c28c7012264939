//! Minimal PNG reader used by the integration tests to inspect generated
//! fixtures. Only 8-bit RGB output is expected, so anything else is reported
//! through `color_type` and left to the caller to assert on.

#![allow(dead_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub bit_depth: png::BitDepth,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// RGB triple at `(x, y)`; assumes 8-bit RGB data
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * self.width + x) * 3) as usize;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }
}

/// Decode the first frame of the PNG at `path`
pub fn decode_png(path: &Path) -> Result<DecodedImage, png::DecodingError> {
    let file = File::open(path)?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    Ok(DecodedImage {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        bit_depth: info.bit_depth,
        pixels: buf,
    })
}

/// Parse `#rrggbb` into bytes
pub fn hex(color: &str) -> [u8; 3] {
    let v = u32::from_str_radix(color.trim_start_matches('#'), 16).expect("bad hex color");
    [(v >> 16) as u8, (v >> 8) as u8, v as u8]
}
