// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! PNG serialization of a [`Canvas`].
//!
//! Output is always 8-bit truecolor (`ColorType::Rgb`) with no alpha channel,
//! one IDAT stream, default zlib compression.

use bytes::{BufMut, Bytes, BytesMut};

use crate::{Canvas, Result};

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encodes `canvas` as an 8-bit RGB PNG.
///
/// # Errors
///
/// Returns [`FixtureError::Encode`](crate::FixtureError::Encode) if the `png`
/// encoder rejects the header or image data.
pub fn encode_png(canvas: &Canvas) -> Result<Bytes> {
    let rgb = canvas.to_rgb();
    let mut writer = BytesMut::with_capacity(rgb.len() / 4).writer();

    {
        let mut encoder = png::Encoder::new(&mut writer, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);

        let mut png_writer = encoder.write_header()?;
        png_writer.write_image_data(&rgb)?;
        png_writer.finish()?;
    }

    let encoded = writer.into_inner().freeze();

    #[cfg(feature = "debug-logging")]
    log::debug!(
        "encoded {}x{} canvas: {} raw bytes -> {} png bytes",
        canvas.width(),
        canvas.height(),
        rgb.len(),
        encoded.len()
    );

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rgb, Shape};

    #[test]
    fn output_starts_with_png_signature() {
        let canvas = Canvas::new(8, 8, Rgb::BLACK).unwrap();
        let encoded = encode_png(&canvas).unwrap();
        assert_eq!(&encoded[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn header_declares_rgb8_and_dimensions() {
        let mut canvas = Canvas::new(40, 30, Rgb::BLACK).unwrap();
        canvas
            .draw(&Shape::ellipse([5, 5, 35, 25], Rgb(10, 20, 30)))
            .unwrap();
        let encoded = encode_png(&canvas).unwrap();

        let decoder = png::Decoder::new(&encoded[..]);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (40, 30));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!(&buf[..info.buffer_size()], &canvas.to_rgb()[..]);
    }
}
