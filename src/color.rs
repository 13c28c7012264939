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

//! RGB color literals.
//!
//! Fixture descriptors name their colors the way a drawing script would:
//! `#rrggbb` hex strings or a small set of CSS names. [`Rgb`] parses both.

use std::fmt;
use std::str::FromStr;

use crate::FixtureError;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Builds a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.0, self.1, self.2, 255)
    }
}

impl FromStr for Rgb {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(FixtureError::InvalidColor(s.to_string()));
            }
            let packed = u32::from_str_radix(hex, 16)
                .map_err(|_| FixtureError::InvalidColor(s.to_string()))?;
            return Ok(Rgb::from_u32(packed));
        }

        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Rgb::BLACK),
            "white" => Ok(Rgb::WHITE),
            _ => Err(FixtureError::InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_literals() {
        assert_eq!("#667eea".parse::<Rgb>().unwrap(), Rgb(0x66, 0x7e, 0xea));
        assert_eq!("#FF5252".parse::<Rgb>().unwrap(), Rgb(0xff, 0x52, 0x52));
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!("black".parse::<Rgb>().unwrap(), Rgb::BLACK);
        assert_eq!("White".parse::<Rgb>().unwrap(), Rgb::WHITE);
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["#12345", "#gggggg", "667eea", "#+12345", "chartreuse", ""] {
            assert!(
                matches!(bad.parse::<Rgb>(), Err(FixtureError::InvalidColor(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb(0xf0, 0x93, 0xfb).to_string(), "#f093fb");
    }
}
