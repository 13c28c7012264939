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

//! The three literal fixture descriptors.
//!
//! | file         | content                                                |
//! |--------------|--------------------------------------------------------|
//! | `image1.png` | filled circle with a 5px ring                          |
//! | `image2.png` | ten-point star polygon with a 5px outline              |
//! | `image3.png` | heart: two circles overlaid by a downward triangle     |
//!
//! All are 400x400 on black. Coordinates are canvas pixels.

use crate::{Canvas, Result, Rgb, Shape, CANVAS_HEIGHT, CANVAS_WIDTH};

const CIRCLE_FILL: Rgb = Rgb::from_u32(0x667eea);
const CIRCLE_OUTLINE: Rgb = Rgb::from_u32(0x764ba2);
const STAR_FILL: Rgb = Rgb::from_u32(0xf093fb);
const STAR_OUTLINE: Rgb = Rgb::from_u32(0xf5576c);
const HEART_FILL: Rgb = Rgb::from_u32(0xff5252);

const OUTLINE_WIDTH: u32 = 5;

/// Alternating outer tips and inner corners, clockwise from the top.
const STAR_POINTS: [(i32, i32); 10] = [
    (200, 50),
    (220, 150),
    (300, 150),
    (240, 210),
    (270, 300),
    (200, 250),
    (130, 300),
    (160, 210),
    (100, 150),
    (180, 150),
];

/// One generated test image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    /// Drawn in order; later shapes overlay earlier ones.
    pub shapes: Vec<Shape>,
}

impl Fixture {
    /// Draws every shape onto a fresh canvas.
    ///
    /// # Errors
    ///
    /// Propagates canvas allocation and shape geometry errors.
    pub fn render(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height, self.background)?;
        for shape in &self.shapes {
            canvas.draw(shape)?;
        }
        Ok(canvas)
    }
}

/// Fixtures in generation order.
#[must_use]
pub fn fixtures() -> Vec<Fixture> {
    vec![circle(), star(), heart()]
}

fn fixture(file_name: &'static str, shapes: Vec<Shape>) -> Fixture {
    Fixture {
        file_name,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        background: Rgb::BLACK,
        shapes,
    }
}

fn circle() -> Fixture {
    fixture(
        "image1.png",
        vec![Shape::ellipse([100, 100, 300, 300], CIRCLE_FILL)
            .with_outline(CIRCLE_OUTLINE, OUTLINE_WIDTH)],
    )
}

fn star() -> Fixture {
    fixture(
        "image2.png",
        vec![Shape::polygon(&STAR_POINTS, STAR_FILL).with_outline(STAR_OUTLINE, OUTLINE_WIDTH)],
    )
}

fn heart() -> Fixture {
    fixture(
        "image3.png",
        vec![
            Shape::ellipse([80, 100, 180, 200], HEART_FILL),
            Shape::ellipse([220, 100, 320, 200], HEART_FILL),
            Shape::polygon(&[(80, 150), (320, 150), (200, 330)], HEART_FILL),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_names_are_in_order() {
        let names: Vec<_> = fixtures().iter().map(|f| f.file_name).collect();
        assert_eq!(names, ["image1.png", "image2.png", "image3.png"]);
    }

    #[test]
    fn fill_colors_match_literals() {
        assert_eq!(CIRCLE_FILL, "#667eea".parse().unwrap());
        assert_eq!(STAR_OUTLINE, "#f5576c".parse().unwrap());
        assert_eq!(HEART_FILL, "#ff5252".parse().unwrap());
    }

    #[test]
    fn circle_has_fill_and_ring() {
        let canvas = circle().render().unwrap();
        assert_eq!(canvas.pixel(200, 200), Some(CIRCLE_FILL));
        assert_eq!(canvas.pixel(102, 200), Some(CIRCLE_OUTLINE));
        assert_eq!(canvas.pixel(200, 297), Some(CIRCLE_OUTLINE));
        assert_eq!(canvas.pixel(110, 110), Some(Rgb::BLACK));
    }

    #[test]
    fn star_center_and_notches() {
        let canvas = star().render().unwrap();
        assert_eq!(canvas.pixel(200, 200), Some(STAR_FILL));
        // Between the two lower legs
        assert_eq!(canvas.pixel(200, 290), Some(Rgb::BLACK));
        // Outline runs along the inside of the top-left horizontal edge
        assert_eq!(canvas.pixel(130, 150), Some(STAR_OUTLINE));
        assert_eq!(canvas.pixel(130, 153), Some(STAR_OUTLINE));
        assert_eq!(canvas.pixel(130, 147), Some(Rgb::BLACK));
    }

    #[test]
    fn heart_lobes_overlap_triangle() {
        let canvas = heart().render().unwrap();
        assert_eq!(canvas.pixel(130, 170), Some(HEART_FILL));
        assert_eq!(canvas.pixel(270, 170), Some(HEART_FILL));
        assert_eq!(canvas.pixel(200, 300), Some(HEART_FILL));
        // Notch between the lobes, above the triangle
        assert_eq!(canvas.pixel(200, 120), Some(Rgb::BLACK));
    }
}
