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

//! Fixed-size RGB canvas backed by a `tiny_skia::Pixmap`.
//!
//! Shapes are composited with the painter's algorithm: each [`Canvas::draw`]
//! overwrites whatever earlier shapes put under it. Anti-aliasing is off and
//! every color is opaque, so the premultiplied pixmap stores plain RGB plus a
//! constant 255 alpha, which [`Canvas::to_rgb`] strips.

use tiny_skia::{FillRule, Mask, Paint, Path, Pixmap, Stroke, Transform};

use crate::shape::OutlineGeometry;
use crate::{FixtureError, Result, Rgb, Shape};

/// An in-memory raster being built before encoding.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a `width` x `height` canvas filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidCanvas`] for zero or oversized dimensions.
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(FixtureError::InvalidCanvas { width, height })?;
        pixmap.fill(background.to_skia());
        Ok(Self { pixmap })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills `shape`, then strokes its outline if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidShape`] if the geometry cannot be turned
    /// into a path.
    pub fn draw(&mut self, shape: &Shape) -> Result<()> {
        let fill = shape.fill_path()?;
        self.fill(&fill, shape.fill());

        if let Some(outline) = shape.outline() {
            match shape.outline_geometry(outline.width)? {
                OutlineGeometry::Stroke { path, width } => {
                    self.stroke(&path, outline.color, width, None);
                }
                OutlineGeometry::ClippedStroke { path, width } => {
                    let clip = self.clip_mask(&fill)?;
                    self.stroke(&path, outline.color, width, Some(&clip));
                }
                OutlineGeometry::Solid => self.fill(&fill, outline.color),
            }
        }

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "drew shape fill={} outline={:?}",
            shape.fill(),
            shape.outline()
        );

        Ok(())
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        // Pixmap::pixel only checks the flat index, so x past the row end wraps
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgb(p.red(), p.green(), p.blue()))
    }

    /// Packed 8-bit RGB rows, top to bottom.
    #[must_use]
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity((self.width() * self.height() * 3) as usize);
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
        }
        rgb
    }

    fn fill(&mut self, path: &Path, color: Rgb) {
        self.pixmap.fill_path(
            path,
            &solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke(&mut self, path: &Path, color: Rgb, width: f32, clip: Option<&Mask>) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &solid_paint(color),
            &stroke,
            Transform::identity(),
            clip,
        );
    }

    /// Canvas-sized mask covering exactly the pixels `path` fills.
    fn clip_mask(&self, path: &Path) -> Result<Mask> {
        let mut mask = Mask::new(self.width(), self.height()).ok_or(FixtureError::InvalidCanvas {
            width: self.width(),
            height: self.height(),
        })?;
        mask.fill_path(path, FillRule::Winding, false, Transform::identity());
        Ok(mask)
    }
}

fn solid_paint(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, 255);
    paint.anti_alias = false;
    paint
}
