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

//! Shape descriptors stamped onto a [`Canvas`](crate::Canvas).
//!
//! Two primitives cover every fixture:
//! - **Ellipse** inscribed in an axis-aligned bounding box `[x0, y0, x1, y1]`
//! - **Polygon** over an ordered list of integer points, implicitly closed
//!
//! Both carry a fill color and an optional outline. Outlines never spill past
//! the fill: ellipse rings are inset into the bounding box, polygon outlines
//! are clipped to the polygon's interior.

use tiny_skia::{Path, PathBuilder, Rect};

use crate::{FixtureError, Result, Rgb};

/// Outline drawn over a shape's fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub color: Rgb,
    pub width: u32,
}

/// A literal shape descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Ellipse {
        bounds: [i32; 4],
        fill: Rgb,
        outline: Option<Outline>,
    },
    Polygon {
        points: Vec<(i32, i32)>,
        fill: Rgb,
        outline: Option<Outline>,
    },
}

impl Shape {
    /// Ellipse inscribed in `[x0, y0, x1, y1]`.
    #[must_use]
    pub fn ellipse(bounds: [i32; 4], fill: Rgb) -> Self {
        Shape::Ellipse {
            bounds,
            fill,
            outline: None,
        }
    }

    /// Closed polygon through `points` in order.
    #[must_use]
    pub fn polygon(points: &[(i32, i32)], fill: Rgb) -> Self {
        Shape::Polygon {
            points: points.to_vec(),
            fill,
            outline: None,
        }
    }

    /// Adds an outline of `width` pixels. A zero width is treated as one pixel.
    #[must_use]
    pub fn with_outline(mut self, color: Rgb, width: u32) -> Self {
        let outline = Some(Outline {
            color,
            width: width.max(1),
        });
        match &mut self {
            Shape::Ellipse { outline: o, .. } | Shape::Polygon { outline: o, .. } => *o = outline,
        }
        self
    }

    #[must_use]
    pub fn fill(&self) -> Rgb {
        match self {
            Shape::Ellipse { fill, .. } | Shape::Polygon { fill, .. } => *fill,
        }
    }

    #[must_use]
    pub fn outline(&self) -> Option<Outline> {
        match self {
            Shape::Ellipse { outline, .. } | Shape::Polygon { outline, .. } => *outline,
        }
    }

    /// Path covering the filled interior.
    pub(crate) fn fill_path(&self) -> Result<Path> {
        match self {
            Shape::Ellipse { bounds, .. } => oval_path(bounds_rect(*bounds)?),
            Shape::Polygon { points, .. } => polygon_path(points),
        }
    }

    /// How the outline of `width` pixels is laid down over the fill.
    #[allow(clippy::cast_precision_loss)] // Outline widths are a few pixels
    pub(crate) fn outline_geometry(&self, width: u32) -> Result<OutlineGeometry> {
        match self {
            Shape::Ellipse { bounds, .. } => {
                let rect = bounds_rect(*bounds)?;
                let inset = width as f32 / 2.0;
                match Rect::from_ltrb(
                    rect.left() + inset,
                    rect.top() + inset,
                    rect.right() - inset,
                    rect.bottom() - inset,
                ) {
                    Some(inner) if inner.width() > 0.0 && inner.height() > 0.0 => Ok(
                        OutlineGeometry::Stroke {
                            path: oval_path(inner)?,
                            width: width as f32,
                        },
                    ),
                    _ => Ok(OutlineGeometry::Solid),
                }
            }
            // Double width, then clip to the fill: only the inner half survives
            Shape::Polygon { points, .. } => Ok(OutlineGeometry::ClippedStroke {
                path: polygon_path(points)?,
                width: width.saturating_mul(2).saturating_sub(1).max(1) as f32,
            }),
        }
    }
}

/// Outline rendering plan produced by [`Shape::outline_geometry`].
pub(crate) enum OutlineGeometry {
    /// Stroke `path`; the stroke already lies inside the shape.
    Stroke { path: Path, width: f32 },
    /// Stroke `path`, keeping only pixels covered by the shape's fill.
    ClippedStroke { path: Path, width: f32 },
    /// Outline is at least as thick as the shape; repaint the whole fill.
    Solid,
}

#[allow(clippy::cast_precision_loss)] // Fixture coordinates are small integers
fn bounds_rect([x0, y0, x1, y1]: [i32; 4]) -> Result<Rect> {
    if x1 <= x0 || y1 <= y0 {
        return Err(FixtureError::InvalidShape(format!(
            "degenerate ellipse bounds [{x0}, {y0}, {x1}, {y1}]"
        )));
    }
    Rect::from_ltrb(x0 as f32, y0 as f32, x1 as f32, y1 as f32).ok_or_else(|| {
        FixtureError::InvalidShape(format!("ellipse bounds [{x0}, {y0}, {x1}, {y1}] overflow"))
    })
}

fn oval_path(rect: Rect) -> Result<Path> {
    PathBuilder::from_oval(rect)
        .ok_or_else(|| FixtureError::InvalidShape(format!("cannot build oval in {rect:?}")))
}

#[allow(clippy::cast_precision_loss)]
fn polygon_path(points: &[(i32, i32)]) -> Result<Path> {
    let [(x0, y0), rest @ ..] = points else {
        return Err(FixtureError::InvalidShape("polygon has no points".to_string()));
    };
    if rest.len() < 2 {
        return Err(FixtureError::InvalidShape(format!(
            "polygon needs at least 3 points, got {}",
            points.len()
        )));
    }

    let mut pb = PathBuilder::new();
    pb.move_to(*x0 as f32, *y0 as f32);
    for &(x, y) in rest {
        pb.line_to(x as f32, y as f32);
    }
    pb.close();
    pb.finish()
        .ok_or_else(|| FixtureError::InvalidShape(format!("polygon {points:?} has no area")))
}
