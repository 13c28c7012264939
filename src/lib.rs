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

//! # shape-fixtures
//!
//! Procedurally generated PNG test fixtures: a ringed circle, an outlined
//! star, and a heart built from overlapping primitives.
//!
//! Shapes are rasterized with `tiny-skia` (anti-aliasing off) onto
//! [`CANVAS_WIDTH`] x [`CANVAS_HEIGHT`] black canvases and encoded as 8-bit
//! RGB PNG with the `png` crate.
//!
//! ```no_run
//! let written = shape_fixtures::generate(shape_fixtures::DEFAULT_OUTPUT_DIR)?;
//! assert_eq!(written.len(), 3);
//! # Ok::<(), shape_fixtures::FixtureError>(())
//! ```
//!
//! Enable the `debug-logging` feature for `log` output of each render and
//! encode step.

pub mod canvas;
pub mod color;
pub mod encode;
pub mod error;
pub mod fixtures;
pub mod generate;
pub mod shape;

pub use canvas::Canvas;
pub use color::Rgb;
pub use encode::{encode_png, PNG_SIGNATURE};
pub use error::{FixtureError, Result};
pub use fixtures::{fixtures, Fixture};
pub use generate::{generate, generate_with};
pub use shape::{Outline, Shape};

/// Width of every fixture canvas in pixels.
pub const CANVAS_WIDTH: u32 = 400;

/// Height of every fixture canvas in pixels.
pub const CANVAS_HEIGHT: u32 = 400;

/// Directory the `generate_fixture` binary writes into.
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp/test-images";
