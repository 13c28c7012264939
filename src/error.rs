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

//! Error types for fixture generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors that can occur while rendering or writing fixtures
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Creating the output directory or writing a fixture file failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a progress line to the report sink failed
    #[error("Failed to write progress output: {0}")]
    Report(#[source] std::io::Error),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    /// A color literal could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Shape geometry cannot be rasterized (degenerate box, too few points)
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Canvas dimensions rejected by the rasterizer
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::Io {
            path: path.into(),
            source,
        }
    }
}
