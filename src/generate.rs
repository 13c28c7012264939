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

//! Sequential fixture generation driver.
//!
//! For each fixture in [`fixtures()`](crate::fixtures()) order: render, encode,
//! overwrite `<dir>/<file_name>`, report. The first failure aborts the run;
//! files already written are left in place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{encode_png, fixtures, FixtureError, Result};

/// Generates all fixtures into `dir`, reporting progress on stdout.
///
/// # Errors
///
/// Returns the first directory, render, encode, or write error encountered.
pub fn generate(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate_with(dir, &mut out)
}

/// Like [`generate`], but writes progress lines to `out`.
///
/// # Errors
///
/// Returns the first directory, render, encode, or write error encountered.
pub fn generate_with<W: Write>(dir: impl AsRef<Path>, out: &mut W) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| FixtureError::io(dir, e))?;

    let mut written = Vec::new();
    for fixture in fixtures() {
        let path = dir.join(fixture.file_name);

        #[cfg(feature = "debug-logging")]
        log::info!(
            "rendering {} ({} shapes)",
            fixture.file_name,
            fixture.shapes.len()
        );

        let canvas = fixture.render()?;
        let encoded = encode_png(&canvas)?;
        fs::write(&path, &encoded).map_err(|e| FixtureError::io(&path, e))?;

        writeln!(out, "Created {}", fixture.file_name).map_err(FixtureError::Report)?;
        written.push(path);
    }

    writeln!(out, "\nTest images created in {}/", dir.display()).map_err(FixtureError::Report)?;

    Ok(written)
}
