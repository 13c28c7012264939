//! Test Fixture Generator
//!
//! Renders the three shape fixtures and writes them as PNG files into
//! `/tmp/test-images/`, creating the directory if needed. Existing files with
//! the same names are overwritten; anything else in the directory is left alone.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixture
//! ```
//!
//! # Generated Files
//!
//! - `image1.png` - 400x400, filled circle (`#667eea`) with a 5px `#764ba2` ring
//! - `image2.png` - 400x400, ten-point star (`#f093fb`) with a 5px `#f5576c` outline
//! - `image3.png` - 400x400, heart (`#ff5252`) from two circles and a triangle

use std::process::ExitCode;

use shape_fixtures::{generate, DEFAULT_OUTPUT_DIR};

fn main() -> ExitCode {
    #[cfg(feature = "debug-logging")]
    env_logger::init();

    match generate(DEFAULT_OUTPUT_DIR) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fixture generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
