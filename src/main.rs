//! # pixfp CLI
//!
//! Command-line interface for the pixel fingerprint tool.
//!
//! ## Usage
//! ```bash
//! pixfp hash frames/*.raw --size 8 --mode grayscale
//! pixfp compare a.hash b.hash --metric coarse
//! ```

mod cli;

use pixel_fingerprint::Result;

fn main() -> Result<()> {
    pixel_fingerprint::init_tracing();
    cli::run()
}
