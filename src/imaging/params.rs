//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the asset engine ([`operations`](super::operations)),
//! which decides which file to write at which size, and the
//! [`backend`](super::backend), which does the pixel work. Swapping the
//! backend (e.g. for a recording mock) never touches operation logic.
//!
//! ## Types
//!
//! - [`Quality`]: ImageMagick-style quality value (1-100).
//! - [`OutputFormat`]: Encoded container for the written file.
//! - [`CropParams`]: full specification for a cover-and-crop: source, output, exact size, format, quality.

use std::path::PathBuf;

/// Quality setting passed to the encoder (1-100).
///
/// For PNG the value is read the way ImageMagick reads it: the tens digit is
/// the zlib level, the ones digit the row filter. The level is approximated by
/// the encoder's nearest preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    /// Splash screens are written with quality 1: fastest compression, Sub filter.
    fn default() -> Self {
        Self(1)
    }
}

/// Encoded format of generated assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
}

/// Parameters for a cover-and-crop operation.
///
/// The centred window of the source with the target's aspect is cut out, then
/// resized to exactly `width`×`height`.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    pub quality: Quality,
}
