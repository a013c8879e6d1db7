//! High-level image operations.
//!
//! These functions combine parameters with backend execution.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{CropParams, OutputFormat, Quality};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Describe a cover-crop of `source` into a `width`×`height` PNG at `output`.
pub fn plan_crop(
    source: &Path,
    output: &Path,
    width: u32,
    height: u32,
    quality: Quality,
) -> CropParams {
    CropParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
        format: OutputFormat::Png,
        quality,
    }
}

/// Run a crop and report the size of the file actually written.
pub fn create_crop(backend: &impl ImageBackend, params: &CropParams) -> Result<Dimensions> {
    backend.crop(params)?;
    backend.identify(&params.output)
}
