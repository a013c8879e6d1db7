//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the asset engine
//! needs: identify (read dimensions) and crop (cover-resize, centre-crop,
//! encode). The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests substitute a
//! recording mock.

use super::params::CropParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Backends are shared by every task of a platform's fan-out, hence `Sync`.
pub trait ImageBackend: Sync {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Scale the source to cover the target size, centre-crop, and encode.
    fn crop(&self, params: &CropParams) -> Result<(), BackendError>;
}
