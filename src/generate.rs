//! Asset generation engine.
//!
//! Turns one [`AssetSpec`] of one platform into a file on disk: make sure the
//! parent directory exists, cover-crop the source into it, then read the
//! written file back and confirm it has exactly the requested size.
//!
//! Assets of a platform run concurrently, so the only shared filesystem work
//! here is `create_dir_all`, which tolerates a sibling creating the same
//! directory first.

use crate::imaging::{BackendError, Dimensions, ImageBackend, Quality, create_crop, plan_crop};
use crate::platforms::PlatformSpec;
use crate::types::{AssetSpec, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("could not create {}: {source}", dir.display())]
    CreateDir {
        dir: PathBuf,
        source: std::io::Error,
    },
    #[error("{} could not be created: {source}", output.display())]
    Crop {
        output: PathBuf,
        source: BackendError,
    },
    #[error(
        "{} is {}x{}, expected {}x{}",
        output.display(),
        actual.width,
        actual.height,
        expected.width,
        expected.height
    )]
    DimensionMismatch {
        output: PathBuf,
        expected: Dimensions,
        actual: Dimensions,
    },
}

impl AssetError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Io
    }
}

/// A file written by [`generate_asset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub filename: &'static str,
    pub path: PathBuf,
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Crop `source` into `asset` under the platform's output directory.
pub fn generate_asset(
    backend: &impl ImageBackend,
    source: &Path,
    platform: &PlatformSpec,
    asset: &AssetSpec,
) -> Result<GeneratedAsset, AssetError> {
    let output = platform.asset_path(asset);
    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir).map_err(|e| AssetError::CreateDir {
            dir: dir.to_path_buf(),
            source: e,
        })?;
    }

    let params = plan_crop(source, &output, asset.width, asset.height, Quality::default());
    let actual = create_crop(backend, &params).map_err(|e| AssetError::Crop {
        output: output.clone(),
        source: e,
    })?;

    let expected = Dimensions {
        width: asset.width,
        height: asset.height,
    };
    if actual != expected {
        return Err(AssetError::DimensionMismatch {
            output,
            expected,
            actual,
        });
    }

    Ok(GeneratedAsset {
        filename: asset.filename,
        path: output,
        source: source.to_path_buf(),
        width: asset.width,
        height: asset.height,
    })
}
