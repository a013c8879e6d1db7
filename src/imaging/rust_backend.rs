//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary; no ImageMagick install is
//! needed to generate splash screens.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG) | `image::ImageReader` with content sniffing |
//! | Centre crop | `image::DynamicImage::crop_imm` on the source |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (level + filter from [`Quality`](super::Quality)) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{calculate_center_offset, calculate_crop_window, split_png_quality};
use super::params::{CropParams, OutputFormat};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk, trusting content over extension.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Cut the centred window with the target's aspect, then resize it to exactly
/// `width`×`height`.
///
/// Working in source coordinates keeps every intermediate buffer no larger
/// than the source or the target, whatever the source's shape.
fn cover_crop(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let source = (img.width(), img.height());
    let (win_w, win_h) = calculate_crop_window(source, (width, height));
    let (x, y) = calculate_center_offset(source, (win_w, win_h));
    img.crop_imm(x, y, win_w, win_h)
        .resize_exact(width, height, FilterType::Lanczos3)
}

/// Map a quality value onto the encoder's presets.
///
/// `image` exposes no explicit zlib level, so levels 0-2 use its fastest
/// preset rather than a stored, uncompressed stream.
fn png_settings(quality: u32) -> (CompressionType, PngFilter) {
    let (level, filter) = split_png_quality(quality);
    let compression = match level {
        0..=2 => CompressionType::Fast,
        3..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    };
    let filter = match filter {
        0 => PngFilter::NoFilter,
        1 => PngFilter::Sub,
        2 => PngFilter::Up,
        3 => PngFilter::Avg,
        4 => PngFilter::Paeth,
        _ => PngFilter::Adaptive,
    };
    (compression, filter)
}

/// Encode and save as PNG.
fn save_png(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let (compression, filter) = png_settings(quality);
    let encoder = PngEncoder::new_with_quality(writer, compression, filter);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn crop(&self, params: &CropParams) -> Result<(), BackendError> {
        if params.width == 0 || params.height == 0 {
            return Err(BackendError::ProcessingFailed(format!(
                "Invalid target size {}x{}",
                params.width, params.height
            )));
        }
        let img = load_image(&params.source)?;
        let cropped = cover_crop(&img, params.width, params.height);
        match params.format {
            OutputFormat::Png => save_png(&cropped, &params.output, params.quality.value()),
        }
    }
}
