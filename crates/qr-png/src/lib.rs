//! Rasterizes `qr-core` matrices to scaled PNG images with a quiet zone.
//!
//! Grounded in the teacher's sibling crate `q-rs-png`: same `image`-based
//! `ImageBuffer` -> nearest-neighbor `resize` -> `DynamicImage::write_to`
//! pipeline, generalized to take a finished [`qr_core::Matrix`] (rather than
//! reaching into a `QrCode`'s modules directly) and to draw the quiet zone
//! border the teacher's version never added.

mod error;

use std::io::Cursor;

use image::imageops::{resize, FilterType};
use image::{DynamicImage, ImageBuffer, ImageFormat};
use qr_core::{build, BuildOptions, EcLevel, Matrix, Payload, Version};

pub use error::QrPngError;

/// The minimum quiet zone width the Model 2 standard recommends, in modules.
pub const MIN_QUIET_ZONE: u32 = 4;

/// A reasonable default scale, in pixels per module.
pub const DEFAULT_SCALE: u32 = 8;

/// Renders `matrix` to PNG bytes: `scale` pixels per module, bordered by
/// `quiet_zone` modules of light border on every side.
///
/// Fails with [`QrPngError::InvalidScale`] if `scale` is 0, or
/// [`QrPngError::QuietZoneTooNarrow`] if `quiet_zone` is below
/// [`MIN_QUIET_ZONE`].
pub fn render_matrix(matrix: &Matrix, scale: u32, quiet_zone: u32) -> Result<Vec<u8>, QrPngError> {
    if scale == 0 {
        return Err(QrPngError::InvalidScale(scale));
    }
    if quiet_zone < MIN_QUIET_ZONE {
        return Err(QrPngError::QuietZoneTooNarrow { actual: quiet_zone, min: MIN_QUIET_ZONE });
    }

    let module_size = matrix.size() as u32;
    let bordered_size = module_size + quiet_zone * 2;

    let png = ImageBuffer::from_fn(bordered_size, bordered_size, |x, y| {
        // wrapping_sub + as i32 turns a within-border coordinate into a
        // negative row/col, which Matrix::get already treats as light.
        let row = y.wrapping_sub(quiet_zone) as i32;
        let col = x.wrapping_sub(quiet_zone) as i32;
        if matrix.get(row, col) {
            image::Luma([0u8])
        } else {
            image::Luma([255u8])
        }
    });

    let scaled_size = bordered_size * scale;
    let resized = resize(&png, scaled_size, scaled_size, FilterType::Nearest);

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(resized).write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Builds a symbol for `payload` and renders it straight to PNG bytes, using
/// [`DEFAULT_SCALE`] and [`MIN_QUIET_ZONE`].
///
/// A convenience wrapper over [`qr_core::build`] + [`render_matrix`] for
/// callers who don't need the intermediate [`qr_core::BuildOutput`].
pub fn build_png(
    payload: Payload,
    version: Version,
    ec_level: EcLevel,
    options: BuildOptions,
) -> Result<Vec<u8>, QrPngError> {
    let out = build(payload, version, ec_level, options)?;
    render_matrix(&out.matrix, DEFAULT_SCALE, MIN_QUIET_ZONE)
}
