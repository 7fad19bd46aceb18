use image::ImageError;
use qr_core::QrError;
use thiserror::Error;

/// Errors surfaced by `qr-png`: either a wrapped failure from one of its two
/// dependencies, or a render parameter that doesn't make sense.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QrPngError {
    #[error("image error: {0}")]
    ImageError(#[from] ImageError),

    #[error("qr error: {0}")]
    QrError(#[from] QrError),

    #[error("scale must be at least 1 pixel per module, got {0}")]
    InvalidScale(u32),

    #[error("quiet zone must be at least {min} modules wide per the Model 2 standard, got {actual}")]
    QuietZoneTooNarrow { actual: u32, min: u32 },
}
