use crate::{EcLevel, SegmentMode};

/// Errors surfaced by the symbol-construction pipeline.
///
/// Ways to handle these:
///
/// - `InvalidVersion` / `InvalidEcLevel`: caller passed a value out of range;
///   fix the call site.
/// - `PayloadTooLarge`: pick a larger version, a lower error-correction
///   level, or shorten/re-segment the payload.
/// - `UnsupportedCharacter`: pick a mode whose alphabet covers the payload
///   (byte mode accepts anything), or let `Mode::Auto` choose one.
/// - `Internal`: a construction invariant broke. This indicates a bug in
///   this crate, not a malformed request; it is never expected to surface
///   from a correctly implemented build.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum QrError {
    #[error("invalid version number: {0} (must be 1..=40)")]
    InvalidVersion(u8),

    #[error("invalid error correction level")]
    InvalidEcLevel,

    #[error(
        "payload needs {needed_bits} bits but version {version} at {ec_level:?} only has {capacity_bits} bits of capacity"
    )]
    PayloadTooLarge {
        version: u8,
        ec_level: EcLevel,
        capacity_bits: usize,
        needed_bits: usize,
    },

    #[error("character {ch:?} cannot be encoded in {mode:?} mode")]
    UnsupportedCharacter { mode: SegmentMode, ch: char },

    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}
