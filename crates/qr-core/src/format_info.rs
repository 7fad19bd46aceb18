//! Format and version information bit computation (spec.md §4.11).
//!
//! Grounded in the teacher's `draw_format_bits`/`draw_version` BCH
//! computation (the `(rem << 1) ^ ((rem >> k) * poly)` reduction loop),
//! split out from drawing so the bit values can be unit-tested against
//! `original_source/qrgen/metadata.py`'s `QRFormatInfo.FORMAT_INFO` /
//! `QRVersionInfo.VERSION_INFO` literal tables without building a grid.

use crate::ec_level::EcLevel;
use crate::mask::MaskPattern;
use crate::version::Version;

/// Computes the 15-bit format information value for `ec_level` and `mask`:
/// 5 data bits (2-bit EC level code + 3-bit mask index) plus a 10-bit BCH
/// error-correction code, XORed with the fixed mask `0x5412`.
pub fn format_bits(ec_level: EcLevel, mask: MaskPattern) -> u32 {
    let data = u32::from(ec_level.format_bits() << 3 | mask.value());
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * 0x537);
    }
    let bits = (data << 10 | rem) ^ 0x5412;
    debug_assert_eq!(bits >> 15, 0);
    bits
}

/// Computes the 18-bit version information value for `version`: the 6-bit
/// version number plus a 12-bit BCH error-correction code. Only meaningful
/// for `version >= 7`; versions below that carry no version information
/// block in the symbol.
pub fn version_bits(version: Version) -> u32 {
    let data = u32::from(version.value());
    let mut rem = data;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
    }
    let bits = data << 12 | rem;
    debug_assert_eq!(bits >> 18, 0);
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bits_match_golden_values() {
        assert_eq!(format_bits(EcLevel::Low, MaskPattern::new(0)), 0b111011111000100);
        assert_eq!(format_bits(EcLevel::Low, MaskPattern::new(7)), 0b110100101110110);
        assert_eq!(format_bits(EcLevel::Medium, MaskPattern::new(0)), 0b101010000010010);
        assert_eq!(format_bits(EcLevel::Quartile, MaskPattern::new(3)), 0b011101000000110);
        assert_eq!(format_bits(EcLevel::High, MaskPattern::new(7)), 0b000100000111011);
    }

    #[test]
    fn version_bits_match_golden_values() {
        assert_eq!(version_bits(Version::new(7).unwrap()), 0b000111110010010100);
        assert_eq!(version_bits(Version::new(21).unwrap()), 0b010101011010000011);
        assert_eq!(version_bits(Version::new(40).unwrap()), 0b101000110001101001);
    }
}
