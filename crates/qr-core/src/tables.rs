//! Alignment pattern centre table (part of spec.md §4.8).
//!
//! Grounded in `original_source/qrgen/utils.py`'s `alignment_patterns`
//! literal list, used directly as a static table rather than the teacher's
//! `get_alignment_pattern_positions` formula (spec.md §9 Design Notes calls
//! for alignment centres as static data).

use crate::version::Version;

/// Returns the ascending list of alignment-pattern centre coordinates for
/// `version`, used on both axes. Empty for version 1, which has no
/// alignment patterns.
pub fn alignment_pattern_centers(version: Version) -> &'static [i32] {
    ALIGNMENT_PATTERNS[usize::from(version.value()) - 1]
}

#[rustfmt::skip]
static ALIGNMENT_PATTERNS: [&[i32]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_1_has_no_alignment_patterns() {
        assert!(alignment_pattern_centers(Version::new(1).unwrap()).is_empty());
    }

    #[test]
    fn version_7_has_three_centers() {
        assert_eq!(alignment_pattern_centers(Version::new(7).unwrap()), &[6, 22, 38]);
    }

    #[test]
    fn version_40_has_seven_centers() {
        assert_eq!(
            alignment_pattern_centers(Version::new(40).unwrap()),
            &[6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn every_version_starts_at_module_6() {
        for v in Version::MIN.value()..=Version::MAX.value() {
            let centers = alignment_pattern_centers(Version::new(v).unwrap());
            if !centers.is_empty() {
                assert_eq!(centers[0], 6);
            }
        }
    }
}
