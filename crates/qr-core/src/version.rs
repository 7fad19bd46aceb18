use crate::error::QrError;

/// A QR Code version number, in the range 1 to 40 (inclusive).
///
/// The version determines the symbol's side length: `size = 17 + 4 * version`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Version(u8);

impl Version {
    /// The smallest version defined by the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The largest version defined by the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version from a raw number, validating that it lies in `1..=40`.
    pub fn new(value: u8) -> Result<Self, QrError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QrError::InvalidVersion(value))
        }
    }

    /// Returns the raw version number, in `1..=40`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the side length of the symbol, in modules (`21..=177`).
    pub fn size(self) -> i32 {
        17 + 4 * i32::from(self.0)
    }

    /// Returns the next higher version, or `None` if already at `Version::MAX`.
    pub fn next(self) -> Option<Self> {
        if self == Self::MAX {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// The number of bit positions available for data, EC codewords, and
    /// remainder bits once every function pattern is excluded (spec.md §4.8
    /// capacity note). Independent of error-correction level. Range
    /// `[208, 29648]`.
    pub fn raw_data_modules(self) -> usize {
        let ver = usize::from(self.0);
        let mut result: usize = (16 * ver + 128) * ver + 64;
        if ver >= 2 {
            let numalign: usize = ver / 7 + 2;
            result -= (25 * numalign - 10) * numalign - 55;
            if ver >= 7 {
                result -= 36;
            }
        }
        debug_assert!((208..=29648).contains(&result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert!(Version::new(0).is_err());
        assert!(Version::new(41).is_err());
    }

    #[test]
    fn size_matches_formula() {
        assert_eq!(Version::new(1).unwrap().size(), 21);
        assert_eq!(Version::new(40).unwrap().size(), 177);
    }

    #[test]
    fn next_stops_at_max() {
        assert_eq!(Version::MAX.next(), None);
        assert_eq!(Version::new(39).unwrap().next(), Some(Version::MAX));
    }

    #[test]
    fn raw_data_modules_matches_known_values() {
        assert_eq!(Version::new(1).unwrap().raw_data_modules(), 208);
        assert_eq!(Version::new(40).unwrap().raw_data_modules(), 29648);
    }
}
