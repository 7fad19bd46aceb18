/// The error correction level of a QR Code symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum EcLevel {
    /// Tolerates about 7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords.
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl EcLevel {
    /// Returns the index of this level into the block-configuration table (0..=3).
    pub fn table_index(self) -> usize {
        use EcLevel::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// Returns the 2-bit code used inside the 15-bit format string (spec.md §4.11).
    ///
    /// Note this is *not* the same as `table_index`: the format string uses the
    /// standard's own L=01/M=00/Q=11/H=10 encoding.
    pub fn format_bits(self) -> u8 {
        use EcLevel::*;
        match self {
            Low => 0b01,
            Medium => 0b00,
            Quartile => 0b11,
            High => 0b10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bits_match_standard() {
        assert_eq!(EcLevel::Low.format_bits(), 0b01);
        assert_eq!(EcLevel::Medium.format_bits(), 0b00);
        assert_eq!(EcLevel::Quartile.format_bits(), 0b11);
        assert_eq!(EcLevel::High.format_bits(), 0b10);
    }

    #[test]
    fn table_indices_are_distinct() {
        let all = [EcLevel::Low, EcLevel::Medium, EcLevel::Quartile, EcLevel::High];
        for (i, a) in all.iter().enumerate() {
            assert_eq!(a.table_index(), i);
        }
    }
}
