//! Block configuration table (spec.md §4.6).
//!
//! Grounded in `original_source/qrgen/reedsolomon.py`'s `RS_BLOCK_TABLE`,
//! using its `(count, total, data)` triple form directly, cross-checked
//! against the teacher's `ECC_CODEWORDS_PER_BLOCK`/`NUM_ERROR_CORRECTION_BLOCKS`
//! parallel arrays (same underlying data, reshaped: this table already
//! carries `total_words` per group instead of deriving it from raw module
//! capacity minus per-block EC word count).

use crate::ec_level::EcLevel;
use crate::version::Version;

/// One group of identically shaped Reed-Solomon blocks within a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGroup {
    pub count: usize,
    pub total_words: usize,
    pub data_words: usize,
}

impl BlockGroup {
    fn ec_words(self) -> usize {
        self.total_words - self.data_words
    }
}

/// The block layout for a single `(version, ec_level)` pair: one or two
/// groups of same-shaped blocks (spec.md §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockConfig {
    first: BlockGroup,
    second: Option<BlockGroup>,
}

impl BlockConfig {
    /// Looks up the block layout for `version` at `ec_level`.
    pub fn for_version(version: Version, ec_level: EcLevel) -> Self {
        let row = TABLE[(usize::from(version.value()) - 1) * 4 + ec_level.table_index()];
        let first = BlockGroup {
            count: row[0] as usize,
            total_words: row[1] as usize,
            data_words: row[2] as usize,
        };
        let second = if row[3] == 0 {
            None
        } else {
            Some(BlockGroup {
                count: row[3] as usize,
                total_words: row[4] as usize,
                data_words: row[5] as usize,
            })
        };
        Self { first, second }
    }

    /// Iterates the one or two block groups, in table order.
    pub fn groups(&self) -> impl Iterator<Item = BlockGroup> + '_ {
        std::iter::once(self.first).chain(self.second)
    }

    /// Total number of Reed-Solomon blocks across both groups.
    pub fn num_blocks(&self) -> usize {
        self.groups().map(|g| g.count).sum()
    }

    /// Total data codewords across every block (spec.md §4.6 "total data codewords").
    pub fn total_data_words(&self) -> usize {
        self.groups().map(|g| g.count * g.data_words).sum()
    }

    /// Total codewords (data + EC) across every block.
    pub fn total_codewords(&self) -> usize {
        self.groups().map(|g| g.count * g.total_words).sum()
    }

    /// The EC word count shared by every block in this configuration. Groups
    /// differ only in `data_words`; `total_words - data_words` is constant
    /// across both groups for a valid `(version, ec_level)` pair.
    pub fn ec_words_per_block(&self) -> usize {
        self.first.ec_words()
    }

    /// Zero-padding bits appended after the interleaved data and EC
    /// codewords, derived as `capacity_bits - 8 * total_codewords` rather
    /// than stored as a separate table (spec.md §4.6, §9 resolution).
    pub fn remainder_bits(version: Version) -> u32 {
        let capacity_bits = version.raw_data_modules();
        let total_codewords = Self::for_version(version, EcLevel::Low).total_codewords();
        (capacity_bits - 8 * total_codewords) as u32
    }
}

/// `RS_BLOCK_TABLE`, indexed by `(version - 1) * 4 + ec_index` where
/// `ec_index` is `EcLevel::table_index()` (L=0, M=1, Q=2, H=3). Each row is
/// `[count1, total1, data1, count2, total2, data2]`; an all-zero second
/// triple means the version/level pair has a single block group.
#[rustfmt::skip]
static TABLE: [[u32; 6]; 160] = [
    [1, 26, 19, 0, 0, 0], // v1 L
    [1, 26, 16, 0, 0, 0], // v1 M
    [1, 26, 13, 0, 0, 0], // v1 Q
    [1, 26, 9, 0, 0, 0], // v1 H
    [1, 44, 34, 0, 0, 0], // v2 L
    [1, 44, 28, 0, 0, 0], // v2 M
    [1, 44, 22, 0, 0, 0], // v2 Q
    [1, 44, 16, 0, 0, 0], // v2 H
    [1, 70, 55, 0, 0, 0], // v3 L
    [1, 70, 44, 0, 0, 0], // v3 M
    [2, 35, 17, 0, 0, 0], // v3 Q
    [2, 35, 13, 0, 0, 0], // v3 H
    [1, 100, 80, 0, 0, 0], // v4 L
    [2, 50, 32, 0, 0, 0], // v4 M
    [2, 50, 24, 0, 0, 0], // v4 Q
    [4, 25, 9, 0, 0, 0], // v4 H
    [1, 134, 108, 0, 0, 0], // v5 L
    [2, 67, 43, 0, 0, 0], // v5 M
    [2, 33, 15, 2, 34, 16], // v5 Q
    [2, 33, 11, 2, 34, 12], // v5 H
    [2, 86, 68, 0, 0, 0], // v6 L
    [4, 43, 27, 0, 0, 0], // v6 M
    [4, 43, 19, 0, 0, 0], // v6 Q
    [4, 43, 15, 0, 0, 0], // v6 H
    [2, 98, 78, 0, 0, 0], // v7 L
    [4, 49, 31, 0, 0, 0], // v7 M
    [2, 32, 14, 4, 33, 15], // v7 Q
    [4, 39, 13, 1, 40, 14], // v7 H
    [2, 121, 97, 0, 0, 0], // v8 L
    [2, 60, 38, 2, 61, 39], // v8 M
    [4, 40, 18, 2, 41, 19], // v8 Q
    [4, 40, 14, 2, 41, 15], // v8 H
    [2, 146, 116, 0, 0, 0], // v9 L
    [3, 58, 36, 2, 59, 37], // v9 M
    [4, 36, 16, 4, 37, 17], // v9 Q
    [4, 36, 12, 4, 37, 13], // v9 H
    [2, 86, 68, 2, 87, 69], // v10 L
    [4, 69, 43, 1, 70, 44], // v10 M
    [6, 43, 19, 2, 44, 20], // v10 Q
    [6, 43, 15, 2, 44, 16], // v10 H
    [4, 101, 81, 0, 0, 0], // v11 L
    [1, 80, 50, 4, 81, 51], // v11 M
    [4, 50, 22, 4, 51, 23], // v11 Q
    [3, 36, 12, 8, 37, 13], // v11 H
    [2, 116, 92, 2, 117, 93], // v12 L
    [6, 58, 36, 2, 59, 37], // v12 M
    [4, 46, 20, 6, 47, 21], // v12 Q
    [7, 42, 14, 4, 43, 15], // v12 H
    [4, 133, 107, 0, 0, 0], // v13 L
    [8, 59, 37, 1, 60, 38], // v13 M
    [8, 44, 20, 4, 45, 21], // v13 Q
    [12, 33, 11, 4, 34, 12], // v13 H
    [3, 145, 115, 1, 146, 116], // v14 L
    [4, 64, 40, 5, 65, 41], // v14 M
    [11, 36, 16, 5, 37, 17], // v14 Q
    [11, 36, 12, 5, 37, 13], // v14 H
    [5, 109, 87, 1, 110, 88], // v15 L
    [5, 65, 41, 5, 66, 42], // v15 M
    [5, 54, 24, 7, 55, 25], // v15 Q
    [11, 36, 12, 7, 37, 13], // v15 H
    [5, 122, 98, 1, 123, 99], // v16 L
    [7, 73, 45, 3, 74, 46], // v16 M
    [15, 43, 19, 2, 44, 20], // v16 Q
    [3, 45, 15, 13, 46, 16], // v16 H
    [1, 135, 107, 5, 136, 108], // v17 L
    [10, 74, 46, 1, 75, 47], // v17 M
    [1, 50, 22, 15, 51, 23], // v17 Q
    [2, 42, 14, 17, 43, 15], // v17 H
    [5, 150, 120, 1, 151, 121], // v18 L
    [9, 69, 43, 4, 70, 44], // v18 M
    [17, 50, 22, 1, 51, 23], // v18 Q
    [2, 42, 14, 19, 43, 15], // v18 H
    [3, 141, 113, 4, 142, 114], // v19 L
    [3, 70, 44, 11, 71, 45], // v19 M
    [17, 47, 21, 4, 48, 22], // v19 Q
    [9, 39, 13, 16, 40, 14], // v19 H
    [3, 135, 107, 5, 136, 108], // v20 L
    [3, 67, 41, 13, 68, 42], // v20 M
    [15, 54, 24, 5, 55, 25], // v20 Q
    [15, 43, 15, 10, 44, 16], // v20 H
    [4, 144, 116, 4, 145, 117], // v21 L
    [17, 68, 42, 0, 0, 0], // v21 M
    [17, 50, 22, 6, 51, 23], // v21 Q
    [19, 46, 16, 6, 47, 17], // v21 H
    [2, 139, 111, 7, 140, 112], // v22 L
    [17, 74, 46, 0, 0, 0], // v22 M
    [7, 54, 24, 16, 55, 25], // v22 Q
    [34, 37, 13, 0, 0, 0], // v22 H
    [4, 151, 121, 5, 152, 122], // v23 L
    [4, 75, 47, 14, 76, 48], // v23 M
    [11, 54, 24, 14, 55, 25], // v23 Q
    [16, 45, 15, 14, 46, 16], // v23 H
    [6, 147, 117, 4, 148, 118], // v24 L
    [6, 73, 45, 14, 74, 46], // v24 M
    [11, 54, 24, 16, 55, 25], // v24 Q
    [30, 46, 16, 2, 47, 17], // v24 H
    [8, 132, 106, 4, 133, 107], // v25 L
    [8, 75, 47, 13, 76, 48], // v25 M
    [7, 54, 24, 22, 55, 25], // v25 Q
    [22, 45, 15, 13, 46, 16], // v25 H
    [10, 142, 114, 2, 143, 115], // v26 L
    [19, 74, 46, 4, 75, 47], // v26 M
    [28, 50, 22, 6, 51, 23], // v26 Q
    [33, 46, 16, 4, 47, 17], // v26 H
    [8, 152, 122, 4, 153, 123], // v27 L
    [22, 73, 45, 3, 74, 46], // v27 M
    [8, 53, 23, 26, 54, 24], // v27 Q
    [12, 45, 15, 28, 46, 16], // v27 H
    [3, 147, 117, 10, 148, 118], // v28 L
    [3, 73, 45, 23, 74, 46], // v28 M
    [4, 54, 24, 31, 55, 25], // v28 Q
    [11, 45, 15, 31, 46, 16], // v28 H
    [7, 146, 116, 7, 147, 117], // v29 L
    [21, 73, 45, 7, 74, 46], // v29 M
    [1, 53, 23, 37, 54, 24], // v29 Q
    [19, 45, 15, 26, 46, 16], // v29 H
    [5, 145, 115, 10, 146, 116], // v30 L
    [19, 75, 47, 10, 76, 48], // v30 M
    [15, 54, 24, 25, 55, 25], // v30 Q
    [23, 45, 15, 25, 46, 16], // v30 H
    [13, 145, 115, 3, 146, 116], // v31 L
    [2, 74, 46, 29, 75, 47], // v31 M
    [42, 54, 24, 1, 55, 25], // v31 Q
    [23, 45, 15, 28, 46, 16], // v31 H
    [17, 145, 115, 0, 0, 0], // v32 L
    [10, 74, 46, 23, 75, 47], // v32 M
    [10, 54, 24, 35, 55, 25], // v32 Q
    [19, 45, 15, 35, 46, 16], // v32 H
    [17, 145, 115, 1, 146, 116], // v33 L
    [14, 74, 46, 21, 75, 47], // v33 M
    [29, 54, 24, 19, 55, 25], // v33 Q
    [11, 45, 15, 46, 46, 16], // v33 H
    [13, 145, 115, 6, 146, 116], // v34 L
    [14, 74, 46, 23, 75, 47], // v34 M
    [44, 54, 24, 7, 55, 25], // v34 Q
    [59, 46, 16, 1, 47, 17], // v34 H
    [12, 151, 121, 7, 152, 122], // v35 L
    [12, 75, 47, 26, 76, 48], // v35 M
    [39, 54, 24, 14, 55, 25], // v35 Q
    [22, 45, 15, 41, 46, 16], // v35 H
    [6, 151, 121, 14, 152, 122], // v36 L
    [6, 75, 47, 34, 76, 48], // v36 M
    [46, 54, 24, 10, 55, 25], // v36 Q
    [2, 45, 15, 64, 46, 16], // v36 H
    [17, 152, 122, 4, 153, 123], // v37 L
    [29, 74, 46, 14, 75, 47], // v37 M
    [49, 54, 24, 10, 55, 25], // v37 Q
    [24, 45, 15, 46, 46, 16], // v37 H
    [4, 152, 122, 18, 153, 123], // v38 L
    [13, 74, 46, 32, 75, 47], // v38 M
    [48, 54, 24, 14, 55, 25], // v38 Q
    [42, 45, 15, 32, 46, 16], // v38 H
    [20, 147, 117, 4, 148, 118], // v39 L
    [40, 75, 47, 7, 76, 48], // v39 M
    [43, 54, 24, 22, 55, 25], // v39 Q
    [10, 45, 15, 67, 46, 16], // v39 H
    [19, 148, 118, 6, 149, 119], // v40 L
    [18, 75, 47, 31, 76, 48], // v40 M
    [34, 54, 24, 34, 55, 25], // v40 Q
    [20, 45, 15, 61, 46, 16], // v40 H
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_version_and_level_total_matches_raw_capacity() {
        for v in Version::MIN.value()..=Version::MAX.value() {
            let version = Version::new(v).unwrap();
            let rawcw = version.raw_data_modules() / 8;
            for ec in [EcLevel::Low, EcLevel::Medium, EcLevel::Quartile, EcLevel::High] {
                let config = BlockConfig::for_version(version, ec);
                assert_eq!(config.total_codewords(), rawcw, "v{v} {ec:?}");
            }
        }
    }

    #[test]
    fn v1_low_is_a_single_block() {
        let config = BlockConfig::for_version(Version::new(1).unwrap(), EcLevel::Low);
        assert_eq!(config.num_blocks(), 1);
        assert_eq!(config.total_data_words(), 19);
        assert_eq!(config.ec_words_per_block(), 7);
    }

    #[test]
    fn v5_quartile_has_two_groups() {
        let config = BlockConfig::for_version(Version::new(5).unwrap(), EcLevel::Quartile);
        let groups: Vec<_> = config.groups().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], BlockGroup { count: 2, total_words: 33, data_words: 15 });
        assert_eq!(groups[1], BlockGroup { count: 2, total_words: 34, data_words: 16 });
        assert_eq!(config.total_data_words(), 62);
        assert_eq!(config.total_codewords(), 134);
    }

    #[test]
    fn remainder_bits_match_known_values() {
        assert_eq!(BlockConfig::remainder_bits(Version::new(1).unwrap()), 0);
        assert_eq!(BlockConfig::remainder_bits(Version::new(2).unwrap()), 7);
        assert_eq!(BlockConfig::remainder_bits(Version::new(5).unwrap()), 7);
        assert_eq!(BlockConfig::remainder_bits(Version::new(14).unwrap()), 3);
        assert_eq!(BlockConfig::remainder_bits(Version::new(21).unwrap()), 4);
        assert_eq!(BlockConfig::remainder_bits(Version::new(40).unwrap()), 0);
    }
}
