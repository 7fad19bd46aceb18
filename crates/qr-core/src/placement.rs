//! Serpentine data-bit placement (spec.md §4.9).
//!
//! Grounded in the teacher's `draw_codewords`, translated to this crate's
//! `(row, col)` coordinate convention. Cross-checked against
//! `original_source/qrgen/main.py`'s `place_data`, which walks the same
//! column pairs but skips column 6 rather than remapping it to 5 first;
//! both reach the same column set since column 6 is always a timing
//! column and therefore already reserved.

use crate::cell::Grid;
use crate::error::QrError;

/// Walks the grid's column pairs from right to left, skipping column 6,
/// alternating scan direction each pair, and writes one bit from `bits`
/// into every still-unset cell it visits. `bits` must have exactly as many
/// entries as there are unset cells in `grid` (spec.md §4.7 step 5
/// guarantees this via remainder-bit padding).
pub fn place_data(grid: &mut Grid, bits: &[bool]) -> Result<(), QrError> {
    let size = grid.size() as i32;
    let mut i = 0usize;
    let mut right = size - 1;
    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        for vert in 0..size {
            for j in 0..2 {
                let col = right - j;
                let upward = (right + 1) & 2 == 0;
                let row = if upward { size - 1 - vert } else { vert };
                if grid.get(row, col).is_unset() && i < bits.len() {
                    grid.set_data(row, col, bits[i])?;
                    i += 1;
                }
            }
        }
        right -= 2;
    }
    Ok(())
}
