//! Mask penalty scoring (spec.md §4.10).
//!
//! Grounded in the teacher's `get_penalty_score` and `finder_penalty.rs`'s
//! `FinderPenalty`, translated to this crate's `(row, col)` convention and
//! to reading from a [`Grid`] instead of a flat `Vec<bool>`. Cross-checked
//! against `original_source/qrgen/mask_patterns.py`'s `condition_1..4`,
//! which score the same four criteria (run length, 2x2 blocks, finder-like
//! run patterns, dark/light balance) with equivalent weights.

use crate::cell::Grid;
use crate::finder_penalty::FinderPenalty;
use crate::{PENALTY_N1, PENALTY_N2, PENALTY_N3, PENALTY_N4};

/// Scores `grid` per spec.md §4.10's four penalty conditions; lower is
/// better. `grid` must already have a mask applied and every cell set
/// (function or data), i.e. this is called once per candidate mask during
/// mask selection.
pub fn penalty_score(grid: &Grid) -> i32 {
    let size = grid.size() as i32;
    let mut result = 0i32;

    for row in 0..size {
        let mut run_color = false;
        let mut run_len = 0i32;
        let mut history = FinderPenalty::new(size);
        for col in 0..size {
            let v = grid.get(row, col).value();
            if v == run_color {
                run_len += 1;
                if run_len == 5 {
                    result += PENALTY_N1;
                } else if run_len > 5 {
                    result += 1;
                }
            } else {
                history.add_history(run_len);
                if !run_color {
                    result += history.count_patterns() * PENALTY_N3;
                }
                run_color = v;
                run_len = 1;
            }
        }
        result += history.terminate_and_count(run_color, run_len) * PENALTY_N3;
    }

    for col in 0..size {
        let mut run_color = false;
        let mut run_len = 0i32;
        let mut history = FinderPenalty::new(size);
        for row in 0..size {
            let v = grid.get(row, col).value();
            if v == run_color {
                run_len += 1;
                if run_len == 5 {
                    result += PENALTY_N1;
                } else if run_len > 5 {
                    result += 1;
                }
            } else {
                history.add_history(run_len);
                if !run_color {
                    result += history.count_patterns() * PENALTY_N3;
                }
                run_color = v;
                run_len = 1;
            }
        }
        result += history.terminate_and_count(run_color, run_len) * PENALTY_N3;
    }

    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let color = grid.get(row, col).value();
            if color == grid.get(row + 1, col).value()
                && color == grid.get(row, col + 1).value()
                && color == grid.get(row + 1, col + 1).value()
            {
                result += PENALTY_N2;
            }
        }
    }

    let dark: i32 = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter(|&(row, col)| grid.get(row, col).value())
        .count() as i32;
    let total = size * size;
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    result += k * PENALTY_N4;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec_level::EcLevel;
    use crate::layout::draw_function_patterns;
    use crate::version::Version;

    #[test]
    fn all_dark_symbol_is_heavily_penalized() {
        let version = Version::new(1).unwrap();
        let mut grid = Grid::new(version.size() as usize);
        draw_function_patterns(&mut grid, version, EcLevel::Low).unwrap();
        for row in 0..grid.size() as i32 {
            for col in 0..grid.size() as i32 {
                if grid.get(row, col).is_unset() {
                    grid.set_data(row, col, true).unwrap();
                }
            }
        }
        // An all-dark symbol racks up run-length and balance penalties.
        assert!(penalty_score(&grid) > 0);
    }

    #[test]
    fn checkerboard_data_scores_lower_than_solid() {
        let version = Version::new(1).unwrap();

        let mut solid = Grid::new(version.size() as usize);
        draw_function_patterns(&mut solid, version, EcLevel::Low).unwrap();
        for row in 0..solid.size() as i32 {
            for col in 0..solid.size() as i32 {
                if solid.get(row, col).is_unset() {
                    solid.set_data(row, col, true).unwrap();
                }
            }
        }

        let mut checker = Grid::new(version.size() as usize);
        draw_function_patterns(&mut checker, version, EcLevel::Low).unwrap();
        for row in 0..checker.size() as i32 {
            for col in 0..checker.size() as i32 {
                if checker.get(row, col).is_unset() {
                    checker.set_data(row, col, (row + col) % 2 == 0).unwrap();
                }
            }
        }

        assert!(penalty_score(&checker) < penalty_score(&solid));
    }
}
