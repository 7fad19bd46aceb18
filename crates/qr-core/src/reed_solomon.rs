//! Reed-Solomon error-correction codeword computation (spec.md §4.3).
//!
//! Grounded in the teacher's `reed_solomon_compute_remainder` (synthetic
//! division over GF(2^8)) and `original_source/qrgen/reedsolomon.py`'s
//! `ReedSolomonEncoder.encode_block`, which performs the same division but
//! mutates a `data + zero-padding` buffer in place rather than a
//! fixed-size remainder window. This module follows the teacher's
//! in-place-remainder shape (no allocation proportional to `data.len()`
//! beyond the output).

use crate::error::QrError;
use crate::gf::GaloisField;

/// Computes the `ec_count` error-correction codewords for one Reed-Solomon
/// block of `data`, using the generator polynomial `generator` (as produced
/// by [`crate::generator::GeneratorPolynomialCache`]).
///
/// Fails with [`QrError::Internal`] if `ec_count` is 0 or greater than
/// `255 - data.len()`, matching spec.md §4.3's stated domain. In practice
/// `ec_count` always comes from the block-configuration table, so this
/// should never trigger for a correctly configured build.
pub fn compute_ec_codewords(
    gf: &GaloisField,
    generator: &[u8],
    data: &[u8],
    ec_count: usize,
) -> Result<Vec<u8>, QrError> {
    if ec_count == 0 || ec_count > 255usize.saturating_sub(data.len()) {
        return Err(QrError::Internal(
            "reed-solomon ec_count out of range for block size",
        ));
    }
    debug_assert_eq!(generator.len(), ec_count + 1);

    let mut remainder = vec![0u8; ec_count];
    for &byte in data {
        let factor = byte ^ remainder[0];
        remainder.rotate_left(1);
        *remainder.last_mut().expect("ec_count >= 1") = 0;
        if factor != 0 {
            for (r, &g) in remainder.iter_mut().zip(&generator[1..]) {
                *r ^= gf.multiply(g, factor);
            }
        }
    }
    Ok(remainder)
}
