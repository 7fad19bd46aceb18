//! Reed-Solomon generator polynomial cache (spec.md §4.2).
//!
//! Grounded in `original_source/qrgen/polynomial_gen.py`'s
//! `GeneratorPolynomialCalculator`, which defines the polynomial
//! recursively (`g_1(x) = x + a^0`, `g_n(x) = g_{n-1}(x) * (x + a^{n-1})`)
//! and memoises with `@lru_cache`. The teacher's own `reed_solomon_compute_divisor`
//! computes the same polynomial directly by iterated multiplication rather
//! than caching; this module keeps the teacher's closed-form iteration (no
//! recursion, no intermediate allocations per degree) but adds the cache
//! spec.md §4.2 and §9 both call for, keyed by EC word count.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::gf::GaloisField;

/// Computes and caches Reed-Solomon generator polynomials over GF(2^8).
///
/// Coefficients are stored highest-degree-first, including the leading `1`
/// coefficient (spec.md §3: "coefficients c0..cn with c0 = 1"). Not
/// `Sync`/shareable across threads as written (`RefCell`); spec.md §5 only
/// requires read-only sharing of already-initialized tables, and a single
/// `build()` call only ever needs the cache on its own thread.
pub struct GeneratorPolynomialCache<'gf> {
    gf: &'gf GaloisField,
    cache: RefCell<HashMap<usize, Vec<u8>>>,
}

impl<'gf> GeneratorPolynomialCache<'gf> {
    pub fn new(gf: &'gf GaloisField) -> Self {
        Self {
            gf,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the generator polynomial of degree `n` (i.e. for `n` EC
    /// words), computing and caching it on first request.
    ///
    /// `n` must be at least 1; QR Code never requests degree 0.
    pub fn get(&self, n: usize) -> Vec<u8> {
        assert!(n >= 1, "generator polynomial degree must be >= 1");
        if let Some(cached) = self.cache.borrow().get(&n) {
            return cached.clone();
        }
        let computed = self.compute(n);
        self.cache.borrow_mut().insert(n, computed.clone());
        computed
    }

    fn compute(&self, n: usize) -> Vec<u8> {
        // g_1(x) = x + a^0, stored as [1, a^0].
        let mut coeffs = vec![1u8, self.gf.exp(0)];
        for degree in 2..=n {
            // Multiply the running polynomial by (x + a^(degree-1)).
            let factor = self.gf.exp(degree - 1);
            let mut product = vec![0u8; coeffs.len() + 1];
            for (i, &a) in coeffs.iter().enumerate() {
                // Term from multiplying by x: shifts every coefficient up one degree.
                product[i] ^= a;
                // Term from multiplying by the scalar a^(degree-1).
                product[i + 1] ^= self.gf.multiply(a, factor);
            }
            coeffs = product;
        }
        coeffs
    }
}
