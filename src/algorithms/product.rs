//! Banded multiplication kernel: tridiagonal × tridiagonal → pentadiagonal.
//!
//! ** NOTE: Use the high-level method [`crate::ops::multiply_tridiagonal`]
//! instead. This module is the unchecked kernel behind it; the caller is
//! responsible for dimension validation.
//!
//! Multiplying two band matrices widens the band: row `i` of the product
//! draws on rows `i − 1`, `i`, `i + 1` of the right operand, each of which
//! reaches one further column, so the product of two tridiagonal matrices is
//! pentadiagonal. Entries beyond the second diagonal are sums of products in
//! which one factor is always off-band, hence provably zero, and are never
//! computed.
//!
//! Rather than inlining the boundary conditionals of each diagonal into one
//! loop body, the kernel is driven by [`product_terms`], a fixed table of
//! nine [`ProductTerm`] rules. Each rule names its target diagonal, the rows
//! it applies to, and the contribution it adds there. The accumulation loop
//! is then a trivial fold over the table, and every rule can be exercised on
//! its own in the unit tests below. At the band boundary (the first and last
//! rows) the guards simply skip the contributions whose operand entries do
//! not exist; a skipped contribution is part of the sparsity pattern, not an
//! error.
//!
//! Each row receives a bounded constant number of multiply-adds, so the
//! kernel runs in O(n) time and produces an O(n) result.

use std::ops::Mul;

use num_traits::Zero;

use crate::matrix::{Pentadiagonal, Tridiagonal};

/// Target diagonal of a product contribution, named by its offset from the
/// main diagonal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ProductBand {
    Main,
    Upper1,
    Upper2,
    Lower1,
    Lower2,
}

impl ProductBand {
    /// Maps row `i` to the storage slot this band uses for the entry
    /// produced at row `i`. Lower diagonals index by column, so their slots
    /// trail the row by the offset; the guards of the rules below keep the
    /// subtraction in range.
    pub(crate) fn slot(self, i: usize) -> usize {
        match self {
            ProductBand::Main | ProductBand::Upper1 | ProductBand::Upper2 => i,
            ProductBand::Lower1 => i - 1,
            ProductBand::Lower2 => i - 2,
        }
    }
}

/// One additive contribution to the banded product.
///
/// For every row `i` of the result where `applies(i, n)` holds, the entry at
/// `band.slot(i)` of the `band` diagonal accumulates `value(a, b, i)`.
pub(crate) struct ProductTerm<T> {
    pub(crate) band: ProductBand,
    pub(crate) applies: fn(i: usize, n: usize) -> bool,
    pub(crate) value: fn(a: &Tridiagonal<T>, b: &Tridiagonal<T>, i: usize) -> T,
}

/// The complete rule table of the tridiagonal product.
///
/// Writing `A[i][j]` for the entry of `a` at row `i`, column `j`, the rules
/// enumerate every nonzero term of `R[i][i + d] = Σ_k A[i][k]·B[k][i + d]`
/// for `d` in −2..2, with `k` confined to the band of `A` (columns `i − 1`,
/// `i`, `i + 1`). The terms pairing `A[i][i ∓ 1]` with `B[i ∓ 1][i ± 1]`
/// vanish identically for tridiagonal `B` and carry no rule.
pub(crate) fn product_terms<T>() -> [ProductTerm<T>; 9]
where
    T: Copy + Mul<Output = T>,
{
    [
        // R[i][i] = A[i][i]·B[i][i] + A[i][i−1]·B[i−1][i] + A[i][i+1]·B[i+1][i]
        ProductTerm {
            band: ProductBand::Main,
            applies: |_, _| true,
            value: |a, b, i| a.main()[i] * b.main()[i],
        },
        ProductTerm {
            band: ProductBand::Main,
            applies: |i, _| i > 0,
            value: |a, b, i| a.lower()[i - 1] * b.upper()[i - 1],
        },
        ProductTerm {
            band: ProductBand::Main,
            applies: |i, n| i + 1 < n,
            value: |a, b, i| a.upper()[i] * b.lower()[i],
        },
        // R[i][i+1] = A[i][i]·B[i][i+1] + A[i][i+1]·B[i+1][i+1]
        ProductTerm {
            band: ProductBand::Upper1,
            applies: |i, n| i + 1 < n,
            value: |a, b, i| a.main()[i] * b.upper()[i],
        },
        ProductTerm {
            band: ProductBand::Upper1,
            applies: |i, n| i + 1 < n,
            value: |a, b, i| a.upper()[i] * b.main()[i + 1],
        },
        // R[i][i−1] = A[i][i]·B[i][i−1] + A[i][i−1]·B[i−1][i−1]
        ProductTerm {
            band: ProductBand::Lower1,
            applies: |i, _| i > 0,
            value: |a, b, i| a.main()[i] * b.lower()[i - 1],
        },
        ProductTerm {
            band: ProductBand::Lower1,
            applies: |i, _| i > 0,
            value: |a, b, i| a.lower()[i - 1] * b.main()[i - 1],
        },
        // R[i][i+2] = A[i][i+1]·B[i+1][i+2]
        ProductTerm {
            band: ProductBand::Upper2,
            applies: |i, n| i + 2 < n,
            value: |a, b, i| a.upper()[i] * b.upper()[i + 1],
        },
        // R[i][i−2] = A[i][i−1]·B[i−1][i−2]
        ProductTerm {
            band: ProductBand::Lower2,
            applies: |i, _| i > 1,
            value: |a, b, i| a.lower()[i - 1] * b.lower()[i - 2],
        },
    ]
}

/// Accumulates the product of two equal-dimension tridiagonal matrices into
/// freshly allocated, zero-initialized pentadiagonal storage.
///
/// The caller must have verified `a.dim() == b.dim()`.
pub(crate) fn tridiagonal_product<T>(a: &Tridiagonal<T>, b: &Tridiagonal<T>) -> Pentadiagonal<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    let n = a.dim();
    debug_assert_eq!(n, b.dim());

    // Accumulation starts from explicit zeros, never from uninitialized
    // storage; rows the guards exclude stay zero.
    let mut main = vec![T::zero(); n];
    let mut upper1 = vec![T::zero(); n - 1];
    let mut upper2 = vec![T::zero(); n.saturating_sub(2)];
    let mut lower1 = vec![T::zero(); n - 1];
    let mut lower2 = vec![T::zero(); n.saturating_sub(2)];

    let terms = product_terms::<T>();
    for i in 0..n {
        for term in &terms {
            if !(term.applies)(i, n) {
                continue;
            }
            let contribution = (term.value)(a, b, i);
            let slot = term.band.slot(i);
            let target = match term.band {
                ProductBand::Main => &mut main,
                ProductBand::Upper1 => &mut upper1,
                ProductBand::Upper2 => &mut upper2,
                ProductBand::Lower1 => &mut lower1,
                ProductBand::Lower2 => &mut lower2,
            };
            target[slot] = target[slot] + contribution;
        }
    }

    Pentadiagonal::from_parts(n, main, upper1, upper2, lower1, lower2)
}
