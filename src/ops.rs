//! This module provides the high-level, user-facing API for arithmetic on
//! banded matrices: element-wise addition and subtraction, and the
//! band-widening multiplication.
//!
//! All operations are pure functions: they validate their preconditions
//! before allocating anything, borrow both operands immutably, and return a
//! freshly allocated result. Element-wise combination preserves the
//! bandwidth and requires both operands to share it, which the signatures
//! encode; there is no implicit bandwidth promotion. Multiplication widens
//! the band, so the tridiagonal product returns a pentadiagonal result. No
//! multiplication is defined for pentadiagonal operands: the product would
//! need nine diagonals, which no storage shape here provides.
//!
//! Every operation runs in O(n) time and space, against O(n²) for the same
//! arithmetic on dense storage.

use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

use crate::{
    algorithms::product,
    error::{BandError, BandErrorKind},
    matrix::{Pentadiagonal, Tridiagonal},
};

/// Returns the element-wise sum of two tridiagonal matrices.
///
/// # Errors
/// Fails with `DimensionMismatch` when the operands differ in dimension.
pub fn add_tridiagonal<T>(
    a: &Tridiagonal<T>,
    b: &Tridiagonal<T>,
) -> Result<Tridiagonal<T>, BandError>
where
    T: Copy + Add<Output = T>,
{
    combine_tridiagonal(a, b, |x, y| x + y)
}

/// Returns the element-wise difference `a − b` of two tridiagonal matrices.
///
/// # Errors
/// Fails with `DimensionMismatch` when the operands differ in dimension.
pub fn sub_tridiagonal<T>(
    a: &Tridiagonal<T>,
    b: &Tridiagonal<T>,
) -> Result<Tridiagonal<T>, BandError>
where
    T: Copy + Sub<Output = T>,
{
    combine_tridiagonal(a, b, |x, y| x - y)
}

/// Returns the element-wise sum of two pentadiagonal matrices.
///
/// # Errors
/// Fails with `DimensionMismatch` when the operands differ in dimension.
pub fn add_pentadiagonal<T>(
    a: &Pentadiagonal<T>,
    b: &Pentadiagonal<T>,
) -> Result<Pentadiagonal<T>, BandError>
where
    T: Copy + Add<Output = T>,
{
    combine_pentadiagonal(a, b, |x, y| x + y)
}

/// Returns the element-wise difference `a − b` of two pentadiagonal matrices.
///
/// # Errors
/// Fails with `DimensionMismatch` when the operands differ in dimension.
pub fn sub_pentadiagonal<T>(
    a: &Pentadiagonal<T>,
    b: &Pentadiagonal<T>,
) -> Result<Pentadiagonal<T>, BandError>
where
    T: Copy + Sub<Output = T>,
{
    combine_pentadiagonal(a, b, |x, y| x - y)
}

/// Returns the matrix product `a · b` of two tridiagonal matrices.
///
/// The product of two tridiagonal matrices reaches two diagonals from the
/// main diagonal, so the result is pentadiagonal; every entry further out is
/// provably zero and is not computed. The work is delegated to the rule
/// table in `algorithms::product` once the dimensions are validated.
///
/// # Errors
/// Fails with `DimensionMismatch` when the operands differ in dimension.
pub fn multiply_tridiagonal<T>(
    a: &Tridiagonal<T>,
    b: &Tridiagonal<T>,
) -> Result<Pentadiagonal<T>, BandError>
where
    T: Copy + Zero + Mul<Output = T>,
{
    require_same_dim(a.dim(), b.dim())?;
    Ok(product::tridiagonal_product(a, b))
}

/// Rejects operands of unequal dimension before any result is allocated.
fn require_same_dim(lhs: usize, rhs: usize) -> Result<(), BandError> {
    if lhs != rhs {
        return Err(BandErrorKind::DimensionMismatch { lhs, rhs }.into());
    }
    Ok(())
}

/// Combines two equal-length diagonals pointwise.
fn zip_diagonal<T, F>(lhs: &[T], rhs: &[T], op: F) -> Vec<T>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter().zip(rhs.iter()).map(|(&x, &y)| op(x, y)).collect()
}

fn combine_tridiagonal<T, F>(
    a: &Tridiagonal<T>,
    b: &Tridiagonal<T>,
    op: F,
) -> Result<Tridiagonal<T>, BandError>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    require_same_dim(a.dim(), b.dim())?;
    Tridiagonal::from_diagonals(
        zip_diagonal(a.main(), b.main(), &op),
        zip_diagonal(a.upper(), b.upper(), &op),
        zip_diagonal(a.lower(), b.lower(), &op),
    )
}

fn combine_pentadiagonal<T, F>(
    a: &Pentadiagonal<T>,
    b: &Pentadiagonal<T>,
    op: F,
) -> Result<Pentadiagonal<T>, BandError>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    require_same_dim(a.dim(), b.dim())?;
    Pentadiagonal::from_diagonals(
        zip_diagonal(a.main(), b.main(), &op),
        zip_diagonal(a.upper1(), b.upper1(), &op),
        zip_diagonal(a.upper2(), b.upper2(), &op),
        zip_diagonal(a.lower1(), b.lower1(), &op),
        zip_diagonal(a.lower2(), b.lower2(), &op),
    )
}
