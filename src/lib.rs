//! Compact storage and O(n) arithmetic for banded square matrices.
//!
//! This crate implements the two band shapes that arise most often in
//! numerical work — tridiagonal (half-bandwidth 1) and pentadiagonal
//! (half-bandwidth 2) — together with their arithmetic: element-wise
//! addition and subtraction, and the band-widening multiplication. A band
//! matrix stores only the `2k + 1` diagonals closest to the main diagonal;
//! everything else is an implicit zero. An n×n tridiagonal matrix therefore
//! occupies 3n − 2 values instead of n², and every operation here touches
//! each stored value a bounded number of times, for O(n) time and space
//! where dense storage would need O(n²).
//!
//! ## Shapes and operations
//!
//! **[`Tridiagonal`]** and **[`Pentadiagonal`]** own their diagonal storage
//! and are immutable from the point of view of the arithmetic: operations
//! borrow operands and return freshly allocated results, so an output can
//! never alias an input. Reads through `get` are total — off-band positions
//! yield zero, never an error — while explicit writes through `set` and all
//! constructors validate their contracts up front and report violations as
//! [`BandError`] values.
//!
//! **[`ops`]** holds the arithmetic. Addition and subtraction preserve the
//! band and require operands of the same shape and dimension. Multiplication
//! widens it: row `i` of a product draws on rows `i − 1`, `i`, `i + 1` of
//! the right operand, so [`ops::multiply_tridiagonal`] returns a
//! [`Pentadiagonal`] result whose outermost entries each collapse to a
//! single product term. The per-row contribution rules live in a table that
//! the kernel folds over, one bounded set of multiply-adds per row.
//!
//! ## Example Usage
//!
//! The following example builds a 4×4 tridiagonal matrix, doubles it by
//! addition, and squares it into pentadiagonal storage.
//!
//! ```rust
//! use bandmat::{Tridiagonal, ops};
//!
//! // | 1 1 0 0 |
//! // | 1 2 1 0 |
//! // | 0 1 3 1 |
//! // | 0 0 1 4 |
//! let a = Tridiagonal::from_diagonals(
//!     vec![1.0, 2.0, 3.0, 4.0],
//!     vec![1.0, 1.0, 1.0],
//!     vec![1.0, 1.0, 1.0],
//! )?;
//!
//! let doubled = ops::add_tridiagonal(&a, &a)?;
//! assert_eq!(doubled.main(), &[2.0, 4.0, 6.0, 8.0]);
//! assert_eq!(doubled.upper(), &[2.0, 2.0, 2.0]);
//!
//! // Squaring widens the band from three diagonals to five.
//! let squared = ops::multiply_tridiagonal(&a, &a)?;
//! assert_eq!(squared.main(), &[2.0, 6.0, 11.0, 17.0]);
//! assert_eq!(squared.upper2(), &[1.0, 1.0]);
//!
//! // Off-band reads are implicit zeros, not errors.
//! assert_eq!(a.get(0, 3), 0.0);
//! # Ok::<(), bandmat::BandError>(())
//! ```

// Declare the modules that form the crate's API structure.
mod algorithms;
pub mod error;
pub mod matrix;
pub mod ops;

// Re-export the main API for convenient access.
pub use error::BandError;
pub use matrix::{BandedMatrix, Pentadiagonal, Tridiagonal};
