//! This module defines the custom error types for the library.
//!
//! This module centralizes all failure conditions of the banded-matrix
//! operations into a single enum: [`BandErrorKind`], wrapped by the public
//! [`BandError`] type.
//!
//! Using the [`thiserror`] crate allows us to create idiomatic error types with
//! minimal boilerplate. Every condition here is a programmer-contract
//! violation detected before any allocation or mutation takes place; none of
//! them is transient, and there is nothing to retry.
use thiserror::Error;

/// Represents all possible errors that can occur while constructing or
/// combining banded matrices.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct BandError(#[from] BandErrorKind);

/// Private enum containing the distinct kinds of errors.
/// This separation allows for a clean `Display` implementation via
/// [`thiserror`] while keeping the set of variants free to evolve.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum BandErrorKind {
    /// Occurs when a constructor is given a zero dimension, or diagonal data
    /// whose length does not match the count required by its offset.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Indicates that the two operands of a binary operation differ in
    /// dimension.
    #[error("Dimension mismatch: left operand has dimension {lhs}, right operand has dimension {rhs}.")]
    DimensionMismatch { lhs: usize, rhs: usize },

    /// Occurs when an explicit write targets a position with no backing
    /// storage at the matrix's bandwidth.
    #[error(
        "Out of band: entry ({row}, {col}) has no storage in a {n}x{n} matrix of half-bandwidth {bandwidth}."
    )]
    OutOfBand {
        row: usize,
        col: usize,
        n: usize,
        bandwidth: usize,
    },
}

// Manually implement PartialEq for the public error type.
// We compare the inner `BandErrorKind`.
impl PartialEq for BandError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
