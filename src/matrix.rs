//! This module defines the compact storage types for banded matrices.
//!
//! A band matrix confines its nonzero entries to a fixed number of diagonals
//! around the main diagonal. Storing only those diagonals reduces the memory
//! footprint of an n×n matrix from O(n²) to O(n), and lets the arithmetic in
//! [`crate::ops`] run in O(n) time. That reduction is the entire point of
//! these types:
//!
//! 1.  **Compactness**: A tridiagonal matrix stores 3n−2 values instead of n²,
//!     a pentadiagonal one 5n−6. For n = 1000 that is a ~99.7% reduction.
//! 2.  **Totality of reads**: Every position outside the stored band is an
//!     implicit zero by construction. [`Tridiagonal::get`] and
//!     [`Pentadiagonal::get`] therefore never fail; rendering a full matrix
//!     is just n² reads.
//! 3.  **Structural immutability**: The diagonal storage is owned and
//!     private. Operations borrow operands immutably and return freshly
//!     allocated results, so an operation's output can never alias its
//!     inputs.
//!
//! The storage layout follows the usual diagonal-offset convention: for an
//! offset `d > 0`, the upper diagonal holds the `n − d` entries at
//! `(row i, col i + d)` and the lower diagonal the `n − d` entries at
//! `(row i + d, col i)`. The [`BandedMatrix`] trait abstracts the two
//! concrete shapes behind `dim`/`bandwidth`/`get`, which is all a generic
//! consumer (a renderer, a dense reconstruction in a test) needs.

use std::fmt;

use num_traits::{One, Zero};

use crate::error::{BandError, BandErrorKind};

/// Read-only access to a square matrix stored in banded form.
///
/// This trait provides the seam between the concrete storage shapes and any
/// consumer that only needs positional reads: the `Display` implementations
/// below, and dense reconstruction in the test suite. Reads are total; any
/// position without backing storage yields zero.
pub trait BandedMatrix<T> {
    /// Returns the dimension `n` of the matrix.
    fn dim(&self) -> usize;

    /// Returns the half-bandwidth `k`: the number of stored diagonals above
    /// (and below) the main diagonal.
    fn bandwidth(&self) -> usize;

    /// Returns the entry at `(row, col)`, or zero if that position has no
    /// backing storage.
    fn get(&self, row: usize, col: usize) -> T;
}

/// A square matrix whose nonzero entries lie on the main diagonal and the
/// first diagonal above and below it (half-bandwidth k = 1).
///
/// The three diagonals are stored as owned vectors: `main` with `n` entries,
/// `upper` and `lower` with `n − 1` entries each. Equality is value-based:
/// two matrices are equal iff they have the same dimension and identical
/// diagonal contents.
#[derive(Clone, Debug, PartialEq)]
pub struct Tridiagonal<T> {
    n: usize,
    main: Vec<T>,
    upper: Vec<T>,
    lower: Vec<T>,
}

impl<T> Tridiagonal<T> {
    /// Builds a tridiagonal matrix from its three diagonals.
    ///
    /// The dimension is derived from the main diagonal. The off-diagonals
    /// must hold exactly `n − 1` entries each: `upper[i]` is the entry at
    /// `(i, i + 1)`, `lower[i]` the entry at `(i + 1, i)`.
    ///
    /// # Errors
    /// Returns an `InvalidDimension` error if the main diagonal is empty or
    /// an off-diagonal has the wrong length.
    pub fn from_diagonals(main: Vec<T>, upper: Vec<T>, lower: Vec<T>) -> Result<Self, BandError> {
        let n = main.len();
        require_dimension(n)?;
        require_diagonal_len("upper", upper.len(), n, 1)?;
        require_diagonal_len("lower", lower.len(), n, 1)?;
        Ok(Self {
            n,
            main,
            upper,
            lower,
        })
    }

    /// Returns the dimension `n` of the matrix.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns the main diagonal (`n` entries).
    pub fn main(&self) -> &[T] {
        &self.main
    }

    /// Returns the upper diagonal (`n − 1` entries at `(i, i + 1)`).
    pub fn upper(&self) -> &[T] {
        &self.upper
    }

    /// Returns the lower diagonal (`n − 1` entries at `(i + 1, i)`).
    pub fn lower(&self) -> &[T] {
        &self.lower
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// # Errors
    /// Returns an `OutOfBand` error if the position has no backing storage,
    /// i.e. it lies outside the n×n extent or further than one diagonal from
    /// the main diagonal. The matrix is unchanged on failure.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), BandError> {
        if row < self.n && col < self.n {
            match col as isize - row as isize {
                0 => {
                    self.main[row] = value;
                    return Ok(());
                }
                1 => {
                    self.upper[row] = value;
                    return Ok(());
                }
                -1 => {
                    self.lower[col] = value;
                    return Ok(());
                }
                _ => {}
            }
        }
        Err(BandErrorKind::OutOfBand {
            row,
            col,
            n: self.n,
            bandwidth: 1,
        }
        .into())
    }
}

impl<T: Copy + Zero> Tridiagonal<T> {
    /// Allocates an all-zero tridiagonal matrix of dimension `n`.
    ///
    /// # Errors
    /// Returns an `InvalidDimension` error if `n` is zero.
    pub fn zeros(n: usize) -> Result<Self, BandError> {
        require_dimension(n)?;
        Ok(Self {
            n,
            main: vec![T::zero(); n],
            upper: vec![T::zero(); n - 1],
            lower: vec![T::zero(); n - 1],
        })
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// Reads are total: positions off the band, or outside the n×n extent,
    /// are implicit zeros rather than errors.
    pub fn get(&self, row: usize, col: usize) -> T {
        if row >= self.n || col >= self.n {
            return T::zero();
        }
        match col as isize - row as isize {
            0 => self.main[row],
            1 => self.upper[row],
            -1 => self.lower[col],
            _ => T::zero(),
        }
    }
}

impl<T: Copy + Zero + One> Tridiagonal<T> {
    /// Builds the n×n identity matrix in tridiagonal storage.
    ///
    /// # Errors
    /// Returns an `InvalidDimension` error if `n` is zero.
    pub fn identity(n: usize) -> Result<Self, BandError> {
        let mut matrix = Self::zeros(n)?;
        matrix.main.fill(T::one());
        Ok(matrix)
    }
}

impl<T: Copy + Zero> BandedMatrix<T> for Tridiagonal<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    fn bandwidth(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        Tridiagonal::get(self, row, col)
    }
}

impl<T: Copy + Zero + fmt::Display> fmt::Display for Tridiagonal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_dense(self, f)
    }
}

/// A square matrix whose nonzero entries lie within two diagonals of the main
/// diagonal (half-bandwidth k = 2).
///
/// Five diagonals are stored: `main` with `n` entries, `upper1`/`lower1` with
/// `n − 1`, and `upper2`/`lower2` with `max(n − 2, 0)`. A dimension of 1 or 2
/// is legal; the diagonals that cannot exist at that size are simply empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Pentadiagonal<T> {
    n: usize,
    main: Vec<T>,
    upper1: Vec<T>,
    upper2: Vec<T>,
    lower1: Vec<T>,
    lower2: Vec<T>,
}

impl<T> Pentadiagonal<T> {
    /// Builds a pentadiagonal matrix from its five diagonals.
    ///
    /// # Errors
    /// Returns an `InvalidDimension` error if the main diagonal is empty or
    /// an off-diagonal has the wrong length for its offset.
    pub fn from_diagonals(
        main: Vec<T>,
        upper1: Vec<T>,
        upper2: Vec<T>,
        lower1: Vec<T>,
        lower2: Vec<T>,
    ) -> Result<Self, BandError> {
        let n = main.len();
        require_dimension(n)?;
        require_diagonal_len("upper1", upper1.len(), n, 1)?;
        require_diagonal_len("upper2", upper2.len(), n, 2)?;
        require_diagonal_len("lower1", lower1.len(), n, 1)?;
        require_diagonal_len("lower2", lower2.len(), n, 2)?;
        Ok(Self {
            n,
            main,
            upper1,
            upper2,
            lower1,
            lower2,
        })
    }

    /// Crate-internal constructor for results whose diagonal lengths are
    /// correct by construction.
    pub(crate) fn from_parts(
        n: usize,
        main: Vec<T>,
        upper1: Vec<T>,
        upper2: Vec<T>,
        lower1: Vec<T>,
        lower2: Vec<T>,
    ) -> Self {
        debug_assert!(n >= 1);
        debug_assert_eq!(main.len(), n);
        debug_assert_eq!(upper1.len(), n - 1);
        debug_assert_eq!(upper2.len(), n.saturating_sub(2));
        debug_assert_eq!(lower1.len(), n - 1);
        debug_assert_eq!(lower2.len(), n.saturating_sub(2));
        Self {
            n,
            main,
            upper1,
            upper2,
            lower1,
            lower2,
        }
    }

    /// Returns the dimension `n` of the matrix.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns the main diagonal (`n` entries).
    pub fn main(&self) -> &[T] {
        &self.main
    }

    /// Returns the first upper diagonal (`n − 1` entries at `(i, i + 1)`).
    pub fn upper1(&self) -> &[T] {
        &self.upper1
    }

    /// Returns the second upper diagonal (`max(n − 2, 0)` entries at `(i, i + 2)`).
    pub fn upper2(&self) -> &[T] {
        &self.upper2
    }

    /// Returns the first lower diagonal (`n − 1` entries at `(i + 1, i)`).
    pub fn lower1(&self) -> &[T] {
        &self.lower1
    }

    /// Returns the second lower diagonal (`max(n − 2, 0)` entries at `(i + 2, i)`).
    pub fn lower2(&self) -> &[T] {
        &self.lower2
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// # Errors
    /// Returns an `OutOfBand` error if the position has no backing storage.
    /// The matrix is unchanged on failure.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), BandError> {
        if row < self.n && col < self.n {
            match col as isize - row as isize {
                0 => {
                    self.main[row] = value;
                    return Ok(());
                }
                1 => {
                    self.upper1[row] = value;
                    return Ok(());
                }
                2 => {
                    self.upper2[row] = value;
                    return Ok(());
                }
                -1 => {
                    self.lower1[col] = value;
                    return Ok(());
                }
                -2 => {
                    self.lower2[col] = value;
                    return Ok(());
                }
                _ => {}
            }
        }
        Err(BandErrorKind::OutOfBand {
            row,
            col,
            n: self.n,
            bandwidth: 2,
        }
        .into())
    }
}

impl<T: Copy + Zero> Pentadiagonal<T> {
    /// Allocates an all-zero pentadiagonal matrix of dimension `n`.
    ///
    /// # Errors
    /// Returns an `InvalidDimension` error if `n` is zero.
    pub fn zeros(n: usize) -> Result<Self, BandError> {
        require_dimension(n)?;
        Ok(Self {
            n,
            main: vec![T::zero(); n],
            upper1: vec![T::zero(); n - 1],
            upper2: vec![T::zero(); n.saturating_sub(2)],
            lower1: vec![T::zero(); n - 1],
            lower2: vec![T::zero(); n.saturating_sub(2)],
        })
    }

    /// Returns the entry at `(row, col)`; total, as for [`Tridiagonal::get`].
    pub fn get(&self, row: usize, col: usize) -> T {
        if row >= self.n || col >= self.n {
            return T::zero();
        }
        match col as isize - row as isize {
            0 => self.main[row],
            1 => self.upper1[row],
            2 => self.upper2[row],
            -1 => self.lower1[col],
            -2 => self.lower2[col],
            _ => T::zero(),
        }
    }
}

impl<T: Copy + Zero + One> Pentadiagonal<T> {
    /// Builds the n×n identity matrix in pentadiagonal storage.
    ///
    /// # Errors
    /// Returns an `InvalidDimension` error if `n` is zero.
    pub fn identity(n: usize) -> Result<Self, BandError> {
        let mut matrix = Self::zeros(n)?;
        matrix.main.fill(T::one());
        Ok(matrix)
    }
}

impl<T: Copy + Zero> BandedMatrix<T> for Pentadiagonal<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    fn bandwidth(&self) -> usize {
        2
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        Pentadiagonal::get(self, row, col)
    }
}

impl<T: Copy + Zero + fmt::Display> fmt::Display for Pentadiagonal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_dense(self, f)
    }
}

/// Rejects a zero dimension before any storage is allocated.
fn require_dimension(n: usize) -> Result<(), BandError> {
    if n == 0 {
        return Err(BandErrorKind::InvalidDimension(
            "a banded matrix must have at least one row".to_string(),
        )
        .into());
    }
    Ok(())
}

/// Checks that a diagonal at `offset` holds exactly `max(n - offset, 0)` entries.
fn require_diagonal_len(
    name: &str,
    actual: usize,
    n: usize,
    offset: usize,
) -> Result<(), BandError> {
    let expected = n.saturating_sub(offset);
    if actual != expected {
        return Err(BandErrorKind::InvalidDimension(format!(
            "the {name} diagonal holds {actual} entries, but dimension {n} requires {expected}"
        ))
        .into());
    }
    Ok(())
}

/// Renders the full dense grid of a banded matrix, implicit zeros included.
///
/// Every position is read through [`BandedMatrix::get`], so off-band entries
/// come out as zeros and the rendering exercises exactly the read contract
/// that external consumers rely on.
fn fmt_dense<T, M>(matrix: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Copy + Zero + fmt::Display,
    M: BandedMatrix<T>,
{
    for row in 0..matrix.dim() {
        for col in 0..matrix.dim() {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>8}", matrix.get(row, col))?;
        }
        writeln!(f)?;
    }
    Ok(())
}
