//! Low-level arithmetic kernels behind the public operations in
//! [`crate::ops`].
//!
//! The module is crate-private: the kernels assume their dimension
//! preconditions have already been checked by the public entry points, and
//! enforce them only with debug assertions.
//!
//! - **`product`**: The banded multiplication kernel. It expresses the
//!   tridiagonal×tridiagonal product as a fixed table of per-row
//!   contribution rules, one per (target diagonal, term) pair, so that each
//!   contribution and its boundary guard can be tested in isolation.

pub(crate) mod product;
