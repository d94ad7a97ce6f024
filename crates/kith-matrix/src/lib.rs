//! Dense matrices over `f64`.
//!
//! A [`Matrix`] stores its elements row-major in a single allocation.
//! Arithmetic comes in two flavors: checked methods ([`Matrix::checked_add`],
//! [`Matrix::checked_mul`]) that return a [`MatrixError`] on shape mismatch,
//! and operator sugar (`&a + &b`, `&a * &b`, `2.0 * &a`) that panics on the
//! same conditions.
//!
//! ## Usage
//!
//! ```rust
//! use kith_matrix::Matrix;
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 3.0]])?;
//! let b = Matrix::from_rows(vec![vec![2.0, 5.0], vec![7.0, 9.0]])?;
//!
//! let sum = a.checked_add(&b)?;
//! assert_eq!(sum[(1, 1)], 12.0);
//! assert_eq!(a.determinant()?, -1.0);
//! # Ok::<(), kith_matrix::MatrixError>(())
//! ```

mod error;
mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;
