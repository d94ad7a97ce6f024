//! The matrix type and its arithmetic.

use std::fmt;
use std::ops::{Add, Index, Mul};

use crate::MatrixError;

/// A dense `rows x cols` matrix of `f64` elements.
///
/// Elements live row-major in a single `Vec`, so `(r, c)` maps to
/// `data[r * cols + c]`. Equality (`==`) is exact per element; use
/// [`Matrix::approx_eq`] when comparing results of floating-point
/// arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Row-major element storage, length `rows * cols`.
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from row vectors.
    ///
    /// Every row must have the same length as row 0; a ragged input fails
    /// with [`MatrixError::RaggedRows`]. An empty input builds the 0x0
    /// matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let Some(first) = rows.first() else {
            return Ok(Self {
                rows: 0,
                cols: 0,
                data: Vec::new(),
            });
        };
        let cols = first.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    found: row.len(),
                    expected: cols,
                });
            }
        }

        let row_count = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// The `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        matrix
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The element at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// Row `r` as a slice.
    ///
    /// # Panics
    ///
    /// Panics when `r` is out of range.
    pub fn row(&self, r: usize) -> &[f64] {
        assert!(r < self.rows, "row {r} out of range for {} rows", self.rows);
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Elementwise sum, failing with [`MatrixError::DimensionMismatch`]
    /// unless both matrices have the same shape.
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                operation: "addition requires equal dimensions",
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Matrix product, failing with [`MatrixError::DimensionMismatch`]
    /// unless `self.cols == other.rows`.
    pub fn checked_mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiplication requires left columns to equal right rows",
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = acc;
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Every element multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|x| x * factor).collect(),
        }
    }

    /// The transposed matrix (`cols x rows`).
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// The determinant, failing with [`MatrixError::NotSquare`] for
    /// rectangular matrices.
    ///
    /// Orders 0 through 3 use closed forms (the 0x0 determinant is the
    /// empty product, 1.0); larger orders expand along the first row.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_of_square())
    }

    fn det_of_square(&self) -> f64 {
        match self.rows {
            0 => 1.0,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            3 => {
                // Rule of Sarrus
                let m = |r: usize, c: usize| self.data[r * 3 + c];
                m(0, 0) * m(1, 1) * m(2, 2) + m(0, 1) * m(1, 2) * m(2, 0)
                    + m(0, 2) * m(1, 0) * m(2, 1)
                    - m(0, 2) * m(1, 1) * m(2, 0)
                    - m(0, 1) * m(1, 0) * m(2, 2)
                    - m(0, 0) * m(1, 2) * m(2, 1)
            }
            n => {
                // Laplace expansion along the first row
                let mut det = 0.0;
                for j in 0..n {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * self.data[j] * self.first_row_minor(j).det_of_square();
                }
                det
            }
        }
    }

    /// Submatrix dropping row 0 and column `skip`.
    fn first_row_minor(&self, skip: usize) -> Matrix {
        let n = self.rows;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for r in 1..n {
            for c in 0..n {
                if c != skip {
                    data.push(self.data[r * n + c]);
                }
            }
        }
        Matrix {
            rows: n - 1,
            cols: n - 1,
            data,
        }
    }

    /// `true` when both matrices have the same shape and every pair of
    /// elements differs by at most `eps`.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics when the index is out of range.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics when the shapes differ; [`Matrix::checked_add`] reports the
    /// mismatch as an error instead.
    fn add(self, rhs: &Matrix) -> Matrix {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics when the inner dimensions differ; [`Matrix::checked_mul`]
    /// reports the mismatch as an error instead.
    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, factor: f64) -> Matrix {
        self.scale(factor)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.scale(self)
    }
}

impl fmt::Display for Matrix {
    /// Renders rows on separate lines with fixed-width one-decimal cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:6.1}", self.data[r * self.cols + c])?;
            }
        }
        Ok(())
    }
}
