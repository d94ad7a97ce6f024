//! Error type for matrix construction and arithmetic.

/// Errors produced when building or combining matrices.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Construction input where the rows disagree on length.
    #[error("all rows must have the same length: row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        found: usize,
        /// Length of row 0, which sets the column count.
        expected: usize,
    },

    /// The operands' shapes do not fit the attempted operation.
    #[error("{operation}: left operand is {left_rows}x{left_cols}, right operand is {right_rows}x{right_cols}")]
    DimensionMismatch {
        /// Which operation rejected the shapes.
        operation: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// The determinant is defined only for square matrices.
    #[error("determinant is defined only for square matrices, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}
