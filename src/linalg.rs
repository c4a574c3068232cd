//! Small dense matrices for basis-matrix curve evaluation.
//!
//! Storage is row-major in a flat `Vec<f64>`. Shape mismatches are reported
//! as [`Error::MatrixDimension`] at call time.

use crate::error::{Error, Result};

/// Row-major dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `data` has the wrong length.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(Error::InvalidArgument(format!(
                "{rows}x{cols} matrix needs {} values, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a square matrix from fixed-size rows.
    #[must_use]
    pub fn from_rows<const N: usize>(rows: &[[f64; N]; N]) -> Self {
        Self {
            rows: N,
            cols: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Multiply every element by `factor`.
    #[must_use]
    pub fn scaled(mut self, factor: f64) -> Self {
        for v in &mut self.data {
            *v *= factor;
        }
        self
    }

    /// Matrix product `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixDimension`] if `self.cols() != rhs.rows()`.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(Error::MatrixDimension {
                left_cols: self.cols,
                right_rows: rhs.rows,
            });
        }

        let mut data = vec![0.0; self.rows * rhs.cols];
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }
                data[i * rhs.cols + j] = acc;
            }
        }

        Ok(Self {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }

    /// Row-vector product `row * self`, one value per column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixDimension`] if `row.len() != self.rows()`.
    pub fn row_mul(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.rows {
            return Err(Error::MatrixDimension {
                left_cols: row.len(),
                right_rows: self.rows,
            });
        }

        Ok((0..self.cols)
            .map(|j| {
                row.iter()
                    .enumerate()
                    .map(|(k, r)| r * self.data[k * self.cols + j])
                    .sum()
            })
            .collect())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        prop::collection::vec(-100.0f64..100.0, rows * cols)
            .prop_map(move |data| Matrix::new(rows, cols, data).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Multiplying by the identity leaves a matrix unchanged
        #[test]
        fn prop_identity_is_neutral(m in matrix(4, 2)) {
            let identity = Matrix::from_rows(&[
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]);
            prop_assert_eq!(identity.mul(&m).unwrap(), m);
        }

        /// row_mul agrees with a 1xN matrix product
        #[test]
        fn prop_row_mul_matches_mul(
            m in matrix(4, 2),
            row in prop::collection::vec(-2.0f64..2.0, 4),
        ) {
            let via_row = m.row_mul(&row).unwrap();
            let via_mul = Matrix::new(1, 4, row).unwrap().mul(&m).unwrap();

            for (j, v) in via_row.iter().enumerate() {
                assert_relative_eq!(*v, via_mul.get(0, j).unwrap(), epsilon = 1e-9);
            }
        }

        /// Shape mismatches never panic
        #[test]
        fn prop_mismatched_shapes_error(rows in 1usize..6, inner in 1usize..6, other in 1usize..6) {
            prop_assume!(inner != other);
            let a = Matrix::new(rows, inner, vec![1.0; rows * inner]).unwrap();
            let b = Matrix::new(other, 2, vec![1.0; other * 2]).unwrap();
            let is_dimension_error = matches!(a.mul(&b), Err(Error::MatrixDimension { .. }));
            prop_assert!(is_dimension_error);
        }
    }
}
