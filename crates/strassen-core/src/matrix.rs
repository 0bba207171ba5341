//! Dense row-major integer matrix.

use crate::error::MatrixError;
use crate::scalar::Scalar;

/// Rectangular `rows x cols` grid of scalars stored row-major.
///
/// A matrix is only mutated while it is being built; afterwards it is
/// shared by reference with views and recursive calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Create the empty `0 x 0` matrix.
    #[must_use]
    pub fn empty() -> Self {
        Self::zeros(0, 0)
    }

    /// Build a matrix from row vectors. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Build a matrix from row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::LengthMismatch {
                rows,
                cols,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from `i64` rows. Convenient for fixtures.
    pub fn from_i64_rows(rows: &[Vec<i64>]) -> Result<Self, MatrixError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| T::from_i64(v)).collect())
                .collect(),
        )
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Side length of a square matrix.
    pub fn square_size(&self) -> Result<usize, MatrixError> {
        if self.is_square() {
            Ok(self.rows)
        } else {
            Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Element at `(row, col)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    /// Element at `(row, col)` without the `Option`; callers guarantee bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }

    /// A single row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Row-major backing data.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Main diagonal, top-left to bottom-right.
    #[must_use]
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.rows.min(self.cols))
            .map(|i| self.at(i, i).clone())
            .collect()
    }

    /// Sum of the main diagonal.
    #[must_use]
    pub fn trace(&self) -> T {
        (0..self.rows.min(self.cols)).fold(T::zero(), |mut acc, i| {
            acc += self.at(i, i);
            acc
        })
    }
}

/// Check that both operands of a product are square and of equal size,
/// returning that size.
pub fn square_operands<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<usize, MatrixError> {
    let n = a.square_size()?;
    let m = b.square_size()?;
    if n != m {
        return Err(MatrixError::DimensionMismatch { left: n, right: m });
    }
    Ok(n)
}
