//! Dense submatrix accessor.
//!
//! A [`SubmatrixView`] is a non-owning `n x n` window onto a backing
//! [`Matrix`]. Cells past the visible extent read as zero, which is how the
//! engine pads odd sizes without allocating padded copies.

use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// One of the four blocks a view is split into for a recursion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Row and column offset of this quadrant for a split at `half`.
    #[must_use]
    pub fn offset(self, half: usize) -> (usize, usize) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, half),
            Self::BottomLeft => (half, 0),
            Self::BottomRight => (half, half),
        }
    }
}

/// Sign used when combining two views element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    Add,
    Subtract,
}

/// Read-only logical `n x n` window onto a backing matrix.
///
/// `visible_rows` and `visible_cols` bound the region that maps to real
/// cells. They are clipped to the backing matrix and, for quadrants, to the
/// parent's visible region, so padding stays zero at every depth.
#[derive(Debug)]
pub struct SubmatrixView<'a, T> {
    backing: &'a Matrix<T>,
    row: usize,
    col: usize,
    size: usize,
    visible_rows: usize,
    visible_cols: usize,
}

impl<T> Clone for SubmatrixView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SubmatrixView<'_, T> {}

impl<'a, T: Scalar> SubmatrixView<'a, T> {
    /// View of size `size` whose top-left cell is `backing[row][col]`.
    #[must_use]
    pub fn new(backing: &'a Matrix<T>, row: usize, col: usize, size: usize) -> Self {
        Self {
            backing,
            row,
            col,
            size,
            visible_rows: backing.rows().saturating_sub(row).min(size),
            visible_cols: backing.cols().saturating_sub(col).min(size),
        }
    }

    /// View covering the whole backing matrix.
    #[must_use]
    pub fn full(backing: &'a Matrix<T>) -> Self {
        Self::new(backing, 0, 0, backing.rows().max(backing.cols()))
    }

    /// Logical side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of leading rows that map to real cells.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Number of leading columns that map to real cells.
    #[must_use]
    pub fn visible_cols(&self) -> usize {
        self.visible_cols
    }

    /// Logical value at `(i, j)`: the backing cell, or zero past the extent.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> T {
        if i < self.visible_rows && j < self.visible_cols {
            self.raw(i, j).clone()
        } else {
            T::zero()
        }
    }

    #[inline]
    fn raw(&self, i: usize, j: usize) -> &T {
        self.backing.at(self.row + i, self.col + j)
    }

    /// The `half x half` view of one quadrant of this view.
    #[must_use]
    pub fn quadrant(&self, quadrant: Quadrant, half: usize) -> Self {
        let (dr, dc) = quadrant.offset(half);
        Self {
            backing: self.backing,
            row: self.row + dr,
            col: self.col + dc,
            size: half,
            visible_rows: self.visible_rows.saturating_sub(dr).min(half),
            visible_cols: self.visible_cols.saturating_sub(dc).min(half),
        }
    }

    /// Dense `n x n` matrix with `self[i][j] ± other[i][j]`.
    ///
    /// # Panics
    ///
    /// Panics if the views have different sizes.
    #[must_use]
    pub fn combine(&self, other: &Self, op: Combination) -> Matrix<T> {
        assert_eq!(self.size, other.size, "combined views must have equal size");
        let n = self.size;
        let mut result = Matrix::zeros(n, n);
        for i in 0..self.visible_rows {
            for j in 0..self.visible_cols {
                *result.at_mut(i, j) += self.raw(i, j);
            }
        }
        for i in 0..other.visible_rows {
            for j in 0..other.visible_cols {
                match op {
                    Combination::Add => *result.at_mut(i, j) += other.raw(i, j),
                    Combination::Subtract => *result.at_mut(i, j) -= other.raw(i, j),
                }
            }
        }
        result
    }

    /// Triple-loop product of two equally sized views.
    ///
    /// Loops are clipped to the visible extents, so padding never enters a
    /// multiplication.
    ///
    /// # Panics
    ///
    /// Panics if the views have different sizes.
    #[must_use]
    pub fn multiply_direct(&self, other: &Self) -> Matrix<T> {
        assert_eq!(self.size, other.size, "multiplied views must have equal size");
        let n = self.size;
        let mut result = Matrix::zeros(n, n);
        let inner = self.visible_cols.min(other.visible_rows);
        // i-k-j keeps the innermost loop on a contiguous row of `other`.
        for i in 0..self.visible_rows {
            for k in 0..inner {
                let lhs = self.raw(i, k);
                if lhs.is_zero() {
                    continue;
                }
                for j in 0..other.visible_cols {
                    *result.at_mut(i, j) += &lhs.mul_ref(other.raw(k, j));
                }
            }
        }
        result
    }

    /// Copy the logical contents into a dense `n x n` matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix<T> {
        let mut result = Matrix::zeros(self.size, self.size);
        for i in 0..self.visible_rows {
            for j in 0..self.visible_cols {
                *result.at_mut(i, j) = self.raw(i, j).clone();
            }
        }
        result
    }
}
