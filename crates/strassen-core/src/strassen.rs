//! Recursive Strassen multiplication over submatrix views.
//!
//! Each level splits an `n x n` product into seven products of side
//! `half = ceil(n / 2)`. When `n` is odd the first half absorbs the extra
//! row and column; the missing cells of the second half are virtual zeros
//! supplied by [`SubmatrixView`], and the recombination step copies only the
//! real `half - remainder` rows/columns of the right and bottom blocks.

use crate::error::MatrixError;
use crate::matrix::{square_operands, Matrix};
use crate::options::EngineOptions;
use crate::scalar::Scalar;
use crate::view::{Combination, Quadrant, SubmatrixView};

/// Operand of one recursive sub-product.
enum Operand<'a, T> {
    /// A quadrant read in place.
    View(SubmatrixView<'a, T>),
    /// A freshly combined `half x half` matrix owned by the current frame.
    Owned(Matrix<T>),
}

impl<'a, T: Scalar> Operand<'a, T> {
    fn combined(a: SubmatrixView<'a, T>, b: SubmatrixView<'a, T>, op: Combination) -> Self {
        Self::Owned(a.combine(&b, op))
    }

    fn view(&self) -> SubmatrixView<'_, T> {
        match self {
            Self::View(v) => *v,
            Self::Owned(m) => SubmatrixView::full(m),
        }
    }
}

/// One of the seven independent products of a recursion level.
struct ProductJob<'a, T> {
    left: Operand<'a, T>,
    right: Operand<'a, T>,
}

impl<'a, T: Scalar> ProductJob<'a, T> {
    fn new(left: Operand<'a, T>, right: Operand<'a, T>) -> Self {
        Self { left, right }
    }

    fn run(&self, engine: &StrassenEngine) -> Matrix<T> {
        engine.multiply(self.left.view(), self.right.view())
    }
}

/// Strassen multiplication engine with a direct-multiply base case.
#[derive(Debug, Clone, Default)]
pub struct StrassenEngine {
    options: EngineOptions,
}

impl StrassenEngine {
    /// Create an engine bound to the given options.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Create a single-threaded engine with the given threshold.
    #[must_use]
    pub fn with_threshold(threshold: usize) -> Self {
        Self::new(EngineOptions::default().with_threshold(threshold))
    }

    /// Options this engine was built with.
    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Largest side length multiplied directly.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.options.threshold
    }

    /// Multiply two square matrices of equal size.
    pub fn multiply_matrices<T: Scalar>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<Matrix<T>, MatrixError> {
        let n = square_operands(a, b)?;
        tracing::debug!(
            n,
            threshold = self.options.threshold,
            parallel_threshold = ?self.options.parallel_threshold,
            "strassen multiply"
        );
        Ok(self.multiply(SubmatrixView::full(a), SubmatrixView::full(b)))
    }

    /// Multiply two logical `n x n` views, returning the dense `n x n` product.
    ///
    /// # Panics
    ///
    /// Panics if the views have different sizes.
    #[must_use]
    pub fn multiply<T: Scalar>(&self, a: SubmatrixView<'_, T>, b: SubmatrixView<'_, T>) -> Matrix<T> {
        assert_eq!(a.size(), b.size(), "operand views must have equal size");
        let n = a.size();

        // Splitting n = 1 would produce seven n = 1 problems again.
        if n <= self.options.threshold || n <= 1 {
            return a.multiply_direct(&b);
        }

        let remainder = n % 2;
        let half = (n + remainder) / 2;
        tracing::trace!(n, half, "strassen split");

        let a11 = a.quadrant(Quadrant::TopLeft, half);
        let a12 = a.quadrant(Quadrant::TopRight, half);
        let a21 = a.quadrant(Quadrant::BottomLeft, half);
        let a22 = a.quadrant(Quadrant::BottomRight, half);
        let b11 = b.quadrant(Quadrant::TopLeft, half);
        let b12 = b.quadrant(Quadrant::TopRight, half);
        let b21 = b.quadrant(Quadrant::BottomLeft, half);
        let b22 = b.quadrant(Quadrant::BottomRight, half);

        let j1 = ProductJob::new(
            Operand::View(a11),
            Operand::combined(b12, b22, Combination::Subtract),
        );
        let j2 = ProductJob::new(
            Operand::combined(a11, a12, Combination::Add),
            Operand::View(b22),
        );
        let j3 = ProductJob::new(
            Operand::combined(a21, a22, Combination::Add),
            Operand::View(b11),
        );
        let j4 = ProductJob::new(
            Operand::View(a22),
            Operand::combined(b21, b11, Combination::Subtract),
        );
        let j5 = ProductJob::new(
            Operand::combined(a11, a22, Combination::Add),
            Operand::combined(b11, b22, Combination::Add),
        );
        let j6 = ProductJob::new(
            Operand::combined(a12, a22, Combination::Subtract),
            Operand::combined(b21, b22, Combination::Add),
        );
        // p7 = (A21 - A11)(B11 + B12), the sign the bottom-right block needs.
        let j7 = ProductJob::new(
            Operand::combined(a21, a11, Combination::Subtract),
            Operand::combined(b11, b12, Combination::Add),
        );

        let [p1, p2, p3, p4, p5, p6, p7] = if self.options.should_parallelize(n) {
            let (((p1, p2), (p3, p4)), ((p5, p6), p7)) = rayon::join(
                || {
                    rayon::join(
                        || rayon::join(|| j1.run(self), || j2.run(self)),
                        || rayon::join(|| j3.run(self), || j4.run(self)),
                    )
                },
                || {
                    rayon::join(
                        || rayon::join(|| j5.run(self), || j6.run(self)),
                        || j7.run(self),
                    )
                },
            );
            [p1, p2, p3, p4, p5, p6, p7]
        } else {
            [
                j1.run(self),
                j2.run(self),
                j3.run(self),
                j4.run(self),
                j5.run(self),
                j6.run(self),
                j7.run(self),
            ]
        };

        combine_products(n, half, remainder, [&p1, &p2, &p3, &p4, &p5, &p6, &p7])
    }
}

/// Assemble the `n x n` result from the seven partial products, dropping
/// the padding row/column of the right and bottom blocks.
fn combine_products<T: Scalar>(
    n: usize,
    half: usize,
    remainder: usize,
    [p1, p2, p3, p4, p5, p6, p7]: [&Matrix<T>; 7],
) -> Matrix<T> {
    let keep = half - remainder;
    let mut result = Matrix::zeros(n, n);

    for i in 0..half {
        for j in 0..half {
            *result.at_mut(i, j) = p4.at(i, j).clone() - p2.at(i, j) + p5.at(i, j) + p6.at(i, j);
        }
        for j in 0..keep {
            *result.at_mut(i, half + j) = p1.at(i, j).clone() + p2.at(i, j);
        }
    }
    for i in 0..keep {
        for j in 0..half {
            *result.at_mut(half + i, j) = p3.at(i, j).clone() + p4.at(i, j);
        }
        for j in 0..keep {
            *result.at_mut(half + i, half + j) =
                p1.at(i, j).clone() - p3.at(i, j) + p5.at(i, j) + p7.at(i, j);
        }
    }
    result
}
