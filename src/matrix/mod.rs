// Symbolic Matrices
//
// A matrix is a validated rectangular grid of nodes. Multiplication is
// symbolic: each output cell is a sum of product nodes built from the operand
// cells, never a numeric value.

use crate::common::{Error, Result, ShapeError};
use crate::node::{MatrixFence, Node};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Row and column counts of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    /// Create a shape of `rows` x `cols`
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A non-empty, rectangular grid of nodes
///
/// The grid can only be built through [`Matrix::new`], which rejects empty
/// and ragged input, so every `Matrix` value has at least one row and one
/// column and all rows share the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    els: Vec<Vec<Node>>,
    fence: MatrixFence,
}

impl Matrix {
    /// Create a matrix from rows of cells, lifting every cell into a node.
    ///
    /// # Errors
    /// Returns [`Error::Shape`] if there are no rows, the first row is empty,
    /// or any row's length differs from the first row's.
    ///
    /// # Example
    /// ```
    /// use texgen::Matrix;
    ///
    /// let m = Matrix::new([["a", "b"], ["c", "d"]]).unwrap();
    /// assert_eq!(m.n_rows(), 2);
    /// assert_eq!(m.n_cols(), 2);
    /// assert!(Matrix::new([vec!["a", "b"], vec!["c"]]).is_err());
    /// ```
    pub fn new<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        let els: Vec<Vec<Node>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        if let Err(err) = validate_shape(&els) {
            warn!("rejecting matrix: {err}");
            return Err(err.into());
        }

        Ok(Self {
            els,
            fence: MatrixFence::default(),
        })
    }

    /// Set the fence the matrix is rendered with
    #[inline]
    pub fn with_fence(mut self, fence: MatrixFence) -> Self {
        self.fence = fence;
        self
    }

    /// Get the fence the matrix is rendered with
    #[inline]
    pub fn fence(&self) -> MatrixFence {
        self.fence
    }

    /// Number of rows
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.els.len()
    }

    /// Number of columns, taken from the first row
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.els[0].len()
    }

    /// Rows and columns
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.n_rows(), self.n_cols())
    }

    /// Get the cell at row `i`, column `j`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&Node> {
        self.els.get(i).and_then(|row| row.get(j))
    }

    /// Get row `i`
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[Node]> {
        self.els.get(i).map(Vec::as_slice)
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[Node]> {
        self.els.iter().map(Vec::as_slice)
    }

    /// Multiply this matrix by `rhs`; see [`multiply_matrices`]
    #[inline]
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        multiply_matrices(self, rhs)
    }
}

fn validate_shape(els: &[Vec<Node>]) -> std::result::Result<(), ShapeError> {
    let first = els.first().ok_or(ShapeError::Empty)?;
    let expected = first.len();
    if expected == 0 {
        return Err(ShapeError::EmptyRow);
    }

    match els.iter().position(|row| row.len() != expected) {
        Some(row) => Err(ShapeError::Ragged {
            row,
            expected,
            found: els[row].len(),
        }),
        None => Ok(()),
    }
}

/// Multiply two matrices symbolically.
///
/// The product is defined only when `a.n_cols() == b.n_rows()`. Cell `(i, j)`
/// of the `a.n_rows() x b.n_cols()` result is the sum, over the shared index
/// `k`, of the products `a[i][k] * b[k][j]`, so every cell has exactly
/// `a.n_cols()` terms. Product terms parenthesize operands that need it.
/// The result keeps `a`'s fence.
///
/// # Errors
/// Returns [`Error::DimensionMismatch`] carrying both shapes when the
/// contracted dimensions differ. No partial result is produced.
///
/// # Example
/// ```
/// use texgen::{multiply_matrices, Matrix};
///
/// let a = Matrix::new([["a", "b"], ["c", "d"]]).unwrap();
/// let b = Matrix::new([["e", "f"], ["g", "h"]]).unwrap();
/// let c = multiply_matrices(&a, &b).unwrap();
/// assert_eq!(c.get(0, 0).unwrap().render(), "a \\cdot e + b \\cdot g");
/// ```
pub fn multiply_matrices(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.n_cols() != b.n_rows() {
        warn!(
            "cannot multiply {} by {}: {} != {}",
            a.shape(),
            b.shape(),
            a.n_cols(),
            b.n_rows()
        );
        return Err(Error::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    debug!("multiplying {} by {}", a.shape(), b.shape());

    let contracted = a.n_cols();
    let els = (0..a.n_rows())
        .map(|i| {
            (0..b.n_cols())
                .map(|j| {
                    let terms: SmallVec<[Node; 4]> = (0..contracted)
                        .map(|k| Node::product([&a.els[i][k], &b.els[k][j]]))
                        .collect();
                    Node::sum(terms)
                })
                .collect()
        })
        .collect();

    Ok(Matrix {
        els,
        fence: a.fence,
    })
}
