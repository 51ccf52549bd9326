//! texgen - Compositional expression trees that render to LaTeX math markup
//!
//! Expressions are built bottom-up from a small set of node variants (sums,
//! products, fractions, powers, roots, matrices, set-builder notation,
//! probability expressions, environments, lists) and rendered once at the
//! root. Raw text is lifted into leaf atoms wherever a node is expected.
//!
//! # Features
//!
//! - **Operator construction**: `+`, `*` and `/` build sums, products and
//!   fractions; [`Node::pow`] builds powers
//! - **Contextual parentheses**: product operands that need them are wrapped
//!   in `\left( ... \right)`, nothing else is
//! - **Symbolic matrices**: [`multiply_matrices`] builds sum-of-products cells
//! - **Markdown wrapping**: every node reports whether it is text, inline math
//!   or display math
//!
//! # Example - Building and rendering an expression
//!
//! ```
//! use texgen::Node;
//!
//! let x = Node::from("x");
//! let expr = (&x + 1) * (&x + 2);
//! assert_eq!(expr.render(), "\\left( x + 1 \\right) \\cdot \\left( x + 2 \\right)");
//!
//! let half = Node::fraction(1, 2).pow("n");
//! assert_eq!(half.render(), "\\frac{1}{2}^{n}");
//! ```
//!
//! # Example - Multiplying matrices
//!
//! ```
//! use texgen::{Matrix, multiply_matrices};
//!
//! # fn main() -> texgen::Result<()> {
//! let a = Matrix::new([["a", "b"], ["c", "d"]])?;
//! let b = Matrix::new([["e", "f"], ["g", "h"]])?;
//! let product = multiply_matrices(&a, &b)?;
//!
//! assert_eq!(product.get(0, 0).unwrap().render(), "a \\cdot e + b \\cdot g");
//! # Ok(())
//! # }
//! ```

/// Shared error types
pub mod common;

/// Expression tree nodes
///
/// This module defines the immutable [`Node`] type, its variants, the lifting
/// of raw values into atoms, and the composition operators.
pub mod node;

/// LaTeX rendering
///
/// This module renders node trees through a buffered [`LatexWriter`].
pub mod latex;

/// Symbolic matrices and matrix multiplication
pub mod matrix;

/// Markdown wrapping of rendered markup
pub mod markdown;

// Re-export public API
pub use common::{Error, Result, ShapeError};
pub use latex::{LatexWriter, join};
pub use markdown::{Content, FormulaStyle, MarkdownOptions, ToMarkdown};
pub use matrix::{Matrix, Shape, multiply_matrices};
pub use node::{
    ContentKind, Fence, ListStyle, MatrixFence, Node, NodeKind, add, divide, lift, multiply,
    power,
};
