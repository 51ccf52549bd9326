// Expression Tree Nodes
//
// This module defines the immutable node type that every expression is built
// from. Trees are assembled bottom-up: a node can only be constructed from
// nodes that already exist (or raw values lifted into atoms), so cycles are
// impossible and each node exclusively owns its children.

mod builder;
mod ops;
mod types;

pub use builder::lift;
pub use ops::{add, divide, multiply, power};
pub use types::{ContentKind, Fence, ListStyle, MatrixFence};

use crate::latex::LatexWriter;
use crate::markdown::{Content, MarkdownOptions};
use crate::matrix::Matrix;
use std::borrow::Cow;
use std::fmt;

/// Default separator between [`NodeKind::Sequence`] children
pub const DEFAULT_SEPARATOR: &str = " ";

/// Default glyph between [`NodeKind::Product`] operands
pub const DEFAULT_PRODUCT_GLYPH: &str = "\\cdot";

/// An immutable element of an expression tree.
///
/// The variant payload is private; it can be inspected through
/// [`Node::kind`] but never changed after construction. Whether the node must
/// be wrapped in parentheses when used as a product operand is decided once,
/// when the node is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    needs_parens: bool,
}

/// The variants an expression node can take
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Literal markup fragment
    Atom(String),

    /// Literal non-math text, set in text mode
    Text(String),

    /// Children joined by a separator
    Sequence {
        children: Vec<Node>,
        separator: Cow<'static, str>,
    },

    /// Children joined by `=`
    Equation(Vec<Node>),

    /// Superscript: base^{exponent}
    Power {
        base: Box<Node>,
        exponent: Box<Node>,
    },

    /// Operands joined by a product glyph
    Product {
        children: Vec<Node>,
        glyph: Cow<'static, str>,
    },

    /// Terms joined by `+`
    Sum(Vec<Node>),

    /// Fraction: numerator / denominator
    Fraction {
        numerator: Box<Node>,
        denominator: Box<Node>,
    },

    /// Child set in a named color
    Colored { child: Box<Node>, color: String },

    /// Child wrapped in scalable delimiters
    Parenthesized {
        child: Box<Node>,
        open: Fence,
        close: Fence,
    },

    /// Comma-separated children wrapped in scalable delimiters
    Tuple {
        children: Vec<Node>,
        open: Fence,
        close: Fence,
    },

    /// Set-builder notation: { element | filter }
    SetBuilder {
        element: Box<Node>,
        filter: Box<Node>,
    },

    /// Subscript: base_{subscript}
    Subscript {
        base: Box<Node>,
        subscript: Box<Node>,
    },

    /// Calligraphic font
    Calligraphic(Box<Node>),

    /// Probability of an event, optionally conditioned
    Probability {
        event: Box<Node>,
        condition: Option<Box<Node>>,
    },

    /// Square root or nth root
    Root {
        radicand: Box<Node>,
        index: Option<Box<Node>>,
    },

    /// Named begin/end block with one child per line
    Environment { name: String, children: Vec<Node> },

    /// Bulleted or numbered list of mixed text and math
    List { style: ListStyle, items: Vec<Content> },

    /// Rectangular grid of cells
    Matrix(Matrix),
}

impl Node {
    /// Wrap a variant, deciding its parenthesization flag.
    pub(crate) fn from_kind(kind: NodeKind) -> Self {
        let needs_parens = match &kind {
            NodeKind::Sequence { children, .. }
            | NodeKind::Equation(children)
            | NodeKind::Sum(children) => children.len() > 1,
            NodeKind::Calligraphic(child) => child.needs_parens,
            _ => false,
        };
        Self { kind, needs_parens }
    }

    /// Get the variant payload
    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Whether this node is wrapped in parentheses when it appears as a
    /// product operand or a subscript base
    #[inline]
    pub fn needs_parens(&self) -> bool {
        self.needs_parens
    }

    /// Returns true if this node is a leaf atom
    #[inline]
    pub fn is_atom(&self) -> bool {
        matches!(self.kind, NodeKind::Atom(_))
    }

    /// How a presentation layer has to delimit this node's rendering.
    pub fn content_kind(&self) -> ContentKind {
        match self.kind {
            NodeKind::List { .. } => ContentKind::Text,
            NodeKind::Environment { .. } | NodeKind::Matrix(_) => ContentKind::DisplayMath,
            _ => ContentKind::InlineMath,
        }
    }

    /// Render this node to LaTeX markup.
    ///
    /// Rendering is a pure function of the tree: calling it repeatedly
    /// yields identical strings.
    ///
    /// # Example
    /// ```
    /// use texgen::Node;
    ///
    /// let expr = (Node::from("a") + "b") * "c";
    /// assert_eq!(expr.render(), "\\left( a + b \\right) \\cdot c");
    /// ```
    pub fn render(&self) -> String {
        let mut writer = LatexWriter::new();
        writer.write_node(self);
        writer.finish()
    }

    /// Render with custom options (only list items consult them)
    pub fn render_with_options(&self, options: &MarkdownOptions) -> String {
        let mut writer = LatexWriter::with_options(options.clone());
        writer.write_node(self);
        writer.finish()
    }

    /// Render wrapped in `\left( ... \right)` if this node needs parentheses,
    /// otherwise the same as [`Node::render`].
    pub fn render_parenthesized(&self) -> String {
        let mut writer = LatexWriter::new();
        writer.write_parenthesized(self);
        writer.finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
