// Node construction and lifting
//
// Every constructor lifts its child arguments through `Into<Node>`, so raw
// text, numbers, matrices and existing nodes can be mixed freely wherever a
// child is expected.

use super::{DEFAULT_PRODUCT_GLYPH, DEFAULT_SEPARATOR, Fence, ListStyle, Node, NodeKind};
use crate::common::Result;
use crate::latex::utils::escape_latex_text;
use crate::markdown::Content;
use crate::matrix::Matrix;
use std::borrow::Cow;

/// Lift a raw value into a node.
///
/// Text becomes an [`NodeKind::Atom`] rendering exactly that text; existing
/// nodes pass through unchanged.
///
/// # Example
/// ```
/// use texgen::{lift, Node};
///
/// assert_eq!(lift("x^2").render(), "x^2");
/// let node = Node::sqrt("y");
/// assert_eq!(lift(node.clone()), node);
/// ```
#[inline]
pub fn lift(value: impl Into<Node>) -> Node {
    value.into()
}

#[inline]
fn boxed(value: impl Into<Node>) -> Box<Node> {
    Box::new(value.into())
}

#[inline]
fn lift_all<T: Into<Node>>(children: impl IntoIterator<Item = T>) -> Vec<Node> {
    children.into_iter().map(Into::into).collect()
}

impl Node {
    /// Create a leaf atom holding literal markup
    pub fn atom(text: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Atom(text.into()))
    }

    /// Create a text-mode leaf; the text is inserted verbatim
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Text(text.into()))
    }

    /// Create a text-mode leaf with LaTeX special characters escaped
    pub fn escaped_text(text: &str) -> Self {
        let mut escaped = String::with_capacity(text.len());
        escape_latex_text(text, &mut escaped);
        Self::from_kind(NodeKind::Text(escaped))
    }

    /// Create a sequence joined by single spaces
    pub fn sequence<T: Into<Node>>(children: impl IntoIterator<Item = T>) -> Self {
        Self::sequence_with_separator(children, DEFAULT_SEPARATOR)
    }

    /// Create a sequence joined by a custom separator
    pub fn sequence_with_separator<T: Into<Node>>(
        children: impl IntoIterator<Item = T>,
        separator: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::from_kind(NodeKind::Sequence {
            children: lift_all(children),
            separator: separator.into(),
        })
    }

    /// Create an equation: children joined by ` = `
    pub fn equation<T: Into<Node>>(children: impl IntoIterator<Item = T>) -> Self {
        Self::from_kind(NodeKind::Equation(lift_all(children)))
    }

    /// Create a power node; the base is never parenthesized
    pub fn power(base: impl Into<Node>, exponent: impl Into<Node>) -> Self {
        Self::from_kind(NodeKind::Power {
            base: boxed(base),
            exponent: boxed(exponent),
        })
    }

    /// Create a product joined by `\cdot`
    pub fn product<T: Into<Node>>(children: impl IntoIterator<Item = T>) -> Self {
        Self::product_with_glyph(children, DEFAULT_PRODUCT_GLYPH)
    }

    /// Create a product joined by a custom glyph such as `\times`
    pub fn product_with_glyph<T: Into<Node>>(
        children: impl IntoIterator<Item = T>,
        glyph: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::from_kind(NodeKind::Product {
            children: lift_all(children),
            glyph: glyph.into(),
        })
    }

    /// Create a sum joined by ` + `
    pub fn sum<T: Into<Node>>(children: impl IntoIterator<Item = T>) -> Self {
        Self::from_kind(NodeKind::Sum(lift_all(children)))
    }

    /// Create a fraction node
    pub fn fraction(numerator: impl Into<Node>, denominator: impl Into<Node>) -> Self {
        Self::from_kind(NodeKind::Fraction {
            numerator: boxed(numerator),
            denominator: boxed(denominator),
        })
    }

    /// Set a child in a named color
    pub fn colored(child: impl Into<Node>, color: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Colored {
            child: boxed(child),
            color: color.into(),
        })
    }

    /// Wrap a child in scalable parentheses
    pub fn parenthesized(child: impl Into<Node>) -> Self {
        Self::fenced(child, Fence::Paren, Fence::Paren)
    }

    /// Wrap a child in arbitrary scalable delimiters
    pub fn fenced(child: impl Into<Node>, open: Fence, close: Fence) -> Self {
        Self::from_kind(NodeKind::Parenthesized {
            child: boxed(child),
            open,
            close,
        })
    }

    /// Create a parenthesized, comma-separated tuple
    pub fn tuple<T: Into<Node>>(children: impl IntoIterator<Item = T>) -> Self {
        Self::tuple_with_fences(children, Fence::Paren, Fence::Paren)
    }

    /// Create a comma-separated tuple with custom delimiters
    pub fn tuple_with_fences<T: Into<Node>>(
        children: impl IntoIterator<Item = T>,
        open: Fence,
        close: Fence,
    ) -> Self {
        Self::from_kind(NodeKind::Tuple {
            children: lift_all(children),
            open,
            close,
        })
    }

    /// Create set-builder notation `{ element | filter }`
    pub fn set_builder(element: impl Into<Node>, filter: impl Into<Node>) -> Self {
        Self::from_kind(NodeKind::SetBuilder {
            element: boxed(element),
            filter: boxed(filter),
        })
    }

    /// Create a subscript node
    pub fn subscript(base: impl Into<Node>, subscript: impl Into<Node>) -> Self {
        Self::from_kind(NodeKind::Subscript {
            base: boxed(base),
            subscript: boxed(subscript),
        })
    }

    /// Set a child in calligraphic font
    pub fn calligraphic(child: impl Into<Node>) -> Self {
        Self::from_kind(NodeKind::Calligraphic(boxed(child)))
    }

    /// Create `P(event)`
    pub fn probability(event: impl Into<Node>) -> Self {
        Self::from_kind(NodeKind::Probability {
            event: boxed(event),
            condition: None,
        })
    }

    /// Create `P(event | condition)`
    pub fn probability_given(event: impl Into<Node>, condition: impl Into<Node>) -> Self {
        Self::from_kind(NodeKind::Probability {
            event: boxed(event),
            condition: Some(boxed(condition)),
        })
    }

    /// Create a square root node
    pub fn sqrt(radicand: impl Into<Node>) -> Self {
        Self::from_kind(NodeKind::Root {
            radicand: boxed(radicand),
            index: None,
        })
    }

    /// Create an nth root node
    pub fn root(radicand: impl Into<Node>, index: impl Into<Node>) -> Self {
        Self::from_kind(NodeKind::Root {
            radicand: boxed(radicand),
            index: Some(boxed(index)),
        })
    }

    /// Create a named environment with one child per line
    pub fn environment<T: Into<Node>>(
        name: impl Into<String>,
        children: impl IntoIterator<Item = T>,
    ) -> Self {
        Self::from_kind(NodeKind::Environment {
            name: name.into(),
            children: lift_all(children),
        })
    }

    /// Create an `align` environment
    pub fn align<T: Into<Node>>(children: impl IntoIterator<Item = T>) -> Self {
        Self::environment("align", children)
    }

    /// Create a bulleted or numbered list.
    ///
    /// Plain strings become text items; nodes become inline or display math
    /// items according to their [`content kind`](Node::content_kind).
    pub fn list<T: Into<Content>>(style: ListStyle, items: impl IntoIterator<Item = T>) -> Self {
        Self::from_kind(NodeKind::List {
            style,
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a matrix node, validating that the grid is rectangular
    pub fn matrix<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        Matrix::new(rows).map(Node::from)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::atom(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::atom(text)
    }
}

impl From<&String> for Node {
    fn from(text: &String) -> Self {
        Node::atom(text.as_str())
    }
}

impl From<Cow<'_, str>> for Node {
    fn from(text: Cow<'_, str>) -> Self {
        Node::atom(text.into_owned())
    }
}

impl From<char> for Node {
    fn from(ch: char) -> Self {
        Node::atom(ch.to_string())
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}

impl From<Matrix> for Node {
    fn from(matrix: Matrix) -> Self {
        Node::from_kind(NodeKind::Matrix(matrix))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    let mut buffer = itoa::Buffer::new();
                    Node::atom(buffer.format(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Format a float for markup: integral values drop the `.0` suffix and
/// infinities become `\infty`.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "\\mathrm{NaN}".to_string();
    }
    if value.is_infinite() {
        let infinity = if value > 0.0 { "\\infty" } else { "-\\infty" };
        return infinity.to_string();
    }
    let mut buffer = ryu::Buffer::new();
    let formatted = buffer.format_finite(value);
    formatted.strip_suffix(".0").unwrap_or(formatted).to_string()
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::atom(format_float(value))
    }
}

impl From<f32> for Node {
    fn from(value: f32) -> Self {
        // Go through the shortest f32 representation so 0.1f32 stays "0.1"
        if value.is_finite() {
            let mut buffer = ryu::Buffer::new();
            let formatted = buffer.format_finite(value);
            Node::atom(formatted.strip_suffix(".0").unwrap_or(formatted))
        } else {
            Node::atom(format_float(f64::from(value)))
        }
    }
}
