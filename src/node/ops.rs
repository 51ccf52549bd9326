// Composition operators
//
// `a + b`, `a * b` and `a / b` each add exactly one level to the tree:
// operands are never flattened into an existing sum or product, so
// `(a + b) + c` is a sum whose first term is itself a sum.

use super::Node;
use std::ops::{Add, Div, Mul};

/// Build `Sum[left, right]`
#[inline]
pub fn add(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    Node::sum([left.into(), right.into()])
}

/// Build `Product[left, right]`
#[inline]
pub fn multiply(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    Node::product([left.into(), right.into()])
}

/// Build `Fraction(numerator, denominator)`
#[inline]
pub fn divide(numerator: impl Into<Node>, denominator: impl Into<Node>) -> Node {
    Node::fraction(numerator, denominator)
}

/// Build `Power(base, exponent)`
#[inline]
pub fn power(base: impl Into<Node>, exponent: impl Into<Node>) -> Node {
    Node::power(base, exponent)
}

impl Node {
    /// Raise this node to a power; the method form of [`power`]
    #[inline]
    pub fn pow(self, exponent: impl Into<Node>) -> Node {
        Node::power(self, exponent)
    }
}

impl<T: Into<Node>> Add<T> for Node {
    type Output = Node;

    fn add(self, rhs: T) -> Node {
        add(self, rhs)
    }
}

impl<T: Into<Node>> Add<T> for &Node {
    type Output = Node;

    fn add(self, rhs: T) -> Node {
        add(self.clone(), rhs)
    }
}

impl<T: Into<Node>> Mul<T> for Node {
    type Output = Node;

    fn mul(self, rhs: T) -> Node {
        multiply(self, rhs)
    }
}

impl<T: Into<Node>> Mul<T> for &Node {
    type Output = Node;

    fn mul(self, rhs: T) -> Node {
        multiply(self.clone(), rhs)
    }
}

impl<T: Into<Node>> Div<T> for Node {
    type Output = Node;

    fn div(self, rhs: T) -> Node {
        divide(self, rhs)
    }
}

impl<T: Into<Node>> Div<T> for &Node {
    type Output = Node;

    fn div(self, rhs: T) -> Node {
        divide(self.clone(), rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn a() -> Node {
        Node::from("a")
    }

    #[test]
    fn test_add_builds_binary_sum() {
        let node = a() + "b";
        assert_eq!(node, Node::sum(["a", "b"]));
        assert_eq!(node.render(), "a + b");
    }

    #[test]
    fn test_add_does_not_flatten() {
        let node = (a() + "b") + "c";
        match node.kind() {
            NodeKind::Sum(children) => {
                assert_eq!(children.len(), 2);
                assert_eq!(children[0], Node::sum(["a", "b"]));
                assert_eq!(children[1], Node::from("c"));
            },
            other => panic!("Expected sum node, got {other:?}"),
        }
        assert_eq!(node.render(), "a + b + c");
    }

    #[test]
    fn test_mul_does_not_flatten() {
        let node = (a() * "b") * "c";
        match node.kind() {
            NodeKind::Product { children, .. } => assert_eq!(children.len(), 2),
            other => panic!("Expected product node, got {other:?}"),
        }
        assert_eq!(node.render(), "a \\cdot b \\cdot c");
    }

    #[test]
    fn test_mul_parenthesizes_sum_operand() {
        let node = (a() + "b") * "c";
        assert_eq!(node.render(), "\\left( a + b \\right) \\cdot c");
        let node = Node::from("c") * (a() + "b");
        assert_eq!(node.render(), "c \\cdot \\left( a + b \\right)");
    }

    #[test]
    fn test_div_and_pow() {
        assert_eq!((a() / "b").render(), "\\frac{a}{b}");
        assert_eq!(a().pow(2).render(), "a^{2}");
        assert_eq!((a() + "b").pow("c").render(), "a + b^{c}");
    }

    #[test]
    fn test_borrowed_operands() {
        let x = Node::from("x");
        let y = Node::from("y");
        assert_eq!((&x + &y).render(), "x + y");
        assert_eq!((&x * &y).render(), "x \\cdot y");
        assert_eq!((&x / &y).render(), "\\frac{x}{y}");
        assert_eq!(x.render(), "x");
    }

    #[test]
    fn test_free_functions_match_operators() {
        assert_eq!(add("a", "b"), a() + "b");
        assert_eq!(multiply("a", "b"), a() * "b");
        assert_eq!(divide("a", "b"), a() / "b");
        assert_eq!(power("a", "b"), a().pow("b"));
    }
}
