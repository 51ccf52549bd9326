// LaTeX rendering
//
// Node trees are rendered by a single buffered writer. The helpers here are
// the pieces other modules share: delimiter tables, text escaping and the
// join operation used wherever children are separated.

mod delimiters;
pub(crate) mod utils;
mod writer;

pub use delimiters::{fence_to_latex, matrix_fence_to_env};
pub use utils::escape_latex_text;
pub use writer::LatexWriter;

use crate::node::Node;

/// Join the renderings of `children` with `separator` into a single atom.
///
/// No separator is emitted before the first or after the last child, so an
/// empty slice yields an empty atom and a single child renders unchanged.
///
/// # Example
/// ```
/// use texgen::{join, Node};
///
/// let terms = [Node::from("a"), Node::fraction("b", "c")];
/// assert_eq!(join(" + ", &terms).render(), "a + \\frac{b}{c}");
/// assert_eq!(join(" + ", &[]).render(), "");
/// ```
pub fn join(separator: &str, children: &[Node]) -> Node {
    let mut writer = LatexWriter::new();
    writer.write_joined(separator, children);
    Node::atom(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_join_empty() {
        assert_eq!(join(", ", &[]).render(), "");
    }

    #[test]
    fn test_join_single_child_is_unchanged() {
        let child = Node::sqrt("x");
        assert_eq!(join(" + ", &[child.clone()]).render(), child.render());
    }

    #[test]
    fn test_join_returns_atom() {
        let joined = join(" + ", &[Node::from("a"), Node::from("b")]);
        assert!(joined.is_atom());
        assert!(!joined.needs_parens());
        assert_eq!(joined.render(), "a + b");
    }

    /// Strategy for atom text without the separator used below
    fn atom_text_strategy() -> impl Strategy<Value = String> {
        "[a-z0-9\\\\^{}]{1,8}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_join_has_one_separator_between_children(
            texts in prop::collection::vec(atom_text_strategy(), 0..8)
        ) {
            let children: Vec<Node> = texts.iter().map(Node::from).collect();
            let rendered = join(" | ", &children).render();

            prop_assert_eq!(&rendered, &texts.join(" | "));
            prop_assert_eq!(
                rendered.matches(" | ").count(),
                texts.len().saturating_sub(1)
            );
        }

        #[test]
        fn prop_lifted_text_renders_exactly(text in ".{0,32}") {
            let node = crate::lift(text.as_str());
            prop_assert!(node.is_atom());
            prop_assert_eq!(node.render(), text);
        }
    }
}
