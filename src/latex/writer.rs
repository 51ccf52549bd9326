// LaTeX writer
//
// Walks a node tree and appends each variant's template to a single output
// buffer. Only product operands and subscript bases go through the
// parenthesized form; every other child is written raw.

use super::delimiters::{fence_to_latex, matrix_fence_to_env};
use crate::markdown::{Content, MarkdownOptions};
use crate::matrix::Matrix;
use crate::node::{ListStyle, Node, NodeKind};

/// Writer that renders node trees to LaTeX strings
///
/// Rendering cannot fail; the writer only accumulates output.
#[derive(Debug, Clone)]
pub struct LatexWriter {
    /// Output buffer
    buffer: String,
    /// Options for content that is delimited inside the output (list items)
    options: MarkdownOptions,
}

impl LatexWriter {
    /// Create a new writer with default options
    pub fn new() -> Self {
        Self::with_options(MarkdownOptions::default())
    }

    /// Create a new writer with custom options
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self {
            buffer: String::with_capacity(256),
            options,
        }
    }

    /// Get the current buffer content without clearing
    #[inline]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Clear the buffer for a new rendering
    #[inline]
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Consume the writer, returning the rendered output
    #[inline]
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Append the raw rendering of a node
    pub fn write_node(&mut self, node: &Node) {
        match node.kind() {
            NodeKind::Atom(text) => self.buffer.push_str(text),
            NodeKind::Text(text) => {
                self.buffer.push_str("\\text{");
                self.buffer.push_str(text);
                self.buffer.push('}');
            },
            NodeKind::Sequence {
                children,
                separator,
            } => self.write_joined(separator, children),
            NodeKind::Equation(children) => self.write_joined(" = ", children),
            NodeKind::Power { base, exponent } => {
                self.write_node(base);
                self.buffer.push_str("^{");
                self.write_node(exponent);
                self.buffer.push('}');
            },
            NodeKind::Product { children, glyph } => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        self.buffer.push(' ');
                        self.buffer.push_str(glyph);
                        self.buffer.push(' ');
                    }
                    self.write_parenthesized(child);
                }
            },
            NodeKind::Sum(children) => self.write_joined(" + ", children),
            NodeKind::Fraction {
                numerator,
                denominator,
            } => {
                self.buffer.push_str("\\frac{");
                self.write_node(numerator);
                self.buffer.push_str("}{");
                self.write_node(denominator);
                self.buffer.push('}');
            },
            NodeKind::Colored { child, color } => {
                self.buffer.push_str("{\\color{");
                self.buffer.push_str(color);
                self.buffer.push('}');
                self.write_node(child);
                self.buffer.push('}');
            },
            NodeKind::Parenthesized { child, open, close } => {
                self.buffer.push_str(fence_to_latex(*open, true));
                self.buffer.push(' ');
                self.write_node(child);
                self.buffer.push(' ');
                self.buffer.push_str(fence_to_latex(*close, false));
            },
            NodeKind::Tuple {
                children,
                open,
                close,
            } => {
                self.buffer.push_str(fence_to_latex(*open, true));
                self.buffer.push(' ');
                self.write_joined(", ", children);
                self.buffer.push(' ');
                self.buffer.push_str(fence_to_latex(*close, false));
            },
            NodeKind::SetBuilder { element, filter } => {
                self.buffer.push_str("\\left\\{ ");
                self.write_node(element);
                self.buffer.push_str(" \\mid ");
                self.write_node(filter);
                self.buffer.push_str(" \\right\\}");
            },
            NodeKind::Subscript { base, subscript } => {
                self.write_parenthesized(base);
                self.buffer.push_str("_{");
                self.write_node(subscript);
                self.buffer.push('}');
            },
            NodeKind::Calligraphic(child) => {
                self.buffer.push_str("\\mathcal{");
                self.write_node(child);
                self.buffer.push('}');
            },
            NodeKind::Probability { event, condition } => {
                self.buffer.push_str("\\mathrm{P}\\left( ");
                self.write_node(event);
                if let Some(condition) = condition {
                    self.buffer.push_str("\\mid ");
                    self.write_node(condition);
                }
                self.buffer.push_str(" \\right)");
            },
            NodeKind::Root { radicand, index } => {
                if let Some(index) = index {
                    self.buffer.push_str("\\sqrt[");
                    self.write_node(index);
                    self.buffer.push_str("]{");
                } else {
                    self.buffer.push_str("\\sqrt{");
                }
                self.write_node(radicand);
                self.buffer.push('}');
            },
            NodeKind::Environment { name, children } => {
                self.write_begin(name);
                self.write_joined("\\\\\n", children);
                self.write_end(name);
            },
            NodeKind::List { style, items } => self.write_list(*style, items),
            NodeKind::Matrix(matrix) => self.write_matrix(matrix),
        }
    }

    /// Append a node wrapped in `\left( ... \right)` when it needs
    /// parentheses, otherwise its raw rendering
    pub fn write_parenthesized(&mut self, node: &Node) {
        if node.needs_parens() {
            self.buffer.push_str("\\left( ");
            self.write_node(node);
            self.buffer.push_str(" \\right)");
        } else {
            self.write_node(node);
        }
    }

    /// Append the raw renderings of `nodes` with `separator` between them
    pub fn write_joined(&mut self, separator: &str, nodes: &[Node]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.buffer.push_str(separator);
            }
            self.write_node(node);
        }
    }

    fn write_begin(&mut self, name: &str) {
        self.buffer.push_str("\\begin{");
        self.buffer.push_str(name);
        self.buffer.push_str("}\n");
    }

    fn write_end(&mut self, name: &str) {
        self.buffer.push_str("\n\\end{");
        self.buffer.push_str(name);
        self.buffer.push('}');
    }

    fn write_matrix(&mut self, matrix: &Matrix) {
        let env = matrix_fence_to_env(matrix.fence());

        self.write_begin(env);
        for (i, row) in matrix.rows().enumerate() {
            if i > 0 {
                self.buffer.push_str("\\\\\n");
            }
            self.write_joined(" & ", row);
        }
        self.write_end(env);
    }

    fn write_list(&mut self, style: ListStyle, items: &[Content]) {
        let mut number = itoa::Buffer::new();

        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.buffer.push('\n');
            }
            let marker_start = self.buffer.len();
            match style {
                ListStyle::Bulleted => self.buffer.push(self.options.list_marker),
                ListStyle::Numbered => {
                    self.buffer.push_str(number.format(i + 1));
                    self.buffer.push('.');
                },
            }
            self.buffer.push(' ');
            let indent = self.buffer[marker_start..].chars().count();

            let item_start = self.buffer.len();
            self.write_content(item);
            self.indent_continuation_lines(item_start, indent);
        }
    }

    fn write_content(&mut self, content: &Content) {
        match content {
            Content::Text(text) => self.buffer.push_str(text),
            Content::Block(node) => self.write_node(node),
            Content::InlineMath(node) | Content::DisplayMath(node) => {
                let (open, close) = self.options.formula_style.delimiters(content.kind());
                self.buffer.push_str(open);
                self.write_node(node);
                self.buffer.push_str(close);
            },
        }
    }

    /// Indent every line after the first one written since `start`, so a
    /// multi-line item stays inside its list item
    fn indent_continuation_lines(&mut self, start: usize, indent: usize) {
        if memchr::memchr(b'\n', &self.buffer.as_bytes()[start..]).is_none() {
            return;
        }

        let item = self.buffer.split_off(start);
        for (i, line) in item.split('\n').enumerate() {
            if i > 0 {
                self.buffer.push('\n');
                self.buffer.extend(std::iter::repeat_n(' ', indent));
            }
            self.buffer.push_str(line);
        }
    }
}

impl Default for LatexWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::FormulaStyle;
    use crate::node::{Fence, MatrixFence};

    fn render(node: &Node) -> String {
        let mut writer = LatexWriter::new();
        writer.write_node(node);
        writer.finish()
    }

    #[test]
    fn test_atom_renders_verbatim() {
        assert_eq!(render(&Node::atom("\\alpha_1")), "\\alpha_1");
        assert_eq!(render(&Node::atom("")), "");
    }

    #[test]
    fn test_text() {
        assert_eq!(render(&Node::text("if")), "\\text{if}");
    }

    #[test]
    fn test_sequence_and_equation() {
        assert_eq!(render(&Node::sequence(["a", "b", "c"])), "a b c");
        assert_eq!(
            render(&Node::sequence_with_separator(["a", "b"], ", ")),
            "a, b"
        );
        assert_eq!(render(&Node::equation(["y", "mx + c"])), "y = mx + c");
    }

    #[test]
    fn test_product_parenthesizes_only_flagged_operands() {
        let node = Node::product([Node::sum(["a", "b"]), Node::from("c")]);
        assert_eq!(render(&node), "\\left( a + b \\right) \\cdot c");

        let node = Node::product(["a", "b", "c"]);
        assert_eq!(render(&node), "a \\cdot b \\cdot c");

        let node = Node::product([Node::sum(["a"]), Node::from("c")]);
        assert_eq!(render(&node), "a \\cdot c");
    }

    #[test]
    fn test_product_custom_glyph() {
        let node = Node::product_with_glyph(["a", "b"], "\\times");
        assert_eq!(render(&node), "a \\times b");
    }

    #[test]
    fn test_power_never_parenthesizes_base() {
        let node = Node::power(Node::sum(["a", "b"]), "c");
        assert_eq!(render(&node), "a + b^{c}");
        let node = Node::power("x", Node::sum(["n", "1"]));
        assert_eq!(render(&node), "x^{n + 1}");
    }

    #[test]
    fn test_fraction_renders_raw_operands() {
        assert_eq!(render(&Node::fraction("a", "b")), "\\frac{a}{b}");
        let node = Node::fraction(Node::sum(["a", "b"]), Node::sum(["c", "d"]));
        assert_eq!(render(&node), "\\frac{a + b}{c + d}");
    }

    #[test]
    fn test_colored() {
        assert_eq!(
            render(&Node::colored("x", "red")),
            "{\\color{red}x}"
        );
    }

    #[test]
    fn test_parenthesized() {
        assert_eq!(
            render(&Node::parenthesized("x")),
            "\\left( x \\right)"
        );
        assert_eq!(
            render(&Node::fenced("x", Fence::Bracket, Fence::Paren)),
            "\\left[ x \\right)"
        );
    }

    #[test]
    fn test_tuple() {
        assert_eq!(
            render(&Node::tuple(["a", "b", "c"])),
            "\\left( a, b, c \\right)"
        );
        assert_eq!(
            render(&Node::tuple_with_fences(["u", "v"], Fence::Angle, Fence::Angle)),
            "\\left\\langle u, v \\right\\rangle"
        );
    }

    #[test]
    fn test_set_builder() {
        let node = Node::set_builder("x", "x > 0");
        assert_eq!(render(&node), "\\left\\{ x \\mid x > 0 \\right\\}");
    }

    #[test]
    fn test_subscript_parenthesizes_base_when_needed() {
        assert_eq!(render(&Node::subscript("x", "i")), "x_{i}");
        let node = Node::subscript(Node::sum(["a", "b"]), Node::sum(["i", "1"]));
        assert_eq!(render(&node), "\\left( a + b \\right)_{i + 1}");
    }

    #[test]
    fn test_calligraphic() {
        assert_eq!(render(&Node::calligraphic("F")), "\\mathcal{F}");
    }

    #[test]
    fn test_probability() {
        assert_eq!(
            render(&Node::probability("A")),
            "\\mathrm{P}\\left( A \\right)"
        );
        assert_eq!(
            render(&Node::probability_given("A", "B")),
            "\\mathrm{P}\\left( A\\mid B \\right)"
        );
    }

    #[test]
    fn test_mid_spacing_differs_between_probability_and_set_builder() {
        let given = render(&Node::probability_given("A", "B"));
        let set = render(&Node::set_builder("A", "B"));
        assert_eq!(given, "\\mathrm{P}\\left( A\\mid B \\right)");
        assert_eq!(set, "\\left\\{ A \\mid B \\right\\}");
        assert!(given.contains("A\\mid B"));
        assert!(set.contains("A \\mid B"));
    }

    #[test]
    fn test_root() {
        assert_eq!(render(&Node::sqrt("a")), "\\sqrt{a}");
        assert_eq!(render(&Node::root("a", "n")), "\\sqrt[n]{a}");
    }

    #[test]
    fn test_environment() {
        let node = Node::align(["a &= b", "c &= d"]);
        assert_eq!(
            render(&node),
            "\\begin{align}\na &= b\\\\\nc &= d\n\\end{align}"
        );
        let node = Node::environment("gather", ["x"]);
        assert_eq!(render(&node), "\\begin{gather}\nx\n\\end{gather}");
    }

    #[test]
    fn test_matrix() {
        let node = Node::matrix([["a", "b"], ["c", "d"]]).unwrap();
        assert_eq!(
            render(&node),
            "\\begin{bmatrix}\na & b\\\\\nc & d\n\\end{bmatrix}"
        );
    }

    #[test]
    fn test_matrix_fence() {
        let matrix = Matrix::new([["1", "0"]]).unwrap().with_fence(MatrixFence::Pipe);
        assert_eq!(
            render(&Node::from(matrix)),
            "\\begin{vmatrix}\n1 & 0\n\\end{vmatrix}"
        );
    }

    #[test]
    fn test_bulleted_list() {
        let node = Node::list(
            ListStyle::Bulleted,
            [
                Content::text("Let"),
                Content::inline(Node::from("x")),
                Content::display(Node::fraction("1", "2")),
            ],
        );
        assert_eq!(render(&node), "- Let\n- $x$\n- $$\\frac{1}{2}$$");
    }

    #[test]
    fn test_numbered_list_with_latex_delimiters() {
        let node = Node::list(ListStyle::Numbered, [Node::from("a"), Node::from("b")]);
        let options = MarkdownOptions::new().with_formula_style(FormulaStyle::LaTeX);
        let mut writer = LatexWriter::with_options(options);
        writer.write_node(&node);
        assert_eq!(writer.buffer(), "1. \\(a\\)\n2. \\(b\\)");
    }

    #[test]
    fn test_nested_list_uses_writer_options() {
        let options = MarkdownOptions::new()
            .with_formula_style(FormulaStyle::LaTeX)
            .with_list_marker('*');

        let node = Node::list(ListStyle::Bulleted, [Node::list(ListStyle::Bulleted, ["a"])]);
        assert_eq!(node.render_with_options(&options), "* * a");

        let node = Node::list(
            ListStyle::Bulleted,
            [Node::list(ListStyle::Bulleted, [Node::from("x")])],
        );
        assert_eq!(node.render_with_options(&options), "* * \\(x\\)");
        assert_eq!(node.render(), "- - $x$");
    }

    #[test]
    fn test_nested_list_lines_are_indented() {
        let inner = Node::list(ListStyle::Bulleted, ["a", "b"]);
        let node = Node::list(
            ListStyle::Numbered,
            [Content::text("first"), Content::from(inner)],
        );
        assert_eq!(render(&node), "1. first\n2. - a\n   - b");

        let deeper = Node::list(
            ListStyle::Bulleted,
            [Node::list(ListStyle::Bulleted, [Node::list(ListStyle::Bulleted, ["p", "q"])])],
        );
        assert_eq!(render(&deeper), "- - - p\n    - q");

        let options = MarkdownOptions::new().with_list_marker('•');
        let node = Node::list(ListStyle::Bulleted, [Node::list(ListStyle::Bulleted, ["a", "b"])]);
        assert_eq!(node.render_with_options(&options), "• • a\n  • b");
    }

    #[test]
    fn test_display_item_continuation_lines_are_indented() {
        let node = Node::list(ListStyle::Bulleted, [Node::align(["a &= b", "c &= d"])]);
        assert_eq!(
            render(&node),
            "- $$\\begin{align}\n  a &= b\\\\\n  c &= d\n  \\end{align}$$"
        );
    }

    #[test]
    fn test_write_joined_edge_cases() {
        let mut writer = LatexWriter::new();
        writer.write_joined(" + ", &[]);
        assert_eq!(writer.buffer(), "");

        writer.reset();
        writer.write_joined(" + ", &[Node::from("a")]);
        assert_eq!(writer.buffer(), "a");

        writer.reset();
        writer.write_joined(" + ", &[Node::from("a"), Node::from("b")]);
        assert_eq!(writer.buffer(), "a + b");
    }
}
