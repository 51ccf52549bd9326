//! Markdown wrapping for rendered markup.
//!
//! Rendering produces bare LaTeX. A presentation layer that places it in a
//! Markdown document needs to know whether a fragment is text, inline math or
//! display math, and which delimiters to use. This module carries that
//! contract.
//!
//! # Quick Start
//!
//! ```rust
//! use texgen::Node;
//! use texgen::markdown::{FormulaStyle, MarkdownOptions, ToMarkdown};
//!
//! let expr = Node::from("x").pow(2);
//! assert_eq!(expr.to_markdown(), "$x^{2}$");
//!
//! let options = MarkdownOptions::new().with_formula_style(FormulaStyle::LaTeX);
//! assert_eq!(expr.to_markdown_with_options(&options), "\\(x^{2}\\)");
//! ```
//!
//! # Architecture
//!
//! - [`ToMarkdown`] trait: wraps a rendering according to its content kind
//! - [`MarkdownOptions`]: configuration for delimiters and list markers
//! - [`Content`]: content-kind tagged fragments, used by list blocks

// Module declarations
mod config;
mod content;
mod traits;

// Re-export public API
pub use config::{FormulaStyle, MarkdownOptions};
pub use content::Content;
pub use traits::ToMarkdown;

use crate::node::ContentKind;

/// Format a formula with the appropriate delimiters.
///
/// # Arguments
/// * `options` - Options selecting the delimiter style
/// * `formula` - The formula content (LaTeX)
/// * `inline` - Whether this is an inline formula (true) or display formula (false)
pub fn format_formula(options: &MarkdownOptions, formula: &str, inline: bool) -> String {
    let kind = if inline {
        ContentKind::InlineMath
    } else {
        ContentKind::DisplayMath
    };
    let (open, close) = options.formula_style.delimiters(kind);

    let mut output = String::with_capacity(formula.len() + open.len() + close.len());
    output.push_str(open);
    output.push_str(formula);
    output.push_str(close);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_formula() {
        let options = MarkdownOptions::default();
        assert_eq!(format_formula(&options, "x", true), "$x$");
        assert_eq!(format_formula(&options, "x", false), "$$x$$");

        let options = options.with_formula_style(FormulaStyle::LaTeX);
        assert_eq!(format_formula(&options, "x", true), "\\(x\\)");
        assert_eq!(format_formula(&options, "x", false), "\\[x\\]");
    }
}
