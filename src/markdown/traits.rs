//! Core trait for Markdown conversion.
//!
//! This module defines the `ToMarkdown` trait that wraps rendered markup in
//! the delimiters its content kind requires.

use super::config::MarkdownOptions;
use super::content::Content;
use super::format_formula;
use crate::node::{ContentKind, Node};

/// Core trait for types that can be placed in Markdown.
///
/// # Examples
///
/// ```rust
/// use texgen::Node;
/// use texgen::markdown::ToMarkdown;
///
/// let expr = Node::fraction("a", "b");
/// assert_eq!(expr.to_markdown(), "$\\frac{a}{b}$");
/// ```
pub trait ToMarkdown {
    /// Convert this item to Markdown with default options.
    fn to_markdown(&self) -> String {
        self.to_markdown_with_options(&MarkdownOptions::default())
    }

    /// Convert this item to Markdown with custom options.
    ///
    /// # Arguments
    ///
    /// * `options` - Configuration for the conversion
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> String;
}

impl ToMarkdown for Node {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> String {
        let body = self.render_with_options(options);
        let kind = self.content_kind();
        if kind.is_math() {
            format_formula(options, &body, kind == ContentKind::InlineMath)
        } else {
            body
        }
    }
}

impl ToMarkdown for Content {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Block(node) => node.render_with_options(options),
            Content::InlineMath(node) => {
                format_formula(options, &node.render_with_options(options), true)
            },
            Content::DisplayMath(node) => {
                format_formula(options, &node.render_with_options(options), false)
            },
        }
    }
}
