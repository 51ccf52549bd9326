//! Configuration types for Markdown wrapping.
//!
//! This module defines the options a presentation layer uses to delimit
//! rendered math inside Markdown, and that list blocks use for their items.

use crate::node::ContentKind;
use serde::{Deserialize, Serialize};

/// Configuration options for Markdown output.
///
/// # Examples
///
/// ```rust
/// use texgen::markdown::{FormulaStyle, MarkdownOptions};
///
/// // Create with defaults
/// let options = MarkdownOptions::default();
///
/// // Or customize
/// let options = MarkdownOptions::new()
///     .with_formula_style(FormulaStyle::LaTeX)
///     .with_list_marker('*');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Delimiters placed around math content
    pub formula_style: FormulaStyle,
    /// Marker character for bulleted list items
    pub list_marker: char,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            formula_style: FormulaStyle::Dollar,
            list_marker: '-',
        }
    }
}

impl MarkdownOptions {
    /// Create a new `MarkdownOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formula delimiter style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texgen::markdown::{FormulaStyle, MarkdownOptions};
    ///
    /// let options = MarkdownOptions::new().with_formula_style(FormulaStyle::LaTeX);
    /// assert_eq!(options.formula_style, FormulaStyle::LaTeX);
    /// ```
    #[inline]
    pub fn with_formula_style(mut self, style: FormulaStyle) -> Self {
        self.formula_style = style;
        self
    }

    /// Set the marker for bulleted list items (`-`, `*` or `+`).
    #[inline]
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }
}

/// Delimiter styles for math inside Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormulaStyle {
    /// `$...$` inline, `$$...$$` display
    #[default]
    Dollar,
    /// `\(...\)` inline, `\[...\]` display
    LaTeX,
}

impl FormulaStyle {
    /// Opening and closing delimiters for content of the given kind.
    ///
    /// Text content gets empty delimiters.
    pub fn delimiters(self, kind: ContentKind) -> (&'static str, &'static str) {
        match (self, kind) {
            (_, ContentKind::Text) => ("", ""),
            (FormulaStyle::Dollar, ContentKind::InlineMath) => ("$", "$"),
            (FormulaStyle::Dollar, ContentKind::DisplayMath) => ("$$", "$$"),
            (FormulaStyle::LaTeX, ContentKind::InlineMath) => ("\\(", "\\)"),
            (FormulaStyle::LaTeX, ContentKind::DisplayMath) => ("\\[", "\\]"),
        }
    }
}
