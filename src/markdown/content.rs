//! Content-tagged fragments.
//!
//! A [`Content`] value pairs a payload with the way it has to be delimited
//! when placed in Markdown: raw text, inline math or display math.

use crate::node::{ContentKind, Node};

/// A fragment of a list block or document, tagged with its content kind
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Raw text, emitted without delimiters
    Text(String),
    /// Math set inline
    InlineMath(Node),
    /// Math set on its own line
    DisplayMath(Node),
    /// A text-kind node (such as a nested list), rendered with the options
    /// of the block that contains it
    Block(Node),
}

impl Content {
    /// Create a raw text fragment
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    /// Create an inline math fragment
    pub fn inline(node: impl Into<Node>) -> Self {
        Content::InlineMath(node.into())
    }

    /// Create a display math fragment
    pub fn display(node: impl Into<Node>) -> Self {
        Content::DisplayMath(node.into())
    }

    /// Get the content kind tag
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Text(_) | Content::Block(_) => ContentKind::Text,
            Content::InlineMath(_) => ContentKind::InlineMath,
            Content::DisplayMath(_) => ContentKind::DisplayMath,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

/// Nodes are tagged by their own content kind; text-kind nodes stay nodes
/// until the enclosing block is written.
impl From<Node> for Content {
    fn from(node: Node) -> Self {
        match node.content_kind() {
            ContentKind::Text => Content::Block(node),
            ContentKind::InlineMath => Content::InlineMath(node),
            ContentKind::DisplayMath => Content::DisplayMath(node),
        }
    }
}
