use serde::{Deserialize, Serialize};

/// Fence types for delimited expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Fence {
    #[default]
    Paren,      // ( )
    Bracket,    // [ ]
    Brace,      // { }
    Angle,      // ⟨ ⟩
    Pipe,       // | |
    DoublePipe, // ‖ ‖
    Floor,      // ⌊ ⌋
    Ceiling,    // ⌈ ⌉
    None,       // No fence
}

/// Matrix fence types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatrixFence {
    None,       // No fence
    Paren,      // ( )
    #[default]
    Bracket,    // [ ]
    Brace,      // { }
    Pipe,       // | |
    DoublePipe, // ‖ ‖
}

/// Marker style for list blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ListStyle {
    /// `- item`
    #[default]
    Bulleted,
    /// `1. item`, `2. item`, ...
    Numbered,
}

/// How a rendered fragment has to be delimited by a presentation layer.
///
/// Math content needs inline (`$...$`) or display (`$$...$$`) delimiters;
/// text content is emitted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    /// Non-math markup, emitted without delimiters
    Text,
    /// Math set inline with surrounding text
    InlineMath,
    /// Math set on its own line
    DisplayMath,
}

impl ContentKind {
    /// Returns true for both inline and display math.
    #[inline]
    pub fn is_math(self) -> bool {
        !matches!(self, ContentKind::Text)
    }
}
