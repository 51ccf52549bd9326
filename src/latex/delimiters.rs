// Delimiter and environment tables

use crate::node::{Fence, MatrixFence};

/// Convert a fence to its scalable `\left` / `\right` form
pub fn fence_to_latex(fence: Fence, is_open: bool) -> &'static str {
    match (fence, is_open) {
        (Fence::Paren, true) => "\\left(",
        (Fence::Paren, false) => "\\right)",
        (Fence::Bracket, true) => "\\left[",
        (Fence::Bracket, false) => "\\right]",
        (Fence::Brace, true) => "\\left\\{",
        (Fence::Brace, false) => "\\right\\}",
        (Fence::Angle, true) => "\\left\\langle",
        (Fence::Angle, false) => "\\right\\rangle",
        (Fence::Pipe, true) => "\\left|",
        (Fence::Pipe, false) => "\\right|",
        (Fence::DoublePipe, true) => "\\left\\|",
        (Fence::DoublePipe, false) => "\\right\\|",
        (Fence::Floor, true) => "\\left\\lfloor",
        (Fence::Floor, false) => "\\right\\rfloor",
        (Fence::Ceiling, true) => "\\left\\lceil",
        (Fence::Ceiling, false) => "\\right\\rceil",
        (Fence::None, true) => "\\left.",
        (Fence::None, false) => "\\right.",
    }
}

/// Convert matrix fence type to LaTeX environment name
#[inline]
pub fn matrix_fence_to_env(fence_type: MatrixFence) -> &'static str {
    match fence_type {
        MatrixFence::None => "matrix",
        MatrixFence::Paren => "pmatrix",
        MatrixFence::Bracket => "bmatrix",
        MatrixFence::Brace => "Bmatrix",
        MatrixFence::Pipe => "vmatrix",
        MatrixFence::DoublePipe => "Vmatrix",
    }
}
