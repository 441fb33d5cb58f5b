//! Error types for shape upload

use std::fmt;

/// Error raised while uploading shape geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Position and colour arrays differ in length
    LengthMismatch { positions: usize, colors: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::LengthMismatch { positions, colors } => write!(
                f,
                "Positions and colors not the same length ({} positions, {} colors)",
                positions, colors
            ),
        }
    }
}

impl std::error::Error for ShapeError {}
