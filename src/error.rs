use thiserror::Error;

use crate::generators::Algorithm;
use crate::render::Format;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Unsupported algorithm '{name}' (supported: {})", Algorithm::SUPPORTED.join(", "))]
    UnknownAlgorithm { name: String },

    #[error("Unsupported format '{name}' (supported: {})", Format::SUPPORTED.join(", "))]
    UnknownFormat { name: String },

    #[error("Size must be at least {min}, got {size}")]
    SizeTooSmall { size: usize, min: usize },

    #[error("Size must be odd, got {size}")]
    SizeNotOdd { size: usize },

    #[error("Size must be at most {max}, got {size}")]
    SizeTooLarge { size: usize, max: usize },

    /// A hand-built grid is empty, ragged, or has start/goal outside it.
    #[error("Invalid maze grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("Failed to serialize maze: {0}")]
    Json(#[from] serde_json::Error),
}
