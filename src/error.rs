//! Errors raised while writing the diagram to disk.
//!
//! Frame generation and the clock cannot fail; only exports return
//! [`ExportError`].

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("gif encoding failed: {0}")]
    Gif(#[from] gif::EncodingError),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Zero-sized canvas, or too large for the target format.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
