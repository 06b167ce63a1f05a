//! Renderer error type.

use lumen_math::MathError;
use thiserror::Error;

/// Errors that can occur while setting up a render or writing its output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Degenerate camera: {0}")]
    Camera(#[from] MathError),

    #[error("Field of view must be between 0 and 180 degrees, got {0}")]
    FieldOfView(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
