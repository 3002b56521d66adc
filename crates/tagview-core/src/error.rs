//! Error types for tagview.

use thiserror::Error;

/// The main error type for tagview operations.
#[derive(Error, Debug)]
pub enum TagViewError {
    /// A quaternion with zero (or non-finite) length cannot describe a rotation.
    #[error("degenerate quaternion ({x}, {y}, {z}, {w}) cannot be normalized")]
    DegenerateQuaternion { x: f64, y: f64, z: f64, w: f64 },

    /// Rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// Window or event loop error.
    #[error("window error: {0}")]
    Window(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tagview operations.
pub type Result<T> = std::result::Result<T, TagViewError>;
