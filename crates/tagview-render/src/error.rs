//! Rendering error types.

use thiserror::Error;

/// Errors that can occur during rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to create wgpu adapter.
    #[error("failed to create graphics adapter")]
    AdapterCreationFailed,

    /// Failed to create wgpu device.
    #[error("failed to create graphics device: {0}")]
    DeviceCreationFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create surface.
    #[error("failed to create surface: {0}")]
    SurfaceCreationFailed(#[from] wgpu::CreateSurfaceError),

    /// The surface reports no supported texture format.
    #[error("surface has no supported format")]
    NoSurfaceFormat,

    /// Out of memory.
    #[error("out of memory")]
    OutOfMemory,

    /// Frame readback requested from an engine without an offscreen target.
    #[error("frame capture requires a headless engine")]
    NotHeadless,

    /// Mapping the readback buffer failed.
    #[error("GPU buffer mapping failed")]
    BufferMapFailed,
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

impl From<RenderError> for tagview_core::TagViewError {
    fn from(err: RenderError) -> Self {
        tagview_core::TagViewError::Render(err.to_string())
    }
}
