//! Rendering backend for tagview.
//!
//! This crate provides the wgpu implementation of
//! [`tagview_core::DrawTarget`], including:
//! - Windowed and headless render targets
//! - The unlit marker pipeline (WGSL)
//! - A fixed-function style model transform stack
//! - Frame readback and image export

// Pixel sizes and vertex counts are small enough for the u32/usize casts used
// when talking to wgpu.
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

pub mod engine;
pub mod error;
pub mod screenshot;
pub mod transform_stack;
pub mod vertex;

pub use engine::{RenderEngine, DEPTH_FORMAT, HEADLESS_FORMAT};
pub use error::{RenderError, RenderResult};
pub use screenshot::{encode_png, save_image, ScreenshotError};
pub use transform_stack::TransformStack;
pub use vertex::{CameraUniforms, GpuVertex};
