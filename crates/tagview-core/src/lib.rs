//! Core model for tagview.
//!
//! This crate holds everything that does not depend on a graphics backend:
//! - [`Viewer`], the state of one viewer instance
//! - [`SceneRegistry`] of camera pose nodes plus the tag node
//! - [`OrbitCamera`] and the [`InteractionController`] driving it
//! - quaternion to rotation matrix conversion ([`rotation`])
//! - the [`DrawTarget`] capability and the render [`driver`] that uses it

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors return plain values
#![allow(clippy::must_use_candidate)]
// Tests compare exact clamp results
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod camera;
pub mod draw;
pub mod driver;
pub mod error;
pub mod interaction;
pub mod node;
pub mod options;
pub mod registry;
pub mod rotation;
pub mod shapes;
pub mod state;

pub use camera::{OrbitCamera, MIN_RADIUS, WORLD_UP};
pub use draw::{ColoredVertex, DrawTarget};
pub use error::{Result, TagViewError};
pub use interaction::{
    DragMode, InputEvent, InteractionController, InteractionState, MouseButton, Response,
    ScrollDirection,
};
pub use node::SceneNode;
pub use options::Options;
pub use registry::SceneRegistry;
pub use rotation::rotation_matrix;
pub use state::Viewer;

// Re-export glam types for convenience
pub use glam::{DMat4, DQuat, DVec3, Vec3};
