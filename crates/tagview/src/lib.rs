//! tagview: a small 3D viewer for camera poses around a fiducial tag.
//!
//! The scene holds any number of camera poses, drawn as colored frustum
//! pyramids, and one tag pose, drawn as a red square. The world camera orbits
//! the tag; dragging with the mouse rotates it and the wheel changes its
//! distance.
//!
//! # Quick Start
//!
//! ```no_run
//! use tagview::*;
//!
//! fn main() -> Result<()> {
//!     let mut viewer = Viewer::new(800, 600);
//!     viewer.add_camera_node(DVec3::new(10.0, 0.0, 6.0), DQuat::from_xyzw(1.0, 1.0, 1.0, 1.0))?;
//!     viewer.set_tag_origin(DVec3::ZERO, DQuat::IDENTITY)?;
//!
//!     // Blocks until the window is closed.
//!     show(viewer)
//! }
//! ```
//!
//! # Controls
//!
//! - Drag with the left or right button to orbit the tag
//! - Scroll up to move away, scroll down to move closer
//! - `R` resets the orbit, `Escape` closes the window

mod app;
mod headless;
mod init;

pub use tagview_core::{
    rotation_matrix, ColoredVertex, DMat4, DQuat, DVec3, DrawTarget, InputEvent,
    InteractionController, MouseButton, OrbitCamera, Options, Response, Result, SceneNode,
    SceneRegistry, ScrollDirection, TagViewError, Vec3, Viewer, MIN_RADIUS,
};

pub use tagview_render::{save_image, RenderEngine};

pub use headless::{render_to_file, render_to_image};
pub use init::{load_options, show};
