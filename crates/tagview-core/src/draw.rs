//! Drawing capability the render driver targets.
//!
//! A [`DrawTarget`] is the smallest surface the viewer needs from a graphics
//! backend: clear, camera setup, a model transform stack and colored triangle
//! lists. The wgpu engine in `tagview-render` implements it; tests use a
//! recording implementation.

use glam::{DMat4, DVec3, Vec3};

use crate::error::Result;

/// A triangle-list vertex with a per-vertex color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    /// Model-space position.
    pub position: Vec3,
    /// Linear RGB color.
    pub color: Vec3,
}

impl ColoredVertex {
    /// Creates a vertex.
    #[must_use]
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// A backend the scene can be drawn into.
///
/// Transform calls compose onto the current model matrix the same way a
/// fixed-function matrix stack does: `translate` and `multiply` post-multiply,
/// `push_transform` saves the current matrix and `pop_transform` restores it.
pub trait DrawTarget {
    /// Clears color and depth. Also resets the model transform to identity.
    fn clear(&mut self, color: Vec3);

    /// Sets the viewport to `width × height` pixels.
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Sets a perspective projection.
    fn set_projection(&mut self, fov_degrees: f64, aspect: f64, near: f64, far: f64);

    /// Sets the view transform looking from `eye` at `target`.
    fn set_view(&mut self, eye: DVec3, target: DVec3, up: DVec3);

    /// Saves the current model matrix.
    fn push_transform(&mut self);

    /// Restores the most recently saved model matrix.
    fn pop_transform(&mut self);

    /// Post-multiplies the model matrix by a translation.
    fn translate(&mut self, offset: DVec3);

    /// Post-multiplies the model matrix by `matrix`.
    fn multiply(&mut self, matrix: DMat4);

    /// Draws a triangle list (three vertices per triangle) with the current
    /// model matrix.
    fn draw_triangles(&mut self, vertices: &[ColoredVertex]);

    /// Finishes the frame and shows it.
    fn present(&mut self) -> Result<()>;
}
