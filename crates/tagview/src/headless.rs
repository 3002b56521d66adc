//! Headless rendering API for tagview.
//!
//! Renders a viewer to an image buffer or file without opening a window.
//! Useful for integration tests and batch screenshots.

use pollster::FutureExt;
use tagview_render::RenderEngine;

use crate::{Result, TagViewError, Viewer};

/// Renders one frame of `viewer` to a PNG or JPEG file.
///
/// # Example
/// ```no_run
/// use tagview::*;
///
/// let mut viewer = Viewer::new(800, 600);
/// viewer.set_tag_origin(DVec3::ZERO, DQuat::IDENTITY).unwrap();
/// render_to_file(&viewer, "tag.png", 800, 600).unwrap();
/// ```
pub fn render_to_file(
    viewer: &Viewer,
    filename: impl AsRef<std::path::Path>,
    width: u32,
    height: u32,
) -> Result<()> {
    let data = render_to_image(viewer, width, height)?;
    tagview_render::save_image(filename, &data, width.max(1), height.max(1))
        .map_err(|e| TagViewError::Render(format!("Failed to save image: {e}")))
}

/// Renders one frame of `viewer` to a raw RGBA pixel buffer.
///
/// The viewer is copied and reshaped to `width × height` (each at least 1),
/// so its camera aspect follows the image. The returned buffer holds
/// `width * height * 4` bytes, row by row from the top-left corner.
///
/// # Example
/// ```no_run
/// use tagview::*;
///
/// let viewer = Viewer::new(800, 600);
/// let pixels = render_to_image(&viewer, 800, 600).unwrap();
/// assert_eq!(pixels.len(), 800 * 600 * 4);
/// ```
pub fn render_to_image(viewer: &Viewer, width: u32, height: u32) -> Result<Vec<u8>> {
    let width = width.max(1);
    let height = height.max(1);

    let mut engine = RenderEngine::new_headless(width, height)
        .block_on()
        .map_err(|e| TagViewError::Render(format!("Failed to create headless engine: {e}")))?;

    let mut viewer = viewer.clone();
    viewer.reshape(&mut engine, width, height);
    viewer.render(&mut engine)?;

    engine
        .capture_frame()
        .map_err(|e| TagViewError::Render(format!("Failed to capture frame: {e}")))
}
