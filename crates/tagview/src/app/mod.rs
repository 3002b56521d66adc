//! Application window and event loop management.

mod input;
mod render;

use std::sync::Arc;

use winit::{event_loop::EventLoop, window::Window};

use tagview_core::{Result, TagViewError, Viewer};
use tagview_render::RenderEngine;

/// The tagview application state.
///
/// Owns the one [`Viewer`] every window callback operates on.
pub struct App {
    pub(super) viewer: Viewer,
    pub(super) window: Option<Arc<Window>>,
    pub(super) engine: Option<RenderEngine>,
    pub(super) close_requested: bool,
    /// Last cursor position in physical pixels.
    pub(super) cursor: (i32, i32),
    /// Error that forced the event loop to stop.
    pub(super) fatal: Option<TagViewError>,
}

impl App {
    /// Creates a new application for `viewer`.
    pub fn new(viewer: Viewer) -> Self {
        Self {
            viewer,
            window: None,
            engine: None,
            close_requested: false,
            cursor: (0, 0),
            fatal: None,
        }
    }

    /// Records a fatal error and asks the loop to stop.
    pub(super) fn fail(&mut self, error: TagViewError) {
        log::error!("{error}");
        self.fatal = Some(error);
        self.close_requested = true;
    }

    /// Requests a redraw of the window, if there is one.
    pub(super) fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Runs the viewer event loop until the window closes.
pub fn run_app(viewer: Viewer) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| TagViewError::Window(format!("failed to create event loop: {e}")))?;
    let mut app = App::new(viewer);

    event_loop
        .run_app(&mut app)
        .map_err(|e| TagViewError::Window(format!("event loop error: {e}")))?;

    match app.fatal.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
