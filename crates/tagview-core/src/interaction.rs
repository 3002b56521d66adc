//! Mouse interaction state machine driving the orbit camera.
//!
//! The controller knows nothing about the windowing system. Hosts translate
//! their native events into [`InputEvent`]s and redraw when the returned
//! [`Response`] asks for it.

use crate::camera::OrbitCamera;

/// Mouse buttons the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left button.
    Primary,
    /// Right button.
    Secondary,
    /// Any other button; ignored.
    Other,
}

/// Direction of a discrete scroll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Wheel rolled away from the user. Moves the camera out.
    Up,
    /// Wheel rolled towards the user. Moves the camera in.
    Down,
}

/// Backend-agnostic input event in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A button was pressed or released at `(x, y)`.
    Button {
        button: MouseButton,
        pressed: bool,
        x: i32,
        y: i32,
    },
    /// The cursor moved to `(x, y)`.
    CursorMoved { x: i32, y: i32 },
    /// One scroll tick.
    Scroll(ScrollDirection),
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// The camera changed and the scene needs to be drawn again.
    pub redraw: bool,
}

impl Response {
    const NONE: Self = Self { redraw: false };
    const REDRAW: Self = Self { redraw: true };
}

/// Current drag mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragMode {
    /// No button held.
    #[default]
    None,
    /// A button is held; motion orbits the camera.
    Orbit,
}

/// Transient pointer state. Reset on release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Current drag mode.
    pub mode: DragMode,
    /// Button that started the current drag.
    pub button: Option<MouseButton>,
    /// Cursor position at the last handled press or motion.
    pub last_cursor: Option<(i32, i32)>,
}

/// Translates pointer input into orbit camera updates.
///
/// Both primary and secondary buttons orbit. Drag deltas are normalized by
/// the viewport size, so dragging across the whole window turns the camera
/// by one radian.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    state: InteractionState,
    viewport: (u32, u32),
    scroll_step: f64,
}

impl InteractionController {
    /// Radius change per scroll tick used by [`InteractionController::default`].
    pub const DEFAULT_SCROLL_STEP: f64 = 0.3;

    /// Creates a controller for a viewport of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: InteractionState::default(),
            viewport: (width.max(1), height.max(1)),
            scroll_step: Self::DEFAULT_SCROLL_STEP,
        }
    }

    /// Sets the radius change per scroll tick.
    #[must_use]
    pub fn with_scroll_step(mut self, step: f64) -> Self {
        self.scroll_step = step;
        self
    }

    /// Current pointer state.
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Viewport size used to normalize drag deltas.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Updates the viewport size. Zero dimensions are raised to one.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    /// Handles one input event, mutating `camera` as needed.
    pub fn handle_event(&mut self, event: InputEvent, camera: &mut OrbitCamera) -> Response {
        match event {
            InputEvent::Button {
                button: MouseButton::Other,
                ..
            } => Response::NONE,
            InputEvent::Button {
                button,
                pressed: true,
                x,
                y,
            } => {
                self.state = InteractionState {
                    mode: DragMode::Orbit,
                    button: Some(button),
                    last_cursor: Some((x, y)),
                };
                log::debug!("{button:?} pressed at ({x}, {y}), orbiting");
                Response::NONE
            }
            InputEvent::Button { pressed: false, .. } => {
                self.state = InteractionState::default();
                Response::NONE
            }
            InputEvent::CursorMoved { x, y } => self.drag_to(x, y, camera),
            InputEvent::Scroll(direction) => {
                let delta = match direction {
                    ScrollDirection::Up => self.scroll_step,
                    ScrollDirection::Down => -self.scroll_step,
                };
                camera.zoom(delta);
                Response::REDRAW
            }
        }
    }

    fn drag_to(&mut self, x: i32, y: i32, camera: &mut OrbitCamera) -> Response {
        if self.state.mode != DragMode::Orbit {
            return Response::NONE;
        }
        let Some((last_x, last_y)) = self.state.last_cursor else {
            self.state.last_cursor = Some((x, y));
            return Response::NONE;
        };

        let dx = f64::from(x - last_x) / f64::from(self.viewport.0);
        let dy = f64::from(y - last_y) / f64::from(self.viewport.1);
        camera.rotate(dx, dy);
        self.state.last_cursor = Some((x, y));
        Response::REDRAW
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
