use std::sync::Arc;

use pollster::FutureExt;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use tagview_core::{InputEvent, MouseButton, ScrollDirection, TagViewError};
use tagview_render::RenderEngine;

use super::App;

/// Maps a winit button onto the buttons the controller knows.
pub(super) fn convert_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Primary,
        winit::event::MouseButton::Right => MouseButton::Secondary,
        _ => MouseButton::Other,
    }
}

/// Turns a wheel delta into one scroll tick. Zero deltas produce nothing.
pub(super) fn scroll_direction(delta: MouseScrollDelta) -> Option<ScrollDirection> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(pos) => pos.y,
    };
    if y > 0.0 {
        Some(ScrollDirection::Up)
    } else if y < 0.0 {
        Some(ScrollDirection::Down)
    } else {
        None
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn cursor_coords(position: PhysicalPosition<f64>) -> (i32, i32) {
    (position.x.round() as i32, position.y.round() as i32)
}

impl App {
    fn dispatch(&mut self, event: InputEvent) {
        let response = self.viewer.handle_input(event);
        if response.redraw {
            self.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let options = self.viewer.options();
        let window_attributes = Window::default_attributes()
            .with_title(options.window_title.clone())
            .with_inner_size(LogicalSize::new(options.window_width, options.window_height));
        let vsync = options.vsync;

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(TagViewError::Window(format!("failed to create window: {e}")));
                event_loop.exit();
                return;
            }
        };

        let mut engine = match RenderEngine::new_windowed(window.clone(), vsync).block_on() {
            Ok(engine) => engine,
            Err(e) => {
                self.fail(e.into());
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.viewer.reshape(&mut engine, size.width, size.height);

        self.window = Some(window);
        self.engine = Some(engine);
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.close_requested = true;
            }
            WindowEvent::Resized(size) => {
                // Minimized windows report a zero size; keep the last viewport.
                if size.width > 0 && size.height > 0 {
                    if let Some(engine) = &mut self.engine {
                        self.viewer.reshape(engine, size.width, size.height);
                    }
                    self.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = cursor_coords(position);
                self.cursor = (x, y);
                self.dispatch(InputEvent::CursorMoved { x, y });
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.cursor;
                self.dispatch(InputEvent::Button {
                    button: convert_button(button),
                    pressed: state == ElementState::Pressed,
                    x,
                    y,
                });
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(direction) = scroll_direction(delta) {
                    self.dispatch(InputEvent::Scroll(direction));
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => {
                            self.close_requested = true;
                        }
                        PhysicalKey::Code(KeyCode::KeyR) => {
                            self.viewer.reset_view();
                            self.request_redraw();
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }

        if self.close_requested {
            event_loop.exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_button() {
        assert_eq!(
            convert_button(winit::event::MouseButton::Left),
            MouseButton::Primary
        );
        assert_eq!(
            convert_button(winit::event::MouseButton::Right),
            MouseButton::Secondary
        );
        assert_eq!(
            convert_button(winit::event::MouseButton::Middle),
            MouseButton::Other
        );
    }

    #[test]
    fn test_scroll_direction() {
        assert_eq!(
            scroll_direction(MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(ScrollDirection::Up)
        );
        assert_eq!(
            scroll_direction(MouseScrollDelta::LineDelta(0.0, -2.0)),
            Some(ScrollDirection::Down)
        );
        assert_eq!(
            scroll_direction(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.5))),
            Some(ScrollDirection::Up)
        );
        assert_eq!(scroll_direction(MouseScrollDelta::LineDelta(3.0, 0.0)), None);
    }

    #[test]
    fn test_cursor_coords_round() {
        assert_eq!(cursor_coords(PhysicalPosition::new(10.4, 20.6)), (10, 21));
    }
}
