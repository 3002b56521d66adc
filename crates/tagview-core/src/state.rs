//! Viewer state.
//!
//! A [`Viewer`] owns everything one viewer window needs: options, the scene
//! registry, the orbit camera and the interaction controller. There is no
//! process-wide instance; hosts own a `Viewer` and pass it to whatever
//! dispatches events.

use glam::{DQuat, DVec3};

use crate::camera::OrbitCamera;
use crate::draw::DrawTarget;
use crate::driver;
use crate::error::Result;
use crate::interaction::{InputEvent, InteractionController, Response};
use crate::node::SceneNode;
use crate::options::Options;
use crate::registry::SceneRegistry;

/// The state of one viewer instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    options: Options,
    registry: SceneRegistry,
    camera: OrbitCamera,
    controller: InteractionController,
}

impl Viewer {
    /// Creates a viewer for a `width × height` window with default options.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_options(Options {
            window_width: width,
            window_height: height,
            ..Options::default()
        })
    }

    /// Creates a viewer from `options`.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        let camera = OrbitCamera::from_options(&options);
        let controller = InteractionController::new(options.window_width, options.window_height)
            .with_scroll_step(options.scroll_step);
        Self {
            options,
            registry: SceneRegistry::new(),
            camera,
            controller,
        }
    }

    /// Viewer options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Scene registry.
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// The world camera.
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// The interaction controller.
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Current viewport size in pixels.
    pub fn viewport(&self) -> (u32, u32) {
        self.controller.viewport()
    }

    /// Appends a camera pose to the scene.
    pub fn add_camera_node(&mut self, position: DVec3, orientation: DQuat) -> Result<()> {
        self.registry.add_camera_node(position, orientation)
    }

    /// Replaces the tag and moves the orbit pivot to its position.
    ///
    /// Both changes happen within this call, so no frame sees a tag that is
    /// not the camera target.
    pub fn set_tag_origin(&mut self, position: DVec3, orientation: DQuat) -> Result<()> {
        let tag = SceneNode::new(position, orientation)?;
        self.registry.replace_tag(tag);
        self.camera.set_target(position);
        log::info!("tag origin set to {position}");
        Ok(())
    }

    /// Feeds one input event to the interaction controller.
    pub fn handle_input(&mut self, event: InputEvent) -> Response {
        self.controller.handle_event(event, &mut self.camera)
    }

    /// Records a new viewport size and updates the camera aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.controller.set_viewport(width, height);
        let (width, height) = self.controller.viewport();
        self.camera.set_aspect(f64::from(width) / f64::from(height));
    }

    /// Restores the initial orbit radius and angles around the current target.
    pub fn reset_view(&mut self) {
        self.camera.reset_orbit(self.options.initial_radius);
    }

    /// Draws one frame into `target`.
    pub fn render<T: DrawTarget + ?Sized>(&self, target: &mut T) -> Result<()> {
        driver::render_frame(self, target)
    }

    /// Applies a viewport resize to both the viewer and `target`.
    pub fn reshape<T: DrawTarget + ?Sized>(&mut self, target: &mut T, width: u32, height: u32) {
        driver::reshape(self, target, width, height);
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::with_options(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::interaction::{MouseButton, ScrollDirection};

    fn seeded_viewer() -> Viewer {
        let mut viewer = Viewer::new(800, 600);
        viewer
            .add_camera_node(DVec3::new(10.0, 0.0, 6.0), DQuat::from_xyzw(1.0, 1.0, 1.0, 1.0))
            .unwrap();
        viewer
            .add_camera_node(DVec3::new(0.0, 10.0, 2.0), DQuat::from_xyzw(1.0, 0.0, 1.0, 1.0))
            .unwrap();
        viewer
            .add_camera_node(DVec3::ZERO, DQuat::from_xyzw(0.0, 0.0, 0.0, 1.0))
            .unwrap();
        viewer
            .set_tag_origin(DVec3::ZERO, DQuat::from_xyzw(0.0, 0.0, 0.0, 1.0))
            .unwrap();
        viewer
    }

    #[test]
    fn test_seeded_scene() {
        let viewer = seeded_viewer();
        let positions: Vec<DVec3> = viewer.registry().iter().map(SceneNode::position).collect();
        assert_eq!(
            positions,
            vec![
                DVec3::new(10.0, 0.0, 6.0),
                DVec3::new(0.0, 10.0, 2.0),
                DVec3::ZERO
            ]
        );
        assert_eq!(viewer.registry().tag().position(), DVec3::ZERO);
        assert_eq!(viewer.camera().target(), DVec3::ZERO);
        assert!((viewer.camera().aspect() - 800.0 / 600.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_tag_origin_retargets_camera() {
        let mut viewer = Viewer::default();
        let position = DVec3::new(3.0, -1.0, 2.5);
        let orientation = DQuat::from_xyzw(0.0, 1.0, 0.0, 1.0);
        viewer.set_tag_origin(position, orientation).unwrap();

        assert_eq!(viewer.registry().tag().position(), position);
        assert_eq!(viewer.registry().tag().orientation(), orientation);
        assert_eq!(viewer.camera().target(), position);
    }

    #[test]
    fn test_rejected_tag_changes_nothing() {
        let mut viewer = seeded_viewer();
        let before = viewer.clone();
        assert!(viewer
            .set_tag_origin(DVec3::ONE, DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0))
            .is_err());
        assert_eq!(viewer, before);
    }

    #[test]
    fn test_resize_updates_aspect_and_drag_scale() {
        let mut viewer = Viewer::new(800, 600);
        viewer.resize(200, 100);
        assert_eq!(viewer.camera().aspect(), 2.0);

        viewer.handle_input(InputEvent::Button {
            button: MouseButton::Primary,
            pressed: true,
            x: 0,
            y: 0,
        });
        viewer.handle_input(InputEvent::CursorMoved { x: 20, y: 10 });
        assert!((viewer.camera().azimuth_angle() - 0.1).abs() < 1e-12);
        assert!((viewer.camera().polar_angle() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_reset_view() {
        let mut viewer = seeded_viewer();
        viewer.handle_input(InputEvent::Scroll(ScrollDirection::Up));
        viewer.handle_input(InputEvent::Button {
            button: MouseButton::Primary,
            pressed: true,
            x: 0,
            y: 0,
        });
        viewer.handle_input(InputEvent::CursorMoved { x: 0, y: 6000 });
        assert_eq!(viewer.camera().polar_angle(), FRAC_PI_2);

        viewer.reset_view();
        assert_eq!(viewer.camera().polar_angle(), 0.0);
        assert_eq!(viewer.camera().radius(), 1.0);
        assert_eq!(viewer.camera().target(), DVec3::ZERO);
    }

    #[test]
    fn test_clone_copies_scene_and_camera() {
        let mut viewer = seeded_viewer();
        let copy = viewer.clone();
        viewer.handle_input(InputEvent::Scroll(ScrollDirection::Up));
        viewer
            .add_camera_node(DVec3::ONE, DQuat::IDENTITY)
            .unwrap();

        assert_eq!(copy.registry().camera_count(), 3);
        assert_eq!(copy.camera().radius(), 1.0);
        assert_eq!(viewer.registry().camera_count(), 4);
    }
}
