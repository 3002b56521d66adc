//! Per-frame draw orchestration.

use crate::camera::WORLD_UP;
use crate::draw::{ColoredVertex, DrawTarget};
use crate::error::Result;
use crate::node::SceneNode;
use crate::shapes::{FRUSTUM, TAG_QUAD};
use crate::state::Viewer;

/// Draws one frame of `viewer` into `target`.
///
/// Clears, sets the view from the orbit camera, draws every camera node as a
/// frustum in registry order, draws the tag quad last and presents.
pub fn render_frame<T: DrawTarget + ?Sized>(viewer: &Viewer, target: &mut T) -> Result<()> {
    let camera = viewer.camera();

    target.clear(viewer.options().background_color);
    target.set_view(camera.position(), camera.target(), WORLD_UP);

    for node in viewer.registry().iter() {
        draw_node(target, node, &FRUSTUM)?;
    }
    draw_node(target, viewer.registry().tag(), &TAG_QUAD)?;

    target.present()
}

/// Handles a viewport resize: updates the viewer and resets the target's
/// viewport and projection from the camera.
pub fn reshape<T: DrawTarget + ?Sized>(
    viewer: &mut Viewer,
    target: &mut T,
    width: u32,
    height: u32,
) {
    viewer.resize(width, height);
    let (width, height) = viewer.viewport();
    let camera = viewer.camera();

    target.set_viewport(width, height);
    target.set_projection(
        camera.fov_degrees(),
        camera.aspect(),
        camera.near(),
        camera.far(),
    );
    log::debug!("reshaped to {width}x{height}");
}

fn draw_node<T: DrawTarget + ?Sized>(
    target: &mut T,
    node: &SceneNode,
    shape: &[ColoredVertex],
) -> Result<()> {
    let rotation = node.rotation_matrix()?;
    target.push_transform();
    target.translate(node.position());
    target.multiply(rotation);
    target.draw_triangles(shape);
    target.pop_transform();
    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::{DMat4, DQuat, DVec3, Vec3};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Vec3),
        Viewport(u32, u32),
        Projection(f64, f64, f64, f64),
        View(DVec3, DVec3, DVec3),
        Push,
        Pop,
        Translate(DVec3),
        Multiply(DMat4),
        Triangles(usize),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl DrawTarget for Recorder {
        fn clear(&mut self, color: Vec3) {
            self.calls.push(Call::Clear(color));
        }
        fn set_viewport(&mut self, width: u32, height: u32) {
            self.calls.push(Call::Viewport(width, height));
        }
        fn set_projection(&mut self, fov_degrees: f64, aspect: f64, near: f64, far: f64) {
            self.calls
                .push(Call::Projection(fov_degrees, aspect, near, far));
        }
        fn set_view(&mut self, eye: DVec3, target: DVec3, up: DVec3) {
            self.calls.push(Call::View(eye, target, up));
        }
        fn push_transform(&mut self) {
            self.calls.push(Call::Push);
        }
        fn pop_transform(&mut self) {
            self.calls.push(Call::Pop);
        }
        fn translate(&mut self, offset: DVec3) {
            self.calls.push(Call::Translate(offset));
        }
        fn multiply(&mut self, matrix: DMat4) {
            self.calls.push(Call::Multiply(matrix));
        }
        fn draw_triangles(&mut self, vertices: &[ColoredVertex]) {
            self.calls.push(Call::Triangles(vertices.len()));
        }
        fn present(&mut self) -> Result<()> {
            self.calls.push(Call::Present);
            Ok(())
        }
    }

    #[test]
    fn test_frame_call_sequence() {
        let mut viewer = Viewer::new(800, 600);
        viewer
            .add_camera_node(DVec3::new(10.0, 0.0, 6.0), DQuat::IDENTITY)
            .unwrap();
        viewer
            .add_camera_node(DVec3::new(0.0, 10.0, 2.0), DQuat::IDENTITY)
            .unwrap();
        viewer
            .set_tag_origin(DVec3::new(1.0, 0.0, 0.0), DQuat::IDENTITY)
            .unwrap();

        let mut recorder = Recorder::default();
        render_frame(&viewer, &mut recorder).unwrap();

        let node_calls = |position: DVec3, count: usize| {
            vec![
                Call::Push,
                Call::Translate(position),
                Call::Multiply(DMat4::IDENTITY),
                Call::Triangles(count),
                Call::Pop,
            ]
        };

        let mut expected = vec![
            Call::Clear(Vec3::ONE),
            Call::View(
                DVec3::new(2.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::Y,
            ),
        ];
        expected.extend(node_calls(DVec3::new(10.0, 0.0, 6.0), FRUSTUM.len()));
        expected.extend(node_calls(DVec3::new(0.0, 10.0, 2.0), FRUSTUM.len()));
        expected.extend(node_calls(DVec3::new(1.0, 0.0, 0.0), TAG_QUAD.len()));
        expected.push(Call::Present);

        assert_eq!(recorder.calls, expected);
    }

    #[test]
    fn test_empty_scene_still_draws_tag() {
        let viewer = Viewer::default();
        let mut recorder = Recorder::default();
        render_frame(&viewer, &mut recorder).unwrap();

        let triangles: Vec<&Call> = recorder
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Triangles(_)))
            .collect();
        assert_eq!(triangles, vec![&Call::Triangles(TAG_QUAD.len())]);
        assert_eq!(recorder.calls.last(), Some(&Call::Present));
    }

    #[test]
    fn test_reshape_sets_viewport_and_projection() {
        let mut viewer = Viewer::new(800, 600);
        let mut recorder = Recorder::default();
        reshape(&mut viewer, &mut recorder, 1000, 500);

        assert_eq!(
            recorder.calls,
            vec![
                Call::Viewport(1000, 500),
                Call::Projection(65.0, 2.0, 0.1, 10000.0),
            ]
        );
        assert_eq!(viewer.camera().aspect(), 2.0);
    }

    #[test]
    fn test_reshape_with_zero_height() {
        let mut viewer = Viewer::new(800, 600);
        let mut recorder = Recorder::default();
        reshape(&mut viewer, &mut recorder, 640, 0);

        assert_eq!(recorder.calls[0], Call::Viewport(640, 1));
        assert!(viewer.camera().aspect().is_finite());
    }
}
