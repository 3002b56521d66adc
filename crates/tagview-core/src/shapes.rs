//! Fixed marker geometry.

use glam::Vec3;

use crate::draw::ColoredVertex;

const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0);
const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);

const APEX: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const BASE_LEFT: Vec3 = Vec3::new(-1.0, -1.0, 1.0);
const BASE_RIGHT: Vec3 = Vec3::new(1.0, -1.0, 1.0);
const BASE_BACK: Vec3 = Vec3::new(0.0, -1.0, -1.0);

const fn v(position: Vec3, color: Vec3) -> ColoredVertex {
    ColoredVertex::new(position, color)
}

/// Camera marker: a three-sided pyramid (four triangles) with its apex on
/// `+Y` and a triangular base at `y = -1`.
pub const FRUSTUM: [ColoredVertex; 12] = [
    v(APEX, CYAN),
    v(BASE_LEFT, GREEN),
    v(BASE_RIGHT, BLUE),
    //
    v(APEX, CYAN),
    v(BASE_LEFT, GREEN),
    v(BASE_BACK, BLUE),
    //
    v(APEX, CYAN),
    v(BASE_BACK, GREEN),
    v(BASE_RIGHT, BLUE),
    // base
    v(BASE_LEFT, CYAN),
    v(BASE_BACK, GREEN),
    v(BASE_RIGHT, BLUE),
];

/// Tag marker: a red 2×2 square in the `y = 0` plane.
pub const TAG_QUAD: [ColoredVertex; 6] = [
    v(Vec3::new(1.0, 0.0, 1.0), RED),
    v(Vec3::new(1.0, 0.0, -1.0), RED),
    v(Vec3::new(-1.0, 0.0, 1.0), RED),
    //
    v(Vec3::new(-1.0, 0.0, 1.0), RED),
    v(Vec3::new(1.0, 0.0, -1.0), RED),
    v(Vec3::new(-1.0, 0.0, -1.0), RED),
];
