//! Orbit camera model.
//!
//! The world camera orbits a target point. Its eye position is derived from
//! the target, a radius and two angles every time it is needed, so it can
//! never drift out of sync with the orbit parameters.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::{DMat4, DVec3};

use crate::options::Options;

/// Smallest allowed orbit radius.
pub const MIN_RADIUS: f64 = 0.1;

/// World up direction used for the look-at transform.
pub const WORLD_UP: DVec3 = DVec3::Y;

/// Clamps a polar angle into `[-π/2, π/2]`. Poles stop rotation, they do not flip.
#[must_use]
pub fn clamp_polar(angle: f64) -> f64 {
    angle.clamp(-FRAC_PI_2, FRAC_PI_2)
}

/// Wraps an azimuth angle into `[0, 2π)`.
#[must_use]
pub fn wrap_azimuth(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// A camera orbiting a target point.
///
/// `polar_angle` lifts the eye above (positive) or below (negative) the
/// target's horizontal plane; `azimuth_angle` turns it around the vertical
/// axis starting from `+X` towards `+Z`. The two angles are applied
/// independently:
///
/// ```text
/// eye.x = target.x + radius * cos(polar) * cos(azimuth)
/// eye.y = target.y + radius * sin(polar)
/// eye.z = target.z + radius * cos(polar) * sin(azimuth)
/// ```
///
/// Projection parameters are not validated: callers must keep
/// `0 < near < far` and the field of view inside `(0°, 180°)`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    target: DVec3,
    radius: f64,
    polar_angle: f64,
    azimuth_angle: f64,
    /// Vertical field of view in degrees.
    fov_degrees: f64,
    /// Aspect ratio (width / height).
    aspect: f64,
    /// Near clipping plane.
    near: f64,
    /// Far clipping plane.
    far: f64,
}

impl OrbitCamera {
    /// Creates a camera with default orbit and projection settings.
    #[must_use]
    pub fn new(aspect: f64) -> Self {
        Self {
            target: DVec3::ZERO,
            radius: 1.0,
            polar_angle: 0.0,
            azimuth_angle: 0.0,
            fov_degrees: 65.0,
            aspect,
            near: 0.1,
            far: 10000.0,
        }
    }

    /// Creates a camera using the projection and radius settings in `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let mut camera = Self::new(options.aspect_ratio());
        camera.fov_degrees = options.fov_degrees;
        camera.near = options.near;
        camera.far = options.far;
        camera.set_radius(options.initial_radius);
        camera
    }

    /// Eye position derived from the current orbit parameters.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        let (sin_polar, cos_polar) = self.polar_angle.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth_angle.sin_cos();
        self.target
            + self.radius * DVec3::new(cos_polar * cos_azimuth, sin_polar, cos_polar * sin_azimuth)
    }

    /// Returns the view matrix looking from the eye to the target, `+Y` up.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position(), self.target, WORLD_UP)
    }

    /// Returns the perspective projection matrix (depth range `[0, 1]`).
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Moves the orbit pivot.
    pub fn set_target(&mut self, target: DVec3) {
        self.target = target;
    }

    /// Distance from eye to target.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the orbit radius, clamped to at least [`MIN_RADIUS`].
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(MIN_RADIUS);
    }

    /// Changes the radius by `delta`, clamped to at least [`MIN_RADIUS`].
    pub fn zoom(&mut self, delta: f64) {
        self.set_radius(self.radius + delta);
    }

    /// Elevation angle in radians, within `[-π/2, π/2]`.
    #[must_use]
    pub fn polar_angle(&self) -> f64 {
        self.polar_angle
    }

    /// Sets the elevation angle, clamped to `[-π/2, π/2]`.
    pub fn set_polar_angle(&mut self, angle: f64) {
        self.polar_angle = clamp_polar(angle);
    }

    /// Heading angle in radians, within `[0, 2π)`.
    #[must_use]
    pub fn azimuth_angle(&self) -> f64 {
        self.azimuth_angle
    }

    /// Sets the heading angle, wrapped into `[0, 2π)`.
    pub fn set_azimuth_angle(&mut self, angle: f64) {
        self.azimuth_angle = wrap_azimuth(angle);
    }

    /// Orbits by the given angle deltas (radians).
    pub fn rotate(&mut self, delta_azimuth: f64, delta_polar: f64) {
        self.set_polar_angle(self.polar_angle + delta_polar);
        self.set_azimuth_angle(self.azimuth_angle + delta_azimuth);
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    /// Sets the vertical field of view in degrees.
    pub fn set_fov_degrees(&mut self, degrees: f64) {
        self.fov_degrees = degrees;
    }

    /// Aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Sets the aspect ratio. Must be called on every viewport resize.
    pub fn set_aspect(&mut self, aspect: f64) {
        self.aspect = aspect;
    }

    /// Near clipping plane.
    #[must_use]
    pub fn near(&self) -> f64 {
        self.near
    }

    /// Sets the near clipping plane.
    pub fn set_near(&mut self, near: f64) {
        self.near = near;
    }

    /// Far clipping plane.
    #[must_use]
    pub fn far(&self) -> f64 {
        self.far
    }

    /// Sets the far clipping plane.
    pub fn set_far(&mut self, far: f64) {
        self.far = far;
    }

    /// Resets radius and angles, keeping target and projection.
    pub fn reset_orbit(&mut self, radius: f64) {
        self.set_radius(radius);
        self.polar_angle = 0.0;
        self.azimuth_angle = 0.0;
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_camera_defaults() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.fov_degrees(), 65.0);
        assert_eq!(camera.aspect(), 1.0);
        assert_eq!(camera.near(), 0.1);
        assert_eq!(camera.far(), 10000.0);
        assert_eq!(camera.radius(), 1.0);
        assert_eq!(camera.position(), DVec3::X);
    }

    #[test]
    fn test_radius_floor() {
        let mut camera = OrbitCamera::default();
        camera.set_radius(-5.0);
        assert_eq!(camera.radius(), MIN_RADIUS);

        camera.set_radius(0.5);
        for _ in 0..10 {
            camera.zoom(-0.3);
            assert!(camera.radius() >= MIN_RADIUS);
        }
        assert_eq!(camera.radius(), MIN_RADIUS);
    }

    #[test]
    fn test_polar_clamps_at_pole() {
        let mut camera = OrbitCamera::default();
        camera.set_polar_angle(1.5);
        camera.rotate(0.0, 0.2);
        assert_eq!(camera.polar_angle(), FRAC_PI_2);
        camera.rotate(0.0, 0.2);
        assert_eq!(camera.polar_angle(), FRAC_PI_2);

        camera.set_polar_angle(-10.0);
        assert_eq!(camera.polar_angle(), -FRAC_PI_2);
    }

    #[test]
    fn test_azimuth_wraps_forward() {
        let mut camera = OrbitCamera::default();
        camera.set_azimuth_angle(TAU - 0.01);
        camera.rotate(0.02, 0.0);
        assert!((camera.azimuth_angle() - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_azimuth_wraps_backward() {
        let mut camera = OrbitCamera::default();
        camera.set_azimuth_angle(0.01);
        camera.rotate(-0.02, 0.0);
        assert!((camera.azimuth_angle() - (TAU - 0.01)).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_never_returns_tau() {
        assert_eq!(wrap_azimuth(TAU), 0.0);
        assert!(wrap_azimuth(-1e-300) < TAU);
    }

    #[test]
    fn test_view_matrix_maps_target_in_front_of_eye() {
        let mut camera = OrbitCamera::default();
        camera.set_target(DVec3::new(1.0, 2.0, 3.0));
        camera.set_radius(5.0);
        camera.rotate(0.7, 0.3);
        let target_in_view = camera.view_matrix().transform_point3(camera.target());
        // Right-handed view space looks down -Z.
        assert!(target_in_view.truncate().length() < 1e-9);
        assert!((target_in_view.z + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_view_matrix_finite_at_pole() {
        let mut camera = OrbitCamera::default();
        camera.set_polar_angle(FRAC_PI_2);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn test_projection_matrix_uses_aspect() {
        let mut camera = OrbitCamera::default();
        camera.set_aspect(2.0);
        let proj = camera.projection_matrix();
        assert!((proj.y_axis.y / proj.x_axis.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_orbit_keeps_target() {
        let mut camera = OrbitCamera::default();
        camera.set_target(DVec3::ONE);
        camera.rotate(1.0, 1.0);
        camera.reset_orbit(3.0);
        assert_eq!(camera.target(), DVec3::ONE);
        assert_eq!(camera.position(), DVec3::new(4.0, 1.0, 1.0));
    }

    proptest! {
        #[test]
        fn eye_matches_closed_form(
            r in 0.1f64..100.0,
            p in -FRAC_PI_2..FRAC_PI_2,
            a in 0.0f64..TAU,
            tx in -50.0f64..50.0,
            ty in -50.0f64..50.0,
            tz in -50.0f64..50.0,
        ) {
            let mut camera = OrbitCamera::default();
            camera.set_target(DVec3::new(tx, ty, tz));
            camera.set_radius(r);
            camera.set_polar_angle(p);
            camera.set_azimuth_angle(a);

            let eye = camera.position();
            prop_assert!((eye.x - (tx + r * p.cos() * a.cos())).abs() < 1e-9);
            prop_assert!((eye.y - (ty + r * p.sin())).abs() < 1e-9);
            prop_assert!((eye.z - (tz + r * p.cos() * a.sin())).abs() < 1e-9);
            prop_assert!((eye.distance(camera.target()) - r).abs() < 1e-9);
        }

        #[test]
        fn angles_stay_in_range(da in -20.0f64..20.0, dp in -20.0f64..20.0) {
            let mut camera = OrbitCamera::default();
            camera.rotate(da, dp);
            prop_assert!(camera.azimuth_angle() >= 0.0 && camera.azimuth_angle() < TAU);
            prop_assert!(camera.polar_angle().abs() <= FRAC_PI_2);
        }
    }
}
