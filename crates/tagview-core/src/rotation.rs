//! Quaternion to rotation matrix conversion.
//!
//! Scene nodes carry their orientation as an `(x, y, z, w)` quaternion that
//! is not required to be unit length. The renderer needs a 4×4 matrix it can
//! compose with its current transform, so this module normalizes the
//! quaternion and expands it into the equivalent rotation.

use glam::{DMat4, DQuat, DVec3, DVec4};

use crate::error::{Result, TagViewError};

/// Checks that `q` can be normalized.
///
/// # Errors
///
/// Returns [`TagViewError::DegenerateQuaternion`] if `q` has zero length (or a
/// length so small that its square underflows to zero) or any non-finite
/// component.
pub fn validate_quaternion(q: DQuat) -> Result<()> {
    let length_squared = q.length_squared();
    if !length_squared.is_finite() || !(1.0 / length_squared.sqrt()).is_finite() {
        return Err(TagViewError::DegenerateQuaternion {
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        });
    }
    Ok(())
}

/// Builds the column-major rotation matrix equivalent to `q`.
///
/// The quaternion is normalized first, so any non-zero scale of a rotation
/// quaternion yields the same matrix. In row/column notation the result is
///
/// ```text
/// 1-2y²-2z²   2xy-2wz     2xz+2wy     0
/// 2xy+2wz     1-2x²-2z²   2yz-2wx     0
/// 2xz-2wy     2yz+2wx     1-2x²-2y²   0
/// 0           0           0           1
/// ```
///
/// The matrix is returned rather than applied; composing it with a scene
/// transform is up to the caller.
///
/// # Errors
///
/// Returns [`TagViewError::DegenerateQuaternion`] for a zero or non-finite
/// quaternion.
pub fn rotation_matrix(q: DQuat) -> Result<DMat4> {
    validate_quaternion(q)?;

    let n = 1.0 / q.length_squared().sqrt();
    let (x, y, z, w) = (q.x * n, q.y * n, q.z * n, q.w * n);

    Ok(DMat4::from_cols(
        DVec4::new(
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * x * y + 2.0 * w * z,
            2.0 * x * z - 2.0 * w * y,
            0.0,
        ),
        DVec4::new(
            2.0 * x * y - 2.0 * w * z,
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * y * z + 2.0 * w * x,
            0.0,
        ),
        DVec4::new(
            2.0 * x * z + 2.0 * w * y,
            2.0 * y * z - 2.0 * w * x,
            1.0 - 2.0 * x * x - 2.0 * y * y,
            0.0,
        ),
        DVec4::W,
    ))
}

/// Returns `translation(position) * rotation(orientation)`, the model matrix
/// of a scene node.
///
/// # Errors
///
/// Returns [`TagViewError::DegenerateQuaternion`] for a zero or non-finite
/// orientation.
pub fn node_transform(position: DVec3, orientation: DQuat) -> Result<DMat4> {
    Ok(DMat4::from_translation(position) * rotation_matrix(orientation)?)
}
