//! Scene nodes: the pose records drawn every frame.

use glam::{DMat4, DQuat, DVec3};

use crate::error::Result;
use crate::rotation;

/// A camera pose or the tag: a position plus an orientation quaternion.
///
/// The orientation is kept exactly as supplied; it is normalized only when a
/// rotation matrix is built from it. Nodes are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    position: DVec3,
    orientation: DQuat,
}

impl SceneNode {
    /// Creates a node, rejecting an orientation that cannot be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TagViewError::DegenerateQuaternion`] for a zero or
    /// non-finite orientation.
    pub fn new(position: DVec3, orientation: DQuat) -> Result<Self> {
        rotation::validate_quaternion(orientation)?;
        Ok(Self {
            position,
            orientation,
        })
    }

    /// Creates a node from plain `[x, y, z]` and `[x, y, z, w]` arrays.
    ///
    /// # Errors
    ///
    /// Same as [`SceneNode::new`].
    pub fn from_arrays(position: [f64; 3], orientation: [f64; 4]) -> Result<Self> {
        Self::new(
            DVec3::from_array(position),
            DQuat::from_array(orientation),
        )
    }

    /// Node at the origin with the identity orientation.
    pub fn identity() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
        }
    }

    /// World-space position.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Orientation as supplied (not necessarily unit length).
    pub fn orientation(&self) -> DQuat {
        self.orientation
    }

    /// Rotation matrix of this node's orientation.
    pub fn rotation_matrix(&self) -> Result<DMat4> {
        rotation::rotation_matrix(self.orientation)
    }

    /// Full model matrix, `translation * rotation`.
    pub fn transform(&self) -> Result<DMat4> {
        rotation::node_transform(self.position, self.orientation)
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_kept_unnormalized() {
        let node = SceneNode::from_arrays([10.0, 0.0, 6.0], [1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(node.position(), DVec3::new(10.0, 0.0, 6.0));
        assert_eq!(node.orientation(), DQuat::from_xyzw(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_zero_orientation_rejected() {
        assert!(SceneNode::from_arrays([0.0; 3], [0.0; 4]).is_err());
    }

    #[test]
    fn test_default_is_identity_pose() {
        let node = SceneNode::default();
        assert_eq!(node.transform().unwrap(), DMat4::IDENTITY);
    }
}
