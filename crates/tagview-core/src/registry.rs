//! Scene registry holding the camera nodes and the tag.

use glam::{DQuat, DVec3};

use crate::error::Result;
use crate::node::SceneNode;

/// Ordered camera nodes plus the single tag node.
///
/// Cameras are append-only and drawn in insertion order. The tag always
/// exists (it starts as the identity pose) and is replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneRegistry {
    cameras: Vec<SceneNode>,
    tag: SceneNode,
}

impl SceneRegistry {
    /// Creates a registry with no cameras and an identity tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a camera node.
    ///
    /// # Errors
    ///
    /// Returns an error if `orientation` is degenerate; the registry is left
    /// unchanged in that case.
    pub fn add_camera_node(&mut self, position: DVec3, orientation: DQuat) -> Result<()> {
        let node = SceneNode::new(position, orientation)?;
        self.cameras.push(node);
        log::debug!(
            "added camera node #{} at {position} ({orientation})",
            self.cameras.len()
        );
        Ok(())
    }

    /// Replaces the tag node.
    ///
    /// Retargeting the orbit camera is done by
    /// [`Viewer::set_tag_origin`](crate::Viewer::set_tag_origin); use that
    /// when a camera is attached.
    pub(crate) fn replace_tag(&mut self, tag: SceneNode) {
        self.tag = tag;
    }

    /// Camera nodes in draw order.
    pub fn cameras(&self) -> &[SceneNode] {
        &self.cameras
    }

    /// Number of camera nodes.
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Returns true if no camera node has been added.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// The tag node.
    pub fn tag(&self) -> &SceneNode {
        &self.tag
    }

    /// Returns an iterator over the camera nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.cameras.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cameras_keep_insertion_order() {
        let mut registry = SceneRegistry::new();
        registry
            .add_camera_node(DVec3::new(10.0, 0.0, 6.0), DQuat::from_xyzw(1.0, 1.0, 1.0, 1.0))
            .unwrap();
        registry
            .add_camera_node(DVec3::new(0.0, 10.0, 2.0), DQuat::from_xyzw(1.0, 0.0, 1.0, 1.0))
            .unwrap();

        let positions: Vec<DVec3> = registry.iter().map(SceneNode::position).collect();
        assert_eq!(
            positions,
            vec![DVec3::new(10.0, 0.0, 6.0), DVec3::new(0.0, 10.0, 2.0)]
        );
        assert_eq!(registry.camera_count(), 2);
    }

    #[test]
    fn test_degenerate_camera_not_added() {
        let mut registry = SceneRegistry::new();
        assert!(registry
            .add_camera_node(DVec3::ZERO, DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0))
            .is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_default_tag_is_identity() {
        let registry = SceneRegistry::new();
        assert_eq!(*registry.tag(), SceneNode::identity());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut registry = SceneRegistry::new();
        registry.add_camera_node(DVec3::X, DQuat::IDENTITY).unwrap();
        let copy = registry.clone();
        registry.add_camera_node(DVec3::Y, DQuat::IDENTITY).unwrap();
        assert_eq!(copy.camera_count(), 1);
        assert_eq!(registry.camera_count(), 2);
    }
}
