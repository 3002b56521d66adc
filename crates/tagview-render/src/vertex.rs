//! GPU-side vertex and uniform layouts.

use glam::{DMat4, Mat4};
use tagview_core::ColoredVertex;

/// A world-space vertex as uploaded to the vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl GpuVertex {
    /// Vertex buffer attributes: location 0 is the position, location 1 the color.
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Buffer layout for the marker pipeline.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Transforms a model-space vertex into world space with `model`.
    ///
    /// The product is taken in double precision and narrowed afterwards.
    #[must_use]
    pub fn from_model(model: DMat4, vertex: &ColoredVertex) -> Self {
        let world = model.transform_point3(vertex.position.as_dvec3());
        Self {
            position: world.as_vec3().to_array(),
            color: vertex.color.to_array(),
        }
    }
}

/// Camera uniforms for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniforms {
    /// Builds uniforms from a view and a projection matrix.
    #[must_use]
    pub fn new(view: DMat4, projection: DMat4) -> Self {
        Self {
            view_proj: (projection * view).as_mat4().to_cols_array_2d(),
        }
    }
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DQuat, DVec3, Vec3};

    #[test]
    fn test_vertex_layout_stride() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24);
        assert_eq!(GpuVertex::layout().array_stride, 24);
        assert_eq!(GpuVertex::ATTRIBUTES[1].offset, 12);
    }

    #[test]
    fn test_from_model_applies_rotation_then_translation() {
        let model = DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0))
            * DMat4::from_quat(DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2));
        let vertex = ColoredVertex::new(Vec3::X, Vec3::new(1.0, 0.0, 0.0));
        let gpu = GpuVertex::from_model(model, &vertex);

        let expected = Vec3::new(0.0, 0.0, 4.0);
        assert!(Vec3::from_array(gpu.position).abs_diff_eq(expected, 1e-6));
        assert_eq!(gpu.color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_camera_uniforms_order() {
        let view = DMat4::from_translation(DVec3::new(0.0, 0.0, -2.0));
        let projection = DMat4::from_scale(DVec3::new(2.0, 2.0, 1.0));
        let uniforms = CameraUniforms::new(view, projection);
        let m = Mat4::from_cols_array_2d(&uniforms.view_proj);

        // Translation happens in view space before scaling.
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(2.0, 0.0, -2.0), 1e-6));
    }
}
