//! Frame recording and submission.

use glam::{DMat4, DVec3, Vec3};
use tagview_core::{ColoredVertex, DrawTarget};

use super::RenderEngine;
use crate::error::{RenderError, RenderResult};
use crate::vertex::{CameraUniforms, GpuVertex};

/// Where the current frame's color goes.
enum FrameTarget {
    Surface(wgpu::SurfaceTexture),
    Offscreen,
}

impl RenderEngine {
    /// Uploads the recorded frame and draws it.
    ///
    /// Returns `Ok(false)` when the window surface could not provide a texture
    /// this frame and nothing was drawn.
    pub fn submit_frame(&mut self) -> RenderResult<bool> {
        let Some(target) = self.acquire_target()? else {
            return Ok(false);
        };

        let uniforms = CameraUniforms::new(self.view, self.projection);
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        let vertex_count = self.frame_vertices.len() as u64;
        self.reserve_vertices(vertex_count);
        if vertex_count > 0 {
            self.queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.frame_vertices),
            );
        }

        let surface_view = match &target {
            FrameTarget::Surface(texture) => Some(
                texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default()),
            ),
            FrameTarget::Offscreen => None,
        };
        let color_view = match (&surface_view, &self.offscreen) {
            (Some(view), _) => view,
            (None, Some(offscreen)) => &offscreen.view,
            (None, None) => return Err(RenderError::NotHeadless),
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            if vertex_count > 0 {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..vertex_count as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));

        if let FrameTarget::Surface(texture) = target {
            texture.present();
        }
        Ok(true)
    }

    fn acquire_target(&self) -> RenderResult<Option<FrameTarget>> {
        let Some(surface) = self.surface.as_ref() else {
            return Ok(Some(FrameTarget::Offscreen));
        };

        let error = match surface.get_current_texture() {
            Ok(texture) => return Ok(Some(FrameTarget::Surface(texture))),
            Err(e) => e,
        };
        match classify_surface_error(&error)? {
            SurfaceRecovery::Reconfigure => {
                surface.configure(&self.device, &self.surface_config);
                match surface.get_current_texture() {
                    Ok(texture) => Ok(Some(FrameTarget::Surface(texture))),
                    Err(e) => {
                        log::warn!("Surface unavailable after reconfigure: {e}");
                        Ok(None)
                    }
                }
            }
            SurfaceRecovery::SkipFrame => Ok(None),
        }
    }
}

/// How a frame continues after the surface refused a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceRecovery {
    /// Reconfigure the surface and try once more.
    Reconfigure,
    /// Draw nothing this frame.
    SkipFrame,
}

/// Only running out of memory is fatal.
fn classify_surface_error(error: &wgpu::SurfaceError) -> RenderResult<SurfaceRecovery> {
    match error {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            Ok(SurfaceRecovery::Reconfigure)
        }
        wgpu::SurfaceError::OutOfMemory => Err(RenderError::OutOfMemory),
        wgpu::SurfaceError::Timeout => {
            log::warn!("Surface timeout");
            Ok(SurfaceRecovery::SkipFrame)
        }
        wgpu::SurfaceError::Other => {
            log::warn!("Surface error: other");
            Ok(SurfaceRecovery::SkipFrame)
        }
    }
}

impl DrawTarget for RenderEngine {
    fn clear(&mut self, color: Vec3) {
        self.clear_color = wgpu::Color {
            r: f64::from(color.x),
            g: f64::from(color.y),
            b: f64::from(color.z),
            a: 1.0,
        };
        self.frame_vertices.clear();
        self.transforms.reset();
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.resize(width, height);
    }

    fn set_projection(&mut self, fov_degrees: f64, aspect: f64, near: f64, far: f64) {
        self.projection = DMat4::perspective_rh(fov_degrees.to_radians(), aspect, near, far);
    }

    fn set_view(&mut self, eye: DVec3, target: DVec3, up: DVec3) {
        self.view = DMat4::look_at_rh(eye, target, up);
    }

    fn push_transform(&mut self) {
        self.transforms.push();
    }

    fn pop_transform(&mut self) {
        self.transforms.pop();
    }

    fn translate(&mut self, offset: DVec3) {
        self.transforms.translate(offset);
    }

    fn multiply(&mut self, matrix: DMat4) {
        self.transforms.multiply(matrix);
    }

    fn draw_triangles(&mut self, vertices: &[ColoredVertex]) {
        let model = self.transforms.current();
        self.frame_vertices
            .extend(vertices.iter().map(|v| GpuVertex::from_model(model, v)));
    }

    fn present(&mut self) -> tagview_core::Result<()> {
        self.submit_frame()?;
        Ok(())
    }
}
