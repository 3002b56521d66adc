//! The wgpu rendering engine.
//!
//! [`RenderEngine`] implements [`tagview_core::DrawTarget`] on top of wgpu.
//! Draw calls are recorded on the CPU during a frame: each triangle list is
//! transformed by the current model matrix and appended to a frame vertex
//! list. `present` uploads that list and draws it in a single pass.

mod capture;
mod frame;
mod pipeline;

use std::sync::Arc;

use glam::DMat4;
use wgpu::util::DeviceExt;

use crate::error::{RenderError, RenderResult};
use crate::transform_stack::TransformStack;
use crate::vertex::{CameraUniforms, GpuVertex};

/// Depth buffer format.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Color format of the headless render target.
pub const HEADLESS_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Vertex capacity the frame buffer starts with.
const INITIAL_VERTEX_CAPACITY: u64 = 1024;

/// The rendering engine backed by wgpu.
pub struct RenderEngine {
    /// The wgpu device.
    pub device: wgpu::Device,
    /// The wgpu queue.
    pub queue: wgpu::Queue,
    /// The window surface (None for headless).
    surface: Option<wgpu::Surface<'static>>,
    /// Size and format of the color target.
    surface_config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    /// Offscreen color target (headless only).
    offscreen: Option<capture::OffscreenTarget>,
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    /// Number of vertices `vertex_buffer` can hold.
    vertex_capacity: u64,

    // Per-frame draw state.
    clear_color: wgpu::Color,
    view: DMat4,
    projection: DMat4,
    transforms: TransformStack,
    frame_vertices: Vec<GpuVertex>,
}

impl RenderEngine {
    /// Creates a render engine presenting to `window`.
    pub async fn new_windowed(
        window: Arc<winit::window::Window>,
        vsync: bool,
    ) -> RenderResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..wgpu::InstanceDescriptor::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let (adapter, device, queue) =
            Self::request_device(&instance, Some(&surface), "tagview device").await?;

        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(RenderError::NoSurfaceFormat)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        log::info!(
            "windowed engine on {} ({:?}), {width}x{height}",
            adapter.get_info().name,
            surface_format
        );

        Ok(Self::from_parts(device, queue, Some(surface), surface_config))
    }

    /// Creates a render engine drawing into an offscreen `width × height`
    /// texture.
    pub async fn new_headless(width: u32, height: u32) -> RenderResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..wgpu::InstanceDescriptor::default()
        });

        let (adapter, device, queue) =
            Self::request_device(&instance, None, "tagview device (headless)").await?;

        let width = width.max(1);
        let height = height.max(1);
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            format: HEADLESS_FORMAT,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        log::info!(
            "headless engine on {}, {width}x{height}",
            adapter.get_info().name
        );

        let mut engine = Self::from_parts(device, queue, None, surface_config);
        engine.offscreen = Some(capture::OffscreenTarget::new(&engine.device, width, height));
        Ok(engine)
    }

    async fn request_device(
        instance: &wgpu::Instance,
        surface: Option<&wgpu::Surface<'static>>,
        label: &str,
    ) -> RenderResult<(wgpu::Adapter, wgpu::Device, wgpu::Queue)> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: surface,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| RenderError::AdapterCreationFailed)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some(label),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
            })
            .await?;

        Ok((adapter, device, queue))
    }

    fn from_parts(
        device: wgpu::Device,
        queue: wgpu::Queue,
        surface: Option<wgpu::Surface<'static>>,
        surface_config: wgpu::SurfaceConfiguration,
    ) -> Self {
        let depth_view =
            Self::create_depth_view(&device, surface_config.width, surface_config.height);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera uniforms"),
            contents: bytemuck::cast_slice(&[CameraUniforms::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_layout = pipeline::camera_bind_group_layout(&device);
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera bind group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });
        let pipeline =
            pipeline::create_marker_pipeline(&device, surface_config.format, &camera_layout);

        let vertex_buffer = Self::create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);

        Self {
            device,
            queue,
            surface,
            surface_config,
            depth_view,
            offscreen: None,
            pipeline,
            camera_buffer,
            camera_bind_group,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            clear_color: wgpu::Color::WHITE,
            view: DMat4::IDENTITY,
            projection: DMat4::IDENTITY,
            transforms: TransformStack::new(),
            frame_vertices: Vec::new(),
        }
    }

    /// Resizes the render target. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.surface_config.width && height == self.surface_config.height {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;

        if let Some(ref surface) = self.surface {
            surface.configure(&self.device, &self.surface_config);
        }
        if self.offscreen.is_some() {
            self.offscreen = Some(capture::OffscreenTarget::new(&self.device, width, height));
        }

        self.depth_view = Self::create_depth_view(&self.device, width, height);
    }

    /// Current target size in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// Color format of the render target.
    pub fn color_format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    /// Whether this engine renders offscreen.
    pub fn is_headless(&self) -> bool {
        self.surface.is_none()
    }

    /// The model matrix applied to the next `draw_triangles` call.
    pub fn model_matrix(&self) -> DMat4 {
        self.transforms.current()
    }

    /// Vertices recorded since the last clear.
    pub fn recorded_vertices(&self) -> &[GpuVertex] {
        &self.frame_vertices
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame vertices"),
            size: capacity * std::mem::size_of::<GpuVertex>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Grows the vertex buffer to hold at least `count` vertices.
    fn reserve_vertices(&mut self, count: u64) {
        if count <= self.vertex_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        log::debug!("growing vertex buffer to {capacity} vertices");
        self.vertex_buffer = Self::create_vertex_buffer(&self.device, capacity);
        self.vertex_capacity = capacity;
    }
}
