use gloo::utils::document;
use wasm_bindgen::JsCast;
use wgpu::util::DeviceExt;

use super::*;
use crate::domain::errors::{GalleryError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::gpu_structures::{PlaneGeometry, PlaneVertex, SurfaceUniforms};
use crate::infrastructure::rendering::shader_source::ShaderSource;
use crate::{log_debug, log_info};

/// What the renderer needs to know about the scene up front.
pub struct RendererSetup<'a> {
    pub canvas: HtmlCanvasElement,
    pub width: u32,
    pub height: u32,
    pub shader: &'a ShaderSource,
    pub surface_count: usize,
    pub plane_width: f32,
    pub plane_height: f32,
    pub clear_rgb: [f64; 3],
}

/// Look up a canvas element by id.
pub fn find_canvas(canvas_id: &str) -> RenderingResult<HtmlCanvasElement> {
    document()
        .get_element_by_id(canvas_id)
        .ok_or_else(|| GalleryError::DomError(format!("Canvas with id '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GalleryError::DomError(format!("Element '{}' is not a canvas", canvas_id)))
}

impl WebGpuRenderer {
    pub async fn is_webgpu_supported() -> bool {
        if let Some(window) = web_sys::window() {
            let navigator = window.navigator();
            js_sys::Reflect::has(&navigator, &"gpu".into()).unwrap_or(false)
        } else {
            false
        }
    }

    pub async fn new(setup: RendererSetup<'_>) -> RenderingResult<Self> {
        let RendererSetup {
            canvas,
            width,
            height,
            shader,
            surface_count,
            plane_width,
            plane_height,
            clear_rgb,
        } = setup;
        let (width, height) = (width.max(1), height.max(1));

        canvas.set_width(width);
        canvas.set_height(height);

        // Picks WebGPU when `navigator.gpu` exists, WebGL2 otherwise
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GalleryError::RenderingError(format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GalleryError::RenderingError(format!("Failed to find adapter: {:?}", e)))?;

        log_info!(
            LogComponent::Infrastructure("WebGpuRenderer"),
            "🎯 Adapter: {:?}",
            adapter.get_info().backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: adapter.limits(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| {
                GalleryError::RenderingError(format!("Failed to create device: {:?}", e))
            })?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| GalleryError::RenderingError("Surface reports no formats".into()))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        log_debug!(
            LogComponent::Infrastructure("WebGpuRenderer"),
            "🎯 Surface config: {}x{}, format: {:?}",
            config.width,
            config.height,
            config.format
        );

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("surface_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Image Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Gallery Shader"),
            source: wgpu::ShaderSource::Wgsl(shader.wgsl.as_str().into()),
        });

        let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: Some("vs_main"),
                buffers: &[PlaneVertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Planes are double-sided
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let plane = PlaneGeometry::new(plane_width, plane_height);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Plane Vertex Buffer"),
            contents: bytemuck::cast_slice(&plane.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Plane Index Buffer"),
            contents: bytemuck::cast_slice(&plane.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let surfaces = (0..surface_count)
            .map(|_| {
                let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Surface Uniform Buffer"),
                    contents: bytemuck::cast_slice(&[SurfaceUniforms::new()]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let texture = textures::create_placeholder_texture(&device, &queue);
                let bind_group = textures::create_surface_bind_group(
                    &device,
                    &bind_group_layout,
                    &sampler,
                    &uniform_buffer,
                    &texture,
                );
                SurfaceBinding { uniform_buffer, bind_group, _texture: texture }
            })
            .collect();

        let depth_view = create_depth_view(&device, width, height);
        let clear_color = clear_color_for(clear_rgb, config.format);

        log_info!(
            LogComponent::Infrastructure("WebGpuRenderer"),
            "✅ Renderer ready: {} planes, {:?} shader",
            surface_count,
            shader.origin
        );

        Ok(Self {
            canvas,
            width,
            height,
            surface,
            device,
            queue,
            config,
            render_pipeline,
            bind_group_layout,
            sampler,
            vertex_buffer,
            index_buffer,
            index_count: plane.index_count(),
            depth_view,
            surfaces,
            clear_color,
            last_frame_time: 0.0,
            fps_log: VecDeque::new(),
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.width = new_width;
            self.height = new_height;
            self.canvas.set_width(new_width);
            self.canvas.set_height(new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, new_width, new_height);
        }
    }
}
