//! WebGPU renderer responsible for drawing the gallery planes.
//!
//! One vertex/index buffer holds the shared plane; each surface owns a
//! uniform buffer, a texture and the bind group tying them together. The
//! renderer never decides where anything goes: it draws [`GalleryFrame`]s
//! produced by the controller.
//!
//! [`GalleryFrame`]: crate::application::GalleryFrame

use std::collections::VecDeque;
use web_sys::HtmlCanvasElement;

mod initialization;
mod performance;
mod render_loop;
mod textures;

pub use initialization::{RendererSetup, find_canvas};
pub use textures::{load_image, load_images};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// GPU resources of one image plane
struct SurfaceBinding {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    _texture: wgpu::Texture,
}

pub struct WebGpuRenderer {
    canvas: HtmlCanvasElement,
    width: u32,
    height: u32,

    // WGPU state
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    // Rendering pipeline
    render_pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    depth_view: wgpu::TextureView,
    surfaces: Vec<SurfaceBinding>,
    clear_color: wgpu::Color,

    // ⏱️ Performance metrics
    last_frame_time: f64,
    fps_log: VecDeque<f64>,
}

impl WebGpuRenderer {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Take the canvas out of the page, used on shutdown.
    pub fn detach_canvas(&self) {
        self.canvas.remove();
    }
}

/// sRGB channel to linear, for clear colors on sRGB surfaces.
fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.04045 { channel / 12.92 } else { ((channel + 0.055) / 1.055).powf(2.4) }
}

fn clear_color_for(rgb: [f64; 3], format: wgpu::TextureFormat) -> wgpu::Color {
    let [r, g, b] = if format.is_srgb() { rgb.map(srgb_to_linear) } else { rgb };
    wgpu::Color { r, g, b, a: 1.0 }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
