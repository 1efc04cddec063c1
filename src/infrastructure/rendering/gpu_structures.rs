use bytemuck::{Pod, Zeroable};

use crate::application::{GalleryFrame, SurfaceFrame};

/// Vertex of an image plane
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PlaneVertex {
    /// Model-space position, plane lies in XY
    pub position: [f32; 3],
    /// Texture coordinate, (0, 0) at the top-left corner
    pub uv: [f32; 2],
}

impl PlaneVertex {
    pub fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self { position: [x, y, 0.0], uv: [u, v] }
    }

    /// Vertex buffer descriptor for wgpu
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PlaneVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // uv
                wgpu::VertexAttribute {
                    offset: (3 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Per-surface uniform block, mirrors `SurfaceUniforms` in the WGSL
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SurfaceUniforms {
    pub model: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    /// (image_aspect, plane_aspect, time, _padding)
    pub params: [f32; 4],
}

impl Default for SurfaceUniforms {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceUniforms {
    pub fn new() -> Self {
        let identity = glam::Mat4::IDENTITY.to_cols_array_2d();
        Self { model: identity, view_proj: identity, params: [1.0, 1.0, 0.0, 0.0] }
    }

    pub fn from_frame(frame: &GalleryFrame, surface: &SurfaceFrame) -> Self {
        Self {
            model: surface.model.to_cols_array_2d(),
            view_proj: frame.view_proj.to_cols_array_2d(),
            params: [surface.image_aspect, surface.plane_aspect, surface.time, 0.0],
        }
    }

    pub fn image_aspect(&self) -> f32 {
        self.params[0]
    }

    pub fn time(&self) -> f32 {
        self.params[2]
    }
}

/// Single-segment rectangle centred on the origin, like `PlaneGeometry(w, h)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneGeometry {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u16>,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        let vertices = vec![
            PlaneVertex::new(-hw, hh, 0.0, 0.0),  // top left
            PlaneVertex::new(hw, hh, 1.0, 0.0),   // top right
            PlaneVertex::new(-hw, -hh, 0.0, 1.0), // bottom left
            PlaneVertex::new(hw, -hh, 1.0, 1.0),  // bottom right
        ];
        // Counter-clockwise when seen from +Z
        let indices = vec![0, 2, 1, 2, 3, 1];
        Self { vertices, indices }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
