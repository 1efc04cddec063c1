use futures::future::join_all;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use super::*;
use crate::domain::errors::{GalleryError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

const IMAGE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Fetch and decode one image through the browser.
pub async fn load_image(path: &str) -> RenderingResult<HtmlImageElement> {
    let image = HtmlImageElement::new()
        .map_err(|e| GalleryError::DomError(format!("Failed to create image element: {:?}", e)))?;
    image.set_src(path);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| GalleryError::RenderingError(format!("Failed to load '{}': {:?}", path, e)))?;
    log_debug!(
        LogComponent::Infrastructure("Textures"),
        "🖼️ Loaded {} ({}x{})",
        path,
        image.natural_width(),
        image.natural_height()
    );
    Ok(image)
}

/// Load all images concurrently; results keep the order of `paths`.
pub async fn load_images(paths: &[String]) -> Vec<RenderingResult<HtmlImageElement>> {
    join_all(paths.iter().map(|path| load_image(path))).await
}

/// 1x1 white texture shown until the real image arrives.
pub(super) fn create_placeholder_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> wgpu::Texture {
    let size = wgpu::Extent3d { width: 1, height: 1, depth_or_array_layers: 1 };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Placeholder Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: IMAGE_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &[255, 255, 255, 255],
        wgpu::TexelCopyBufferLayout { offset: 0, bytes_per_row: Some(4), rows_per_image: Some(1) },
        size,
    );
    texture
}

fn create_image_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    image: &HtmlImageElement,
) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width: image.natural_width().max(1),
        height: image.natural_height().max(1),
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Image Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: IMAGE_FORMAT,
        // External image copies need RENDER_ATTACHMENT on the destination
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::HTMLImageElement(image.clone()),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        size,
    );
    texture
}

pub(super) fn create_surface_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    uniform_buffer: &wgpu::Buffer,
    texture: &wgpu::Texture,
) -> wgpu::BindGroup {
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("surface_bind_group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry { binding: 0, resource: uniform_buffer.as_entire_binding() },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(sampler) },
        ],
    })
}

impl WebGpuRenderer {
    /// Swap the placeholder of surface `index` for a decoded image.
    /// Returns the image's width/height ratio.
    pub fn set_surface_image(
        &mut self,
        index: usize,
        image: &HtmlImageElement,
    ) -> RenderingResult<f32> {
        if index >= self.surfaces.len() {
            return Err(GalleryError::RenderingError(format!(
                "No surface {} (renderer has {})",
                index,
                self.surfaces.len()
            )));
        }
        let texture = create_image_texture(&self.device, &self.queue, image);
        let bind_group = create_surface_bind_group(
            &self.device,
            &self.bind_group_layout,
            &self.sampler,
            &self.surfaces[index].uniform_buffer,
            &texture,
        );
        let binding = &mut self.surfaces[index];
        binding.bind_group = bind_group;
        binding._texture = texture;

        let (width, height) = (image.natural_width(), image.natural_height());
        Ok(width.max(1) as f32 / height.max(1) as f32)
    }
}
