use super::*;
use crate::application::GalleryFrame;
use crate::domain::errors::{GalleryError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::gpu_structures::SurfaceUniforms;
use crate::{log_debug, log_warn};

/// How often the average frame rate is logged.
const FPS_LOG_INTERVAL: u64 = 600;

impl WebGpuRenderer {
    fn write_uniforms(&self, frame: &GalleryFrame) {
        for surface in &frame.surfaces {
            if let Some(binding) = self.surfaces.get(surface.index) {
                let uniforms = SurfaceUniforms::from_frame(frame, surface);
                self.queue.write_buffer(&binding.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
            }
        }
    }

    pub fn render(&mut self, frame: &GalleryFrame, frame_number: u64) -> RenderingResult<()> {
        self.track_frame_time();
        if frame_number > 0 && frame_number % FPS_LOG_INTERVAL == 0 {
            log_debug!(
                LogComponent::Infrastructure("WebGpuRenderer"),
                "⏱️ {:.1} FPS over the last {} frames",
                self.average_fps(),
                self.fps_log.len()
            );
        }

        self.write_uniforms(frame);

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log_warn!(
                    LogComponent::Infrastructure("WebGpuRenderer"),
                    "Surface lost, reconfiguring {}x{}",
                    self.width,
                    self.height
                );
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => {
                return Err(GalleryError::RenderingError(format!(
                    "Failed to get surface texture: {:?}",
                    e
                )));
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            for binding in &self.surfaces {
                render_pass.set_bind_group(0, &binding.bind_group, &[]);
                render_pass.draw_indexed(0..self.index_count, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
