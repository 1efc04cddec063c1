//! Gallery controller: the single owner of rotation state, camera and surfaces.
//!
//! The host calls [`GalleryController::step`] once per display refresh and
//! forwards wheel and resize events; the renderer reads [`GalleryFrame`]s.

use glam::Mat4;

use crate::domain::{
    camera::{PerspectiveCamera, Viewport},
    config::GalleryConfig,
    errors::ConfigResult,
    logging::LogComponent,
    motion::{MotionPhase, RotationState, SurfacePlacement},
};
use crate::ecs::{
    EcsWorld,
    components::{ImageAspect, Placement, ShaderClock, SurfaceIndex, TextureSource},
    systems::{advance_shader_time, place_surfaces},
};
use crate::{log_debug, log_info, log_trace};

/// Everything the renderer needs for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    pub index: usize,
    pub model: Mat4,
    pub image_aspect: f32,
    pub plane_aspect: f32,
    pub time: f32,
}

/// Snapshot of the scene after a step, surfaces in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryFrame {
    pub view_proj: Mat4,
    pub surfaces: Vec<SurfaceFrame>,
}

pub struct GalleryController {
    config: GalleryConfig,
    motion: RotationState,
    camera: PerspectiveCamera,
    viewport: Viewport,
    ecs: EcsWorld,
    frame_count: u64,
    stopped: bool,
}

impl GalleryController {
    pub fn new(config: GalleryConfig, width: u32, height: u32) -> ConfigResult<Self> {
        config.validate()?;
        let viewport = Viewport::new(width.max(1), height.max(1));
        let camera = PerspectiveCamera::from_config(&config.camera, viewport.aspect());
        let mut ecs = EcsWorld::new();
        ecs.spawn_gallery(&config);

        log_info!(
            LogComponent::Application("GalleryController"),
            "🎠 Gallery created: {} surfaces on radius {}, policy {}",
            config.surface_count,
            config.radius,
            config.time_uniform_policy
        );

        Ok(Self {
            config,
            motion: RotationState::default(),
            camera,
            viewport,
            ecs,
            frame_count: 0,
            stopped: false,
        })
    }

    /// Wheel input: `speed += delta_y * k`.
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.motion.impulse(delta_y, self.config.wheel_sensitivity);
        log_trace!(
            LogComponent::Application("GalleryController"),
            "wheel {:+.1} -> speed {:.5}",
            delta_y,
            self.motion.speed()
        );
    }

    /// Advance one animation frame. No-op once stopped.
    pub fn step(&mut self) {
        if self.stopped {
            return;
        }
        self.motion.advance(self.config.damping);
        place_surfaces(&mut self.ecs.world, self.motion.rotation(), self.config.radius);
        advance_shader_time(&mut self.ecs.world, self.config.time_uniform_policy);
        self.frame_count += 1;
    }

    /// Track a new viewport size. Zero-sized viewports are ignored.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        if viewport.is_empty() {
            return;
        }
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        log_debug!(
            LogComponent::Application("GalleryController"),
            "📐 Viewport {}x{}, aspect {:.3}",
            width,
            height,
            self.camera.aspect
        );
    }

    /// Stop token: the frame loop checks it before every frame.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            log_info!(
                LogComponent::Application("GalleryController"),
                "⏹️ Gallery stopped after {} frames",
                self.frame_count
            );
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Record the real width/height ratio of a loaded image.
    pub fn set_image_aspect(&mut self, index: usize, aspect: f32) {
        if !(aspect > 0.0 && aspect.is_finite()) {
            return;
        }
        if let Some(entity) = self.ecs.surface(index) {
            if let Ok(mut image) = self.ecs.world.get::<&mut ImageAspect>(entity) {
                image.0 = aspect;
            }
        }
    }

    pub fn rotation(&self) -> f64 {
        self.motion.rotation()
    }

    pub fn speed(&self) -> f64 {
        self.motion.speed()
    }

    pub fn motion_phase(&self) -> MotionPhase {
        self.motion.phase()
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Texture paths in surface order.
    pub fn texture_sources(&self) -> Vec<String> {
        let mut sources: Vec<(usize, String)> = self
            .ecs
            .world
            .query::<(&SurfaceIndex, &TextureSource)>()
            .iter()
            .map(|(_, (index, source))| (index.0, source.0.clone()))
            .collect();
        sources.sort_by_key(|(index, _)| *index);
        sources.into_iter().map(|(_, path)| path).collect()
    }

    /// Current placements in surface order.
    pub fn placements(&self) -> Vec<SurfacePlacement> {
        let mut placements: Vec<(usize, SurfacePlacement)> = self
            .ecs
            .world
            .query::<(&SurfaceIndex, &Placement)>()
            .iter()
            .map(|(_, (index, placement))| (index.0, placement.0))
            .collect();
        placements.sort_by_key(|(index, _)| *index);
        placements.into_iter().map(|(_, placement)| placement).collect()
    }

    /// Shader clocks in surface order.
    pub fn shader_times(&self) -> Vec<u64> {
        let mut clocks: Vec<(usize, u64)> = self
            .ecs
            .world
            .query::<(&SurfaceIndex, &ShaderClock)>()
            .iter()
            .map(|(_, (index, clock))| (index.0, clock.0))
            .collect();
        clocks.sort_by_key(|(index, _)| *index);
        clocks.into_iter().map(|(_, time)| time).collect()
    }

    pub fn frame(&self) -> GalleryFrame {
        let plane_aspect = self.config.plane.plane_aspect;
        let mut surfaces: Vec<SurfaceFrame> = self
            .ecs
            .world
            .query::<(&SurfaceIndex, &Placement, &ShaderClock, &ImageAspect)>()
            .iter()
            .map(|(_, (index, placement, clock, image))| SurfaceFrame {
                index: index.0,
                model: Mat4::from_translation(placement.0.position()),
                image_aspect: image.0,
                plane_aspect,
                time: clock.0 as f32,
            })
            .collect();
        surfaces.sort_by_key(|surface| surface.index);

        GalleryFrame { view_proj: self.camera.view_projection_matrix(), surfaces }
    }
}
