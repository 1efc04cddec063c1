//! Gallery configuration.
//!
//! Every field defaults to the values of the reference demo, so an empty JSON
//! object (or no config at all) yields the six-image carousel.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::domain::errors::{ConfigResult, GalleryError};
use crate::domain::logging::LogLevel;
use crate::domain::motion::{DAMPING, RING_RADIUS, SURFACE_COUNT, WHEEL_SENSITIVITY};

/// Which surfaces get their shader time advanced on every frame.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TimeUniformPolicy {
    /// Only the most recently created surface ticks.
    #[default]
    LastSurface,
    AllSurfaces,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub look_at: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 35.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 0.0, 40.0],
            look_at: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneConfig {
    pub width: f32,
    pub height: f32,
    /// Fallback width/height ratio of the images, used until a texture reports its own.
    pub image_aspect: f32,
    pub plane_aspect: f32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self { width: 5.0, height: 8.0, image_aspect: 2512.0 / 4345.0, plane_aspect: 500.0 / 800.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub surface_count: usize,
    pub radius: f64,
    pub wheel_sensitivity: f64,
    pub damping: f64,
    pub texture_dir: String,
    pub texture_extension: String,
    /// 0xRRGGBB
    pub clear_color: u32,
    pub container_id: String,
    pub canvas_id: String,
    pub vertex_shader_id: String,
    pub fragment_shader_id: String,
    pub time_uniform_policy: TimeUniformPolicy,
    pub log_level: LogLevel,
    pub camera: CameraConfig,
    pub plane: PlaneConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            surface_count: SURFACE_COUNT,
            radius: RING_RADIUS,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            damping: DAMPING,
            texture_dir: "./".to_string(),
            texture_extension: "jpg".to_string(),
            clear_color: 0xf5b2b2,
            container_id: "webgl".to_string(),
            canvas_id: "gallery-canvas".to_string(),
            vertex_shader_id: "v-shader".to_string(),
            fragment_shader_id: "f-shader".to_string(),
            time_uniform_policy: TimeUniformPolicy::default(),
            log_level: LogLevel::build_default(),
            camera: CameraConfig::default(),
            plane: PlaneConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: GalleryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.surface_count == 0 {
            return Err(GalleryError::ConfigError("surface_count must be at least 1".into()));
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(GalleryError::ConfigError(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(GalleryError::ConfigError(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }
        if !self.wheel_sensitivity.is_finite() {
            return Err(GalleryError::ConfigError("wheel_sensitivity must be finite".into()));
        }
        if self.plane.width <= 0.0 || self.plane.height <= 0.0 {
            return Err(GalleryError::ConfigError(format!(
                "plane must have a positive size, got {}x{}",
                self.plane.width, self.plane.height
            )));
        }
        if self.plane.image_aspect <= 0.0 || self.plane.plane_aspect <= 0.0 {
            return Err(GalleryError::ConfigError("aspect ratios must be positive".into()));
        }
        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            return Err(GalleryError::ConfigError(format!(
                "camera clip range {}..{} is empty",
                self.camera.near, self.camera.far
            )));
        }
        let fov = self.camera.fov_y_deg;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(GalleryError::ConfigError(format!(
                "camera fov_y_deg must be in (0, 180), got {}",
                fov
            )));
        }
        if self.camera.position == self.camera.look_at {
            return Err(GalleryError::ConfigError(
                "camera position and look_at must differ".into(),
            ));
        }
        Ok(())
    }

    /// Image path for a surface: index 0 maps to `01.jpg`.
    pub fn texture_path(&self, index: usize) -> String {
        format!("{}{:02}.{}", self.texture_dir, index + 1, self.texture_extension)
    }

    pub fn texture_paths(&self) -> Vec<String> {
        (0..self.surface_count).map(|i| self.texture_path(i)).collect()
    }

    /// Clear color as normalized sRGB components.
    pub fn clear_rgb(&self) -> [f64; 3] {
        let channel = |shift: u32| ((self.clear_color >> shift) & 0xff) as f64 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}
