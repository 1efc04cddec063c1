//! Domain layer: carousel motion, camera, configuration and the logging/error
//! abstractions shared by every other layer.

pub mod camera;
pub mod config;
pub mod errors;
pub mod logging;
pub mod motion;

pub use camera::{PerspectiveCamera, Viewport};
pub use config::{CameraConfig, GalleryConfig, PlaneConfig, TimeUniformPolicy};
pub use errors::GalleryError;
pub use motion::{MotionPhase, RotationState, SurfacePlacement};
