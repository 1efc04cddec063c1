use crate::domain::motion::SurfacePlacement;

/// Position of a surface in creation order, `0..surface_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SurfaceIndex(pub usize);

/// Current spot on the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement(pub SurfacePlacement);

/// Frames elapsed as seen by the surface's shader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShaderClock(pub u64);

/// Page-relative image path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSource(pub String);

/// Width/height ratio of the image shown on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageAspect(pub f32);
