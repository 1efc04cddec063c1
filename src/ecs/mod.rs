use hecs::{Entity, World};

use crate::domain::config::GalleryConfig;
use crate::domain::motion::SurfacePlacement;

pub mod components;
pub mod systems;

use components::{ImageAspect, Placement, ShaderClock, SurfaceIndex, TextureSource};

/// ECS world holding the gallery surfaces.
#[derive(Default)]
pub struct EcsWorld {
    pub world: World,
}

impl EcsWorld {
    /// Create a new empty ECS world.
    pub fn new() -> Self {
        Self { world: World::new() }
    }

    /// Spawn one entity per surface, placed for a rotation of zero.
    pub fn spawn_gallery(&mut self, config: &GalleryConfig) -> Vec<Entity> {
        (0..config.surface_count)
            .map(|i| {
                let placement =
                    SurfacePlacement::on_ring(i, config.surface_count, 0.0, config.radius);
                self.world.spawn((
                    SurfaceIndex(i),
                    Placement(placement),
                    ShaderClock::default(),
                    TextureSource(config.texture_path(i)),
                    ImageAspect(config.plane.image_aspect),
                ))
            })
            .collect()
    }

    /// Entity of the surface with the given index.
    pub fn surface(&self, index: usize) -> Option<Entity> {
        self.world
            .query::<&SurfaceIndex>()
            .iter()
            .find(|(_, i)| i.0 == index)
            .map(|(entity, _)| entity)
    }

    pub fn surface_count(&self) -> usize {
        self.world.query::<&SurfaceIndex>().iter().count()
    }
}
