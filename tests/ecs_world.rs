use image_carousel_wasm::domain::config::{GalleryConfig, TimeUniformPolicy};
use image_carousel_wasm::ecs::EcsWorld;
use image_carousel_wasm::ecs::components::{Placement, ShaderClock, SurfaceIndex, TextureSource};
use image_carousel_wasm::ecs::systems::{advance_shader_time, place_surfaces};

#[test]
fn world_starts_empty() {
    let world = EcsWorld::new();
    assert_eq!(world.world.len(), 0);
    assert_eq!(world.surface_count(), 0);
}

#[test]
fn spawn_gallery_creates_one_entity_per_surface() {
    let mut world = EcsWorld::new();
    let entities = world.spawn_gallery(&GalleryConfig::default());
    assert_eq!(entities.len(), 6);
    assert_eq!(world.surface_count(), 6);

    let entity = world.surface(4).expect("surface 4 exists");
    assert_eq!(entity, entities[4]);
    let source = world.world.get::<&TextureSource>(entity).expect("texture source component");
    assert_eq!(source.0, "./05.jpg");
}

#[test]
fn unknown_surface_has_no_entity() {
    let mut world = EcsWorld::new();
    world.spawn_gallery(&GalleryConfig::default());
    assert!(world.surface(6).is_none());
}

#[test]
fn placement_system_follows_rotation() {
    let mut world = EcsWorld::new();
    world.spawn_gallery(&GalleryConfig::default());
    place_surfaces(&mut world.world, 1.0, 12.0);

    let entity = world.surface(0).expect("surface 0");
    let placement = world.world.get::<&Placement>(entity).expect("placement component");
    assert!((placement.0.angle - (1.0 + std::f64::consts::FRAC_PI_2)).abs() < 1e-9);
}

#[test]
fn shader_clock_system_respects_policy() {
    let mut world = EcsWorld::new();
    world.spawn_gallery(&GalleryConfig::default());
    advance_shader_time(&mut world.world, TimeUniformPolicy::LastSurface);
    advance_shader_time(&mut world.world, TimeUniformPolicy::AllSurfaces);

    let mut clocks: Vec<(usize, u64)> = world
        .world
        .query::<(&SurfaceIndex, &ShaderClock)>()
        .iter()
        .map(|(_, (index, clock))| (index.0, clock.0))
        .collect();
    clocks.sort();
    assert_eq!(clocks, vec![(0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 2)]);
}
