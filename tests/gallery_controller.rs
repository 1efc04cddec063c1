use image_carousel_wasm::application::GalleryController;
use image_carousel_wasm::domain::config::{GalleryConfig, TimeUniformPolicy};
use image_carousel_wasm::domain::errors::GalleryError;
use image_carousel_wasm::domain::motion::{MotionPhase, SurfacePlacement};
use insta::assert_json_snapshot;

const EPS: f64 = 1e-12;

fn controller() -> GalleryController {
    GalleryController::new(GalleryConfig::default(), 800, 600).expect("default config is valid")
}

#[test]
fn starts_at_rest_with_six_surfaces() {
    let gallery = controller();
    assert_eq!(gallery.rotation(), 0.0);
    assert_eq!(gallery.speed(), 0.0);
    assert_eq!(gallery.motion_phase(), MotionPhase::Idle);
    assert_eq!(gallery.placements().len(), 6);
    assert_eq!(gallery.frame_count(), 0);
    assert!((gallery.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn wheel_and_step_move_every_surface() {
    let mut gallery = controller();
    gallery.on_wheel(100.0);
    assert_eq!(gallery.motion_phase(), MotionPhase::Decelerating);
    gallery.step();

    assert!((gallery.rotation() - 0.02).abs() < EPS);
    assert!((gallery.speed() - 0.0186).abs() < EPS);
    for (i, placement) in gallery.placements().iter().enumerate() {
        let expected = SurfacePlacement::on_ring(i, 6, gallery.rotation(), 12.0);
        assert!((placement.x - expected.x).abs() < EPS);
        assert!((placement.z - expected.z).abs() < EPS);
    }
}

#[test]
fn resize_only_touches_the_camera() {
    let mut gallery = controller();
    gallery.on_wheel(40.0);
    gallery.step();
    let (rotation, speed) = (gallery.rotation(), gallery.speed());

    gallery.on_resize(1920, 1080);
    assert!((gallery.camera().aspect - 1920.0 / 1080.0).abs() < 1e-6);
    assert_eq!(gallery.viewport().width, 1920);
    assert_eq!(gallery.rotation(), rotation);
    assert_eq!(gallery.speed(), speed);
}

#[test]
fn zero_sized_resize_is_ignored() {
    let mut gallery = controller();
    gallery.on_resize(0, 900);
    gallery.on_resize(900, 0);
    assert_eq!(gallery.viewport().width, 800);
    assert!((gallery.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn stopped_gallery_no_longer_steps() {
    let mut gallery = controller();
    gallery.on_wheel(100.0);
    gallery.step();
    gallery.stop();
    assert!(gallery.is_stopped());

    let rotation = gallery.rotation();
    gallery.step();
    gallery.step();
    assert_eq!(gallery.rotation(), rotation);
    assert_eq!(gallery.frame_count(), 1);
}

#[test]
fn only_the_last_surface_ticks_by_default() {
    let mut gallery = controller();
    for _ in 0..3 {
        gallery.step();
    }
    assert_eq!(gallery.shader_times(), vec![0, 0, 0, 0, 0, 3]);
}

#[test]
fn all_surfaces_tick_when_asked() {
    let config = GalleryConfig {
        time_uniform_policy: TimeUniformPolicy::AllSurfaces,
        ..GalleryConfig::default()
    };
    let mut gallery = GalleryController::new(config, 800, 600).expect("valid config");
    for _ in 0..3 {
        gallery.step();
    }
    assert_eq!(gallery.shader_times(), vec![3; 6]);
}

#[test]
fn frame_lists_surfaces_in_order() {
    let mut gallery = controller();
    gallery.on_wheel(-300.0);
    gallery.step();
    let frame = gallery.frame();
    let placements = gallery.placements();

    assert_eq!(frame.surfaces.len(), 6);
    for (i, surface) in frame.surfaces.iter().enumerate() {
        assert_eq!(surface.index, i);
        let translation = surface.model.w_axis.truncate();
        assert_eq!(translation, placements[i].position());
        assert!((surface.plane_aspect - 500.0 / 800.0).abs() < 1e-6);
    }
    assert_eq!(frame.surfaces[5].time, 1.0);
    assert_eq!(frame.view_proj, gallery.camera().view_projection_matrix());
}

#[test]
fn loaded_image_aspect_reaches_the_frame() {
    let mut gallery = controller();
    gallery.set_image_aspect(2, 1.5);
    gallery.set_image_aspect(3, -1.0);
    gallery.set_image_aspect(42, 2.0);

    let frame = gallery.frame();
    assert_eq!(frame.surfaces[2].image_aspect, 1.5);
    assert!((frame.surfaces[3].image_aspect - 2512.0 / 4345.0).abs() < 1e-6);
}

#[test]
fn texture_sources_follow_surface_order() {
    let gallery = controller();
    assert_json_snapshot!(gallery.texture_sources(), @r###"
    [
      "./01.jpg",
      "./02.jpg",
      "./03.jpg",
      "./04.jpg",
      "./05.jpg",
      "./06.jpg"
    ]
    "###);
}

#[test]
fn invalid_config_is_rejected() {
    let config = GalleryConfig { surface_count: 0, ..GalleryConfig::default() };
    let result = GalleryController::new(config, 800, 600);
    assert!(matches!(result, Err(GalleryError::ConfigError(_))));
}
