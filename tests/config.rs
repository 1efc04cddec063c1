use image_carousel_wasm::domain::config::{GalleryConfig, TimeUniformPolicy};
use image_carousel_wasm::domain::errors::GalleryError;
use image_carousel_wasm::domain::logging::LogLevel;
use insta::assert_json_snapshot;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn empty_object_gives_the_default_carousel() {
    let config = GalleryConfig::from_json("{}").expect("empty config is valid");
    assert_eq!(config, GalleryConfig::default());
    assert_eq!(config.surface_count, 6);
    assert_eq!(config.radius, 12.0);
    assert_eq!(config.wheel_sensitivity, 0.0002);
    assert_eq!(config.damping, 0.93);
    assert_eq!(config.container_id, "webgl");
    assert_eq!(config.time_uniform_policy, TimeUniformPolicy::LastSurface);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let config = GalleryConfig::from_json(
        r#"{
            "radius": 20.0,
            "time_uniform_policy": "all-surfaces",
            "log_level": "warn",
            "camera": {"fov_y_deg": 50.0}
        }"#,
    )
    .expect("valid config");
    assert_eq!(config.radius, 20.0);
    assert_eq!(config.time_uniform_policy, TimeUniformPolicy::AllSurfaces);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.camera.fov_y_deg, 50.0);
    assert_eq!(config.camera.far, 1000.0);
    assert_eq!(config.surface_count, 6);
}

#[test]
fn out_of_range_values_are_rejected() {
    for json in [
        r#"{"surface_count": 0}"#,
        r#"{"radius": -1.0}"#,
        r#"{"damping": 1.0}"#,
        r#"{"plane": {"width": 0.0}}"#,
        r#"{"camera": {"near": 10.0, "far": 5.0}}"#,
        r#"{"camera": {"fov_y_deg": 0.0}}"#,
        r#"{"camera": {"fov_y_deg": 180.0}}"#,
        r#"{"camera": {"fov_y_deg": -35.0}}"#,
        r#"{"camera": {"position": [0.0, 0.0, 0.0]}}"#,
    ] {
        assert!(
            matches!(GalleryConfig::from_json(json), Err(GalleryError::ConfigError(_))),
            "{json} should be rejected"
        );
    }
}

#[test]
fn degenerate_camera_is_rejected() {
    let mut config = GalleryConfig::default();
    config.camera.look_at = config.camera.position;
    let err = config.validate().expect_err("camera has no view direction");
    assert!(err.to_string().contains("look_at"));

    let mut config = GalleryConfig::default();
    config.camera.fov_y_deg = f32::NAN;
    assert!(matches!(config.validate(), Err(GalleryError::ConfigError(_))));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = GalleryConfig::from_json("{").expect_err("not json");
    assert!(matches!(err, GalleryError::ConfigError(_)));
    assert!(err.to_string().starts_with("Config Error"));
}

#[test]
fn texture_paths_use_two_digit_numbers() {
    let config = GalleryConfig {
        surface_count: 12,
        texture_dir: "img/".into(),
        texture_extension: "webp".into(),
        ..GalleryConfig::default()
    };
    assert_eq!(config.texture_path(0), "img/01.webp");
    assert_json_snapshot!(config.texture_paths(), @r###"
    [
      "img/01.webp",
      "img/02.webp",
      "img/03.webp",
      "img/04.webp",
      "img/05.webp",
      "img/06.webp",
      "img/07.webp",
      "img/08.webp",
      "img/09.webp",
      "img/10.webp",
      "img/11.webp",
      "img/12.webp"
    ]
    "###);
}

#[test]
fn clear_color_splits_into_channels() {
    let [r, g, b] = GalleryConfig::default().clear_rgb();
    assert!((r - 245.0 / 255.0).abs() < 1e-12);
    assert!((g - 178.0 / 255.0).abs() < 1e-12);
    assert!((b - 178.0 / 255.0).abs() < 1e-12);
}

#[test]
fn policy_names_round_trip_through_strings() {
    let names: Vec<String> =
        TimeUniformPolicy::iter().map(|policy| policy.to_string()).collect();
    assert_eq!(names, ["last-surface", "all-surfaces"]);
    for name in &names {
        let policy = TimeUniformPolicy::from_str(name).expect("known policy");
        assert_eq!(&policy.to_string(), name);
    }
    assert!(TimeUniformPolicy::from_str("every-other").is_err());
}
