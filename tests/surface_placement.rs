use image_carousel_wasm::domain::motion::{
    RING_RADIUS, SURFACE_COUNT, SurfacePlacement, slot_angle, surface_angle,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

const EPS: f64 = 1e-9;

#[test]
fn six_surfaces_sit_sixty_degrees_apart() {
    assert!((slot_angle(SURFACE_COUNT) - FRAC_PI_3).abs() < EPS);
    for i in 0..SURFACE_COUNT - 1 {
        let gap = surface_angle(i + 1, SURFACE_COUNT, 0.3) - surface_angle(i, SURFACE_COUNT, 0.3);
        assert!((gap - FRAC_PI_3).abs() < EPS, "gap after surface {i} is {gap}");
    }
}

#[test]
fn first_surface_starts_in_front() {
    // (0 + 1) * π/3 + π/6 = π/2
    let placement = SurfacePlacement::on_ring(0, SURFACE_COUNT, 0.0, RING_RADIUS);
    assert!((placement.angle - FRAC_PI_2).abs() < EPS);
    assert!(placement.x.abs() < EPS);
    assert!((placement.z - RING_RADIUS).abs() < EPS);
}

#[test]
fn positions_are_distinct() {
    let placements: Vec<_> = (0..SURFACE_COUNT)
        .map(|i| SurfacePlacement::on_ring(i, SURFACE_COUNT, 0.7, RING_RADIUS))
        .collect();
    for (a, first) in placements.iter().enumerate() {
        for second in &placements[a + 1..] {
            let distance = ((first.x - second.x).powi(2) + (first.z - second.z).powi(2)).sqrt();
            assert!(distance > 1.0);
        }
    }
}

#[test]
fn position_stays_on_the_floor() {
    let position = SurfacePlacement::on_ring(3, SURFACE_COUNT, 1.0, RING_RADIUS).position();
    assert_eq!(position.y, 0.0);
}

#[quickcheck]
fn every_surface_lies_on_the_ring(rotation: f64, index: u8) -> TestResult {
    if !rotation.is_finite() {
        return TestResult::discard();
    }
    let rotation = rotation % 100.0;
    let index = index as usize % SURFACE_COUNT;
    let placement = SurfacePlacement::on_ring(index, SURFACE_COUNT, rotation, RING_RADIUS);
    let radius = (placement.x * placement.x + placement.z * placement.z).sqrt();
    TestResult::from_bool((radius - RING_RADIUS).abs() < 1e-9)
}

#[quickcheck]
fn rotation_shifts_every_angle_equally(rotation: f64) -> TestResult {
    if !rotation.is_finite() {
        return TestResult::discard();
    }
    let rotation = rotation % 100.0;
    TestResult::from_bool((0..SURFACE_COUNT).all(|i| {
        let shift =
            surface_angle(i, SURFACE_COUNT, rotation) - surface_angle(i, SURFACE_COUNT, 0.0);
        (shift - rotation).abs() < 1e-9
    }))
}
