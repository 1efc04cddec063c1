//! Carousel motion: a damped angular velocity integrated into a rotation,
//! and the placement of each surface on the ring.

use glam::Vec3;
use std::f64::consts::TAU;
use strum::Display;

pub const SURFACE_COUNT: usize = 6;
pub const RING_RADIUS: f64 = 12.0;
/// Speed gained per unit of wheel delta.
pub const WHEEL_SENSITIVITY: f64 = 0.0002;
/// Per-frame multiplicative decay of the speed.
pub const DAMPING: f64 = 0.93;
/// Below this speed the carousel counts as settled.
pub const SETTLE_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MotionPhase {
    Idle,
    Decelerating,
}

/// Accumulated angle and angular velocity of the whole carousel, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    rotation: f64,
    speed: f64,
}

impl RotationState {
    pub fn new(rotation: f64, speed: f64) -> Self {
        Self { rotation, speed }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Add a wheel impulse. Unbounded; damping takes care of large deltas.
    pub fn impulse(&mut self, delta_y: f64, sensitivity: f64) {
        self.speed += delta_y * sensitivity;
    }

    /// Integrate one frame, then decay the speed.
    pub fn advance(&mut self, damping: f64) {
        self.rotation += self.speed;
        self.speed *= damping;
    }

    pub fn phase(&self) -> MotionPhase {
        if self.speed.abs() < SETTLE_EPSILON {
            MotionPhase::Idle
        } else {
            MotionPhase::Decelerating
        }
    }
}

/// Angular width of one slot on a ring of `count` surfaces.
pub fn slot_angle(count: usize) -> f64 {
    TAU / count as f64
}

/// Angle of surface `index`: one slot ahead of its index, plus half a slot.
///
/// With six surfaces this is `rotation + (i + 1) * π/3 + π/6`.
pub fn surface_angle(index: usize, count: usize, rotation: f64) -> f64 {
    let slot = slot_angle(count);
    rotation + (index + 1) as f64 * slot + slot * 0.5
}

/// Where a surface sits on the ring for a given rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePlacement {
    pub angle: f64,
    pub x: f64,
    pub z: f64,
}

impl SurfacePlacement {
    pub fn on_ring(index: usize, count: usize, rotation: f64, radius: f64) -> Self {
        let angle = surface_angle(index, count, rotation);
        Self { angle, x: radius * angle.cos(), z: radius * angle.sin() }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x as f32, 0.0, self.z as f32)
    }
}
