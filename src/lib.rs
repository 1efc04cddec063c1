//! Wheel-driven 3D image carousel rendered with wgpu in the browser.
//!
//! Everything that decides *where* things are (motion, placement, camera,
//! config) compiles natively and is tested without a browser. Rendering and
//! DOM glue only build for `wasm32`.

pub mod application;
pub mod domain;
pub mod ecs;
pub mod infrastructure;

#[cfg(target_arch = "wasm32")]
pub mod event_utils;
#[cfg(target_arch = "wasm32")]
pub mod presentation;
