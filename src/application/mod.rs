pub mod gallery_controller;
pub mod launch_sequence;

pub use gallery_controller::{GalleryController, GalleryFrame, SurfaceFrame};
pub use launch_sequence::{LaunchSequence, LaunchTicket};
