//! Browser glue: canvas mounting, input listeners, the frame loop and the
//! exported JavaScript API.

pub mod canvas;
pub mod frame_loop;
pub mod gallery_app;
pub mod wasm_api;

pub use gallery_app::GalleryApp;
pub use wasm_api::{is_gallery_running, start_gallery, stop_gallery};
