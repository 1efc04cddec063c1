pub mod gpu_structures;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod shader_source;

pub use gpu_structures::*;
#[cfg(target_arch = "wasm32")]
pub use renderer::WebGpuRenderer;
pub use shader_source::{ShaderOrigin, ShaderSource};
