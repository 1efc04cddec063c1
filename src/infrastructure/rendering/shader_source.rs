//! Shader program selection.
//!
//! A page may ship its own WGSL in two text elements (`v-shader` and
//! `f-shader` by default). The two blocks are compiled as one module, so the
//! fragment block can use the structs and bindings declared by the vertex
//! block. Without both blocks the built-in program is used. Blocks must be
//! tagged as WGSL (`type="text/wgsl"`); GLSL blocks left over from WebGL pages
//! are ignored.

pub const BUILTIN_VERTEX_SHADER: &str = include_str!("../../shaders/gallery_vertex.wgsl");
pub const BUILTIN_FRAGMENT_SHADER: &str = include_str!("../../shaders/gallery_fragment.wgsl");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderOrigin {
    Builtin,
    Page,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    pub origin: ShaderOrigin,
    pub wgsl: String,
}

impl ShaderSource {
    pub fn builtin() -> Self {
        Self {
            origin: ShaderOrigin::Builtin,
            wgsl: join(BUILTIN_VERTEX_SHADER, BUILTIN_FRAGMENT_SHADER),
        }
    }

    /// Prefer page-supplied blocks; blank or missing blocks fall back to the builtin.
    pub fn compose(vertex: Option<&str>, fragment: Option<&str>) -> Self {
        fn present(block: Option<&str>) -> Option<&str> {
            block.filter(|text| !text.trim().is_empty())
        }
        match (present(vertex), present(fragment)) {
            (Some(vertex), Some(fragment)) => {
                Self { origin: ShaderOrigin::Page, wgsl: join(vertex, fragment) }
            }
            _ => Self::builtin(),
        }
    }
}

/// Whether a `<script type=...>` value marks a WGSL block.
pub fn is_wgsl_type(script_type: Option<&str>) -> bool {
    script_type
        .map(|t| t.trim().to_ascii_lowercase())
        .is_some_and(|t| t == "text/wgsl" || t == "x-shader/wgsl")
}

fn join(vertex: &str, fragment: &str) -> String {
    format!("{}\n{}", vertex.trim_end(), fragment.trim_end())
}
