use wasm_bindgen::JsValue;

/// Gallery errors. Only startup and rendering can fail; the motion core cannot.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryError {
    ConfigError(String),
    DomError(String),
    RenderingError(String),
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            GalleryError::DomError(msg) => write!(f, "DOM Error: {}", msg),
            GalleryError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::ConfigError(format!("invalid gallery config JSON: {}", err))
    }
}

impl From<GalleryError> for JsValue {
    fn from(err: GalleryError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, GalleryError>;
pub type RenderingResult<T> = Result<T, GalleryError>;
