use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::domain::errors::{GalleryError, RenderingResult};

/// Full-window canvas the renderer draws into.
#[component]
pub fn GalleryCanvas(id: String, width: u32, height: u32) -> impl IntoView {
    view! {
        <canvas
            id=id
            width=width.to_string()
            height=height.to_string()
            style="display: block; width: 100%; height: 100%;"
        />
    }
}

/// Append the gallery canvas to `container` and return the new element.
pub fn mount_canvas(
    container: HtmlElement,
    id: String,
    width: u32,
    height: u32,
) -> RenderingResult<HtmlCanvasElement> {
    mount_to(container.clone(), move || {
        view! { <GalleryCanvas id=id width=width height=height /> }
    });
    container
        .last_element_child()
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| GalleryError::DomError("Mounted gallery canvas not found".into()))
}

/// Removes a mounted canvas unless a launch succeeds and takes it over.
pub struct CanvasGuard(Option<HtmlCanvasElement>);

impl CanvasGuard {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self(Some(canvas))
    }

    pub fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for CanvasGuard {
    fn drop(&mut self) {
        if let Some(canvas) = self.0.take() {
            canvas.remove();
        }
    }
}
