#![cfg(target_arch = "wasm32")]

use image_carousel_wasm::application::GalleryController;
use image_carousel_wasm::domain::config::GalleryConfig;
use image_carousel_wasm::domain::errors::GalleryError;
use image_carousel_wasm::infrastructure::rendering::renderer::{
    RendererSetup, WebGpuRenderer, find_canvas,
};
use image_carousel_wasm::infrastructure::rendering::shader_source::ShaderSource;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn setup_canvas(id: &str) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(10);
    canvas.set_height(10);
    document.body().unwrap().append_child(&canvas).unwrap();
}

async fn renderer(canvas_id: &str, config: &GalleryConfig) -> WebGpuRenderer {
    setup_canvas(canvas_id);
    let shader = ShaderSource::builtin();
    WebGpuRenderer::new(RendererSetup {
        canvas: find_canvas(canvas_id).unwrap(),
        width: 64,
        height: 48,
        shader: &shader,
        surface_count: config.surface_count,
        plane_width: config.plane.width,
        plane_height: config.plane.height,
        clear_rgb: config.clear_rgb(),
    })
    .await
    .unwrap()
}

#[wasm_bindgen_test(async)]
async fn renderer_draws_gallery_frames() {
    if !WebGpuRenderer::is_webgpu_supported().await {
        web_sys::console::log_1(&"Skipping test: WebGPU not supported".into());
        return;
    }
    let config = GalleryConfig::default();
    let mut renderer = renderer("draw-canvas", &config).await;
    assert_eq!(renderer.surface_count(), 6);
    assert_eq!(renderer.size(), (64, 48));

    let mut controller = GalleryController::new(config, 64, 48).unwrap();
    controller.on_wheel(100.0);
    for _ in 0..3 {
        controller.step();
        renderer.render(&controller.frame(), controller.frame_count()).unwrap();
    }
}

#[wasm_bindgen_test(async)]
async fn resize_updates_canvas_size() {
    if !WebGpuRenderer::is_webgpu_supported().await {
        web_sys::console::log_1(&"Skipping test: WebGPU not supported".into());
        return;
    }
    let mut renderer = renderer("resize-canvas", &GalleryConfig::default()).await;
    renderer.resize(120, 80);
    assert_eq!(renderer.size(), (120, 80));
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_dom_error() {
    assert!(matches!(find_canvas("no-such-canvas"), Err(GalleryError::DomError(_))));
}
