//! A running gallery: controller, renderer, input listeners and frame loop.

use gloo::events::EventListener;
use gloo::utils::{document, window};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use super::canvas::{CanvasGuard, mount_canvas};
use super::frame_loop::FrameLoop;
use crate::application::GalleryController;
use crate::domain::config::GalleryConfig;
use crate::domain::errors::{GalleryError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::event_utils::on_window;
use crate::infrastructure::rendering::renderer::RendererSetup;
use crate::infrastructure::rendering::renderer::load_images;
use crate::infrastructure::rendering::shader_source::{ShaderSource, is_wgsl_type};
use crate::infrastructure::rendering::WebGpuRenderer;
use crate::{log_error, log_info, log_warn};

pub struct GalleryApp {
    controller: Rc<RefCell<GalleryController>>,
    renderer: Rc<RefCell<WebGpuRenderer>>,
    // Detach when dropped
    listeners: Vec<EventListener>,
    frame_loop: FrameLoop,
}

impl GalleryApp {
    /// Mount the canvas, bring up the GPU and start animating.
    pub async fn launch(config: GalleryConfig) -> RenderingResult<Self> {
        config.validate()?;
        let (width, height) = window_size();

        let container = find_container(&config.container_id)?;
        let canvas = mount_canvas(container, config.canvas_id.clone(), width, height)?;
        // Until the renderer and controller exist the canvas is ours to remove
        let guard = CanvasGuard::new(canvas.clone());

        let shader = page_shader(&config);
        let renderer = WebGpuRenderer::new(RendererSetup {
            canvas,
            width,
            height,
            shader: &shader,
            surface_count: config.surface_count,
            plane_width: config.plane.width,
            plane_height: config.plane.height,
            clear_rgb: config.clear_rgb(),
        })
        .await?;

        let controller = GalleryController::new(config, width, height)?;
        guard.disarm();

        let controller = Rc::new(RefCell::new(controller));
        let renderer = Rc::new(RefCell::new(renderer));

        wasm_bindgen_futures::spawn_local(load_textures(controller.clone(), renderer.clone()));

        let listeners = vec![
            wheel_listener(controller.clone()),
            resize_listener(controller.clone(), renderer.clone()),
        ];
        let frame_loop = start_frame_loop(controller.clone(), renderer.clone());

        log_info!(
            LogComponent::Presentation("GalleryApp"),
            "🎠 Gallery running ({}x{}, {:?} shader)",
            width,
            height,
            shader.origin
        );

        Ok(Self { controller, renderer, listeners, frame_loop })
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running() && !self.controller.borrow().is_stopped()
    }

    /// Halt animation, detach listeners and remove the canvas.
    pub fn stop(self) {
        drop(self);
    }

    fn shutdown(&mut self) {
        if self.controller.borrow().is_stopped() && self.listeners.is_empty() {
            return;
        }
        self.controller.borrow_mut().stop();
        self.frame_loop.stop();
        self.listeners.clear();
        self.renderer.borrow().detach_canvas();
        log_info!(LogComponent::Presentation("GalleryApp"), "⏹️ Gallery stopped");
    }
}

impl Drop for GalleryApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn find_container(container_id: &str) -> RenderingResult<HtmlElement> {
    document()
        .get_element_by_id(container_id)
        .ok_or_else(|| GalleryError::DomError(format!("Container '{}' not found", container_id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GalleryError::DomError(format!("'{}' is not an HTML element", container_id)))
}

fn window_size() -> (u32, u32) {
    let window = window();
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

/// Page-supplied WGSL when both blocks are present and tagged as WGSL.
fn page_shader(config: &GalleryConfig) -> ShaderSource {
    let document = document();
    let block = |id: &str| {
        let element = document.get_element_by_id(id)?;
        if !is_wgsl_type(element.get_attribute("type").as_deref()) {
            log_info!(
                LogComponent::Presentation("GalleryApp"),
                "Shader block '{}' is not WGSL, using the built-in program",
                id
            );
            return None;
        }
        element.text_content()
    };
    let vertex = block(&config.vertex_shader_id);
    let fragment = block(&config.fragment_shader_id);
    ShaderSource::compose(vertex.as_deref(), fragment.as_deref())
}

/// Surfaces keep the placeholder texture when their image fails to load.
async fn load_textures(
    controller: Rc<RefCell<GalleryController>>,
    renderer: Rc<RefCell<WebGpuRenderer>>,
) {
    let paths = controller.borrow().texture_sources();
    let images = load_images(&paths).await;
    if controller.borrow().is_stopped() {
        return;
    }
    for (index, (path, image)) in paths.iter().zip(images).enumerate() {
        let applied =
            image.and_then(|image| renderer.borrow_mut().set_surface_image(index, &image));
        match applied {
            Ok(aspect) => controller.borrow_mut().set_image_aspect(index, aspect),
            Err(e) => {
                log_warn!(
                    LogComponent::Presentation("GalleryApp"),
                    "Surface {} ({}) stays blank: {}",
                    index,
                    path,
                    e
                );
            }
        }
    }
}

fn wheel_listener(controller: Rc<RefCell<GalleryController>>) -> EventListener {
    on_window(leptos::ev::wheel, move |event: web_sys::WheelEvent| {
        controller.borrow_mut().on_wheel(event.delta_y());
    })
}

fn resize_listener(
    controller: Rc<RefCell<GalleryController>>,
    renderer: Rc<RefCell<WebGpuRenderer>>,
) -> EventListener {
    on_window(leptos::ev::resize, move |_: web_sys::UiEvent| {
        let (width, height) = window_size();
        if width == 0 || height == 0 {
            return;
        }
        controller.borrow_mut().on_resize(width, height);
        renderer.borrow_mut().resize(width, height);
    })
}

fn start_frame_loop(
    controller: Rc<RefCell<GalleryController>>,
    renderer: Rc<RefCell<WebGpuRenderer>>,
) -> FrameLoop {
    FrameLoop::start(move |_timestamp| {
        let (frame, frame_number) = {
            let mut controller = controller.borrow_mut();
            if controller.is_stopped() {
                return false;
            }
            controller.step();
            (controller.frame(), controller.frame_count())
        };
        if let Err(e) = renderer.borrow_mut().render(&frame, frame_number) {
            log_error!(
                LogComponent::Presentation("GalleryApp"),
                "❌ Frame {} failed: {}",
                frame_number,
                e
            );
        }
        true
    })
}
