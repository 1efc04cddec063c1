//! Functions exported to JavaScript.
//!
//! The gallery starts itself once the DOM is ready, reading an optional JSON
//! config from the container's `data-gallery-config` attribute. Pages that
//! want control set `data-autostart="false"` and call `startGallery` instead.

use gloo::events::EventListener;
use gloo::utils::document;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::gallery_app::GalleryApp;
use crate::application::LaunchSequence;
use crate::domain::config::GalleryConfig;
use crate::domain::errors::ConfigResult;
use crate::domain::logging::{self, LogComponent};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use crate::{log_error, log_info};

pub const CONFIG_ATTRIBUTE: &str = "data-gallery-config";
pub const AUTOSTART_ATTRIBUTE: &str = "data-autostart";

thread_local! {
    static GALLERY: RefCell<Option<GalleryApp>> = const { RefCell::new(None) };
    static LAUNCHES: RefCell<LaunchSequence> = RefCell::new(LaunchSequence::new());
}

#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    logging::init_time_provider(Box::new(BrowserTimeProvider::new()));
    when_dom_ready(|| wasm_bindgen_futures::spawn_local(autostart()));
}

/// Start (or restart) the gallery. `config_json` overrides the defaults.
#[wasm_bindgen(js_name = startGallery)]
pub async fn start_gallery(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => GalleryConfig::from_json(&json)?,
        None => GalleryConfig::default(),
    };
    launch(config).await.map_err(JsValue::from)
}

/// Stop the running gallery and abandon any launch still in flight.
#[wasm_bindgen(js_name = stopGallery)]
pub fn stop_gallery() {
    LAUNCHES.with(|launches| launches.borrow_mut().cancel());
    if let Some(app) = GALLERY.with(|gallery| gallery.borrow_mut().take()) {
        app.stop();
    }
}

#[wasm_bindgen(js_name = isGalleryRunning)]
pub fn is_gallery_running() -> bool {
    GALLERY.with(|gallery| gallery.borrow().as_ref().is_some_and(GalleryApp::is_running))
}

async fn launch(config: GalleryConfig) -> ConfigResult<()> {
    // The first started gallery decides the log level
    logging::init_logger(Box::new(ConsoleLogger::new(config.log_level)));
    stop_gallery();
    let ticket = LAUNCHES.with(|launches| launches.borrow_mut().begin());
    let app = GalleryApp::launch(config).await?;

    if !LAUNCHES.with(|launches| launches.borrow().is_current(ticket)) {
        log_info!(LogComponent::Presentation("WasmApi"), "Launch superseded, discarding it");
        app.stop();
        return Ok(());
    }
    if let Some(previous) = GALLERY.with(|gallery| gallery.borrow_mut().replace(app)) {
        previous.stop();
    }
    Ok(())
}

async fn autostart() {
    let default_container = GalleryConfig::default().container_id;
    let container = document().get_element_by_id(&default_container);
    let opted_out = container
        .as_ref()
        .and_then(|el| el.get_attribute(AUTOSTART_ATTRIBUTE))
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("false"));
    if opted_out {
        return;
    }

    let config = match container.and_then(|el| el.get_attribute(CONFIG_ATTRIBUTE)) {
        Some(json) => GalleryConfig::from_json(&json),
        None => Ok(GalleryConfig::default()),
    };
    let result = match config {
        Ok(config) => launch(config).await,
        Err(e) => {
            logging::init_logger(Box::new(ConsoleLogger::new_production()));
            Err(e)
        }
    };
    match result {
        Ok(()) => {
            log_info!(LogComponent::Presentation("WasmApi"), "🚀 Gallery started");
        }
        Err(e) => {
            log_error!(LogComponent::Presentation("WasmApi"), "❌ Gallery failed to start: {}", e);
        }
    }
}

fn when_dom_ready(start: impl FnOnce() + 'static) {
    let document = document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| start()).forget();
    } else {
        start();
    }
}
