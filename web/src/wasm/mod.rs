//! Page-ready wiring for the browser.

mod delete;
mod dom;
mod flash;
mod tabs;

use log::{Level, error};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Redirect `log` message to `console.log` and friends:
    console_log::init_with_level(Level::Debug).ok();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = on_page_ready(&window, &ready_document) {
                error!("Failed to set up page: {err:?}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        on_page_ready(&window, &document)
    }
}

fn on_page_ready(window: &Window, document: &Document) -> Result<(), JsValue> {
    flash::schedule_fade(window, document)?;
    tabs::bind(document)?;
    delete::bind(window, document)
}
