//! WebAssembly entry point and browser wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the module is instantiated. Behaviors mount once the
//! document is parsed: immediately when the module loads late, otherwise on
//! `DOMContentLoaded`. Pages with non-default markup describe it in a JSON
//! `<script type="application/json" id="page-behaviors-config">` block.

mod host;

pub use host::WebHost;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{AddEventListenerOptions, Document};

use crate::config::PageConfig;
use crate::controller::Controller;
use crate::host::Host;
use crate::ready;

/// Id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors-config";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }

    let Some(host) = WebHost::new() else {
        log::warn!("no window or document; page behaviors not mounted");
        return;
    };
    let document = host.document().clone();
    when_parsed(&document, move || {
        let config = page_config(&host);
        Controller::mount(host, config);
    });
}

/// Config from the inline JSON block, or the defaults. An invalid block is
/// reported and ignored.
fn page_config(host: &WebHost) -> PageConfig {
    let Some(raw) = host.element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}; using default page config");
            PageConfig::default()
        }
    }
}

/// Run `mount` once the document structure is parsed.
fn when_parsed(document: &Document, mount: impl FnOnce() + 'static) {
    if ready::is_parsed(&document.ready_state()) {
        mount();
        return;
    }
    let callback = Closure::once_into_js(mount);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    ) {
        log::error!("DOMContentLoaded listener not attached: {err:?}");
    }
}
