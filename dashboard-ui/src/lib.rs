//! Assembly Dashboard UI
//!
//! WebAssembly page behaviors for the server-rendered dashboard pages.
//!
//! # Features
//!
//! - Dismissible alerts close themselves after five seconds
//! - Rows of `.table-clickable` tables navigate to their `data-href`
//! - Bootstrap tooltips are activated when Bootstrap is loaded
//! - `formatDate`, `formatNumber` and `paginationRange` for page scripts
//!
//! # Architecture
//!
//! The behaviors themselves live in the `assembly-dashboard` crate and only
//! see the page through its `PageHost` trait; this crate implements that
//! trait over `web-sys` and runs the initializer once the document
//! structure is ready.

use assembly_dashboard::page::PageInitializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DocumentReadyState;

mod config;
mod dom;
mod exports;
mod toolkit;

pub use config::{page_config, CONFIG_ELEMENT_ID};
pub use dom::{WebElement, WebPage};
pub use exports::{format_date, format_number, pagination_range};
pub use toolkit::BootstrapTooltips;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let page = WebPage::current()?;

    if page.document().ready_state() == DocumentReadyState::Loading {
        let ready_page = page.clone();
        let on_ready = Closure::once_into_js(move || initialize(&ready_page));
        page.document()
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        initialize(&page);
    }

    Ok(())
}

/// Run the page behaviors against `page`
pub fn initialize(page: &WebPage) {
    let config = page_config(page.document());
    web_sys::console::log_1(&config.behavior.startup_message.as_str().into());

    let report = PageInitializer::new(config).run(page);
    for failure in &report.failures {
        web_sys::console::warn_1(&format!("Page behavior skipped: {}", failure).into());
    }
    web_sys::console::debug_1(&format!("Page behaviors ready: {}", report).into());
}
