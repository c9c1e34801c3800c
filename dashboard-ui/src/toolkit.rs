//! Bootstrap Tooltip Capability
//!
//! Bootstrap is loaded by a plain `<script>` tag, so it is looked up on the
//! window at run time rather than linked.

use assembly_dashboard::page::{PageError, PageResult, TooltipToolkit};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::dom::{js_error_message, WebElement};

/// `window.bootstrap.Tooltip`
#[derive(Clone, Debug)]
pub struct BootstrapTooltips {
    constructor: js_sys::Function,
}

impl BootstrapTooltips {
    /// The tooltip constructor, if Bootstrap's JS bundle is on the page
    pub fn detect(window: &Window) -> Option<Self> {
        let bootstrap = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("bootstrap")).ok()?;
        if bootstrap.is_undefined() || bootstrap.is_null() {
            return None;
        }

        js_sys::Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
            .map(|constructor| Self { constructor })
    }
}

impl TooltipToolkit<WebElement> for BootstrapTooltips {
    fn activate(&self, element: &WebElement) -> PageResult<()> {
        let args = js_sys::Array::of1(element.0.as_ref());
        js_sys::Reflect::construct(&self.constructor, &args)
            .map(|_| ())
            .map_err(|e| PageError::Tooltip(js_error_message(&e)))
    }
}
