//! Browser DOM Host
//!
//! [`PageHost`] and [`DomElement`] over `web-sys`.

use std::time::Duration;

use assembly_dashboard::page::{DomElement, PageError, PageHost, PageResult, TooltipToolkit};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::toolkit::BootstrapTooltips;

const MAX_TIMER_MS: u128 = assembly_dashboard::config::MAX_ALERT_DISMISS_DELAY_MS as u128;

/// Readable message from a thrown JS value
pub(crate) fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn collect_elements(list: NodeList) -> Vec<WebElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(WebElement)
        .collect()
}

/// A live DOM element
#[derive(Clone, Debug)]
pub struct WebElement(pub Element);

impl WebElement {
    fn html(&self) -> PageResult<&HtmlElement> {
        self.0
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| PageError::Dom(format!("<{}> is not an HTML element", self.0.tag_name())))
    }
}

impl DomElement for WebElement {
    fn query_selector(&self, selectors: &str) -> PageResult<Option<Self>> {
        self.0
            .query_selector(selectors)
            .map(|found| found.map(WebElement))
            .map_err(|e| PageError::selector(selectors, js_error_message(&e)))
    }

    fn query_selector_all(&self, selectors: &str) -> PageResult<Vec<Self>> {
        self.0
            .query_selector_all(selectors)
            .map(collect_elements)
            .map_err(|e| PageError::selector(selectors, js_error_message(&e)))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_style(&self, property: &str, value: &str) -> PageResult<()> {
        self.html()?
            .style()
            .set_property(property, value)
            .map_err(|e| PageError::Dom(js_error_message(&e)))
    }

    fn click(&self) {
        match self.html() {
            Ok(element) => element.click(),
            Err(e) => web_sys::console::warn_1(&e.to_string().into()),
        }
    }

    fn on_click(&self, mut handler: Box<dyn FnMut()>) -> PageResult<()> {
        let listener = Closure::wrap(Box::new(move |_: web_sys::Event| handler())
            as Box<dyn FnMut(web_sys::Event)>);

        self.0
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|e| PageError::Dom(js_error_message(&e)))?;

        // Rows live as long as the page
        listener.forget();
        Ok(())
    }
}

/// The browser page the script runs in
#[derive(Clone, Debug)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// The page of the current global window
    pub fn current() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self::new(window, document))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl PageHost for WebPage {
    type Element = WebElement;

    fn query_selector_all(&self, selectors: &str) -> PageResult<Vec<WebElement>> {
        self.document
            .query_selector_all(selectors)
            .map(collect_elements)
            .map_err(|e| PageError::selector(selectors, js_error_message(&e)))
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        // setTimeout fires at once for anything above i32::MAX
        let millis =
            u32::try_from(delay.as_millis().min(MAX_TIMER_MS)).unwrap_or(i32::MAX as u32);
        gloo_timers::callback::Timeout::new(millis, callback).forget();
    }

    fn navigate(&self, url: &str) -> PageResult<()> {
        self.window
            .location()
            .set_href(url)
            .map_err(|e| PageError::navigation(url, js_error_message(&e)))
    }

    fn tooltip_toolkit(&self) -> Option<Box<dyn TooltipToolkit<WebElement>>> {
        BootstrapTooltips::detect(&self.window)
            .map(|toolkit| Box::new(toolkit) as Box<dyn TooltipToolkit<WebElement>>)
    }
}
