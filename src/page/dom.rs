//! DOM Abstraction
//!
//! The handful of document operations the page behaviors need. The browser
//! crate implements these over `web-sys`; tests use an in-memory page.

use std::time::Duration;

use super::error::PageResult;

/// Handle to an element of the page
pub trait DomElement: Clone + 'static {
    /// First descendant matching `selectors`
    fn query_selector(&self, selectors: &str) -> PageResult<Option<Self>>;

    /// All descendants matching `selectors`, in document order
    fn query_selector_all(&self, selectors: &str) -> PageResult<Vec<Self>>;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_style(&self, property: &str, value: &str) -> PageResult<()>;

    /// Dispatch a click, exactly as if the user clicked the element
    fn click(&self);

    /// Attach a listener run on every click of the element
    fn on_click(&self, handler: Box<dyn FnMut()>) -> PageResult<()>;
}

/// The page the behaviors run against.
///
/// Everything happens on the page's single UI execution context, so no
/// method needs to be thread-safe.
pub trait PageHost: Clone + 'static {
    type Element: DomElement;

    /// All elements of the document matching `selectors`
    fn query_selector_all(&self, selectors: &str) -> PageResult<Vec<Self::Element>>;

    /// Run `callback` once after `delay`. Timers cannot be cancelled.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);

    /// Start a full-page navigation to `url`
    fn navigate(&self, url: &str) -> PageResult<()>;

    /// The tooltip capability of the UI toolkit, when the toolkit is loaded
    fn tooltip_toolkit(&self) -> Option<Box<dyn TooltipToolkit<Self::Element>>>;
}

/// Tooltip widget constructor provided by the UI toolkit
pub trait TooltipToolkit<E> {
    fn activate(&self, element: &E) -> PageResult<()>;
}
