//! Page Behaviors
//!
//! One-shot DOM wiring run once per page load:
//!
//! - [`schedule_alert_dismissal`]: closes dismissible alerts after a delay
//! - [`wire_clickable_rows`]: table rows navigate to their target URL
//! - [`activate_tooltips`]: toolkit tooltips, when the toolkit is loaded
//!
//! The behaviors only see the page through [`PageHost`] and [`DomElement`].

mod alerts;
mod dom;
mod error;
mod initializer;
mod rows;
mod tooltips;

#[cfg(test)]
pub(crate) mod testing;

pub use alerts::schedule_alert_dismissal;
pub use dom::{DomElement, PageHost, TooltipToolkit};
pub use error::{PageError, PageResult};
pub use initializer::{InitReport, PageInitializer};
pub use rows::wire_clickable_rows;
pub use tooltips::{activate_tooltips, TooltipOutcome};
