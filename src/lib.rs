//! # Assembly Dashboard
//!
//! Page behaviors and display helpers for the National Assembly information
//! dashboard.
//!
//! ## Modules
//!
//! - [`page`]: alert auto-dismiss, clickable table rows and tooltip
//!   activation over a small DOM abstraction
//! - [`format`]: date and number formatting for page scripts
//! - [`pagination`]: page-button windows for paginated tables
//! - [`config`]: markup contract, timings and logging settings
//!
//! The browser bindings live in the `assembly-dashboard-ui` crate, which
//! implements [`page::PageHost`] over `web-sys`.
//!
//! ## Quick Start
//!
//! ```rust
//! use assembly_dashboard::format::{format_date, format_number};
//!
//! assert_eq!(format_date(Some("2024-03-05T00:00:00")), "2024-03-05");
//! assert_eq!(format_number(1234567.0), "1,234,567");
//! ```

pub mod config;
pub mod format;
pub mod page;
pub mod pagination;

pub use config::{
    BehaviorConfig, Config, ConfigDiscovery, ConfigError, LoggingConfig, MarkupConfig,
};

pub use format::{format_date, format_integer, format_number, group_digits, parse_date, FormatError};

pub use page::{
    DomElement, InitReport, PageError, PageHost, PageInitializer, TooltipOutcome, TooltipToolkit,
};

pub use pagination::{page_range, DEFAULT_MAX_BUTTONS};
