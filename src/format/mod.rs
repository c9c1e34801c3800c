//! Formatting Helpers
//!
//! Pure display helpers shared by the page scripts:
//!
//! - [`format_date`]: renders date strings as `YYYY-MM-DD`
//! - [`format_number`]: comma-groups the integer digits of a number

mod date;
mod error;
mod number;

pub use date::{format_date, parse_date};
pub use error::{FormatError, FormatResult};
pub use number::{format_integer, format_number, group_digits};
