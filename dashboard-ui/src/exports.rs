//! Helpers exported to the page's other scripts

use assembly_dashboard::format;
use assembly_dashboard::pagination::{self, DEFAULT_MAX_BUTTONS};
use chrono::NaiveDate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `formatDate(value)`: a date string or `Date` as `YYYY-MM-DD`.
///
/// `undefined`, `null`, empty strings and unreadable values give `""`.
/// `Date` objects are read in the browser's local time zone.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: JsValue) -> String {
    if let Some(date) = value.dyn_ref::<js_sys::Date>() {
        return local_date(date)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
    }

    format::format_date(value.as_string().as_deref())
}

/// `formatNumber(number)`: comma-grouped integer digits
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64) -> String {
    format::format_number(value)
}

/// `paginationRange(page, totalPages, maxButtons = 5)`: page numbers to show
#[wasm_bindgen(js_name = paginationRange)]
pub fn pagination_range(page: u32, total_pages: u32, max_buttons: Option<u32>) -> Vec<u32> {
    pagination::page_range(page, total_pages, max_buttons.unwrap_or(DEFAULT_MAX_BUTTONS)).collect()
}

fn local_date(date: &js_sys::Date) -> Option<NaiveDate> {
    if date.get_time().is_nan() {
        return None;
    }
    NaiveDate::from_ymd_opt(
        date.get_full_year() as i32,
        date.get_month() + 1,
        date.get_date(),
    )
}
