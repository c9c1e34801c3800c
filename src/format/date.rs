//! Date Formatting
//!
//! Lenient date parsing for values rendered by the dashboard templates and
//! the Assembly Open API, and `YYYY-MM-DD` display formatting.

use chrono::format::ParseErrorKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::error::{FormatError, FormatResult};

/// Naive date-time layouts, tried in order
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Parse a date string into a calendar date.
///
/// Accepted inputs:
///
/// - RFC 3339 timestamps with an offset; the date is taken in that offset
/// - naive ISO date-times (`T` or space separated, seconds optional)
/// - `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD`
/// - compact `YYYYMMDD`
///
/// Surrounding whitespace is ignored. No time-zone conversion happens, so
/// the result never depends on the machine running it.
pub fn parse_date(input: &str) -> FormatResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FormatError::EmptyDate);
    }

    if let Some(date) = parse_compact(input)? {
        return Ok(date);
    }

    let mut out_of_range = false;

    match DateTime::parse_from_rfc3339(input) {
        Ok(dt) => return Ok(dt.date_naive()),
        Err(e) => out_of_range |= is_out_of_range(e.kind()),
    }

    for format in DATETIME_FORMATS {
        match NaiveDateTime::parse_from_str(input, format) {
            Ok(dt) => return Ok(dt.date()),
            Err(e) => out_of_range |= is_out_of_range(e.kind()),
        }
    }

    for format in DATE_FORMATS {
        match NaiveDate::parse_from_str(input, format) {
            Ok(date) => return Ok(date),
            Err(e) => out_of_range |= is_out_of_range(e.kind()),
        }
    }

    if out_of_range {
        Err(FormatError::InvalidDate(input.to_string()))
    } else {
        Err(FormatError::UnrecognizedDate(input.to_string()))
    }
}

/// Format a date string as `YYYY-MM-DD`.
///
/// Absent or empty input yields an empty string, and so does input that
/// [`parse_date`] cannot read.
pub fn format_date(input: Option<&str>) -> String {
    let Some(input) = input.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    match parse_date(input) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(e) => {
            tracing::debug!("Not formatting date {:?}: {}", input, e);
            String::new()
        }
    }
}

/// `YYYYMMDD`, as returned by the Assembly Open API
fn parse_compact(input: &str) -> FormatResult<Option<NaiveDate>> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    let field = |range: std::ops::Range<usize>| input[range].parse::<u32>().unwrap_or(0);
    let year = field(0..4) as i32;

    NaiveDate::from_ymd_opt(year, field(4..6), field(6..8))
        .map(Some)
        .ok_or_else(|| FormatError::InvalidDate(input.to_string()))
}

fn is_out_of_range(kind: ParseErrorKind) -> bool {
    matches!(kind, ParseErrorKind::OutOfRange | ParseErrorKind::Impossible)
}
