//! Number Formatting
//!
//! Western-style thousands grouping. Only the integer digit run is grouped;
//! signs, fractional digits and exponents pass through untouched.

use regex::Regex;
use std::sync::OnceLock;

const SEPARATOR: char = ',';

/// Sign, integer digit run, remainder
fn number_parts() -> Option<&'static Regex> {
    static PARTS: OnceLock<Option<Regex>> = OnceLock::new();
    PARTS
        .get_or_init(|| Regex::new(r"(?s)^([+-]?)([0-9]+)(.*)$").ok())
        .as_ref()
}

/// Format a number with a comma between every three integer digits.
///
/// Values render in their shortest round-trip decimal form, so `1000.0`
/// becomes `"1,000"` and `1234.5678` becomes `"1,234.5678"`. Negative zero
/// renders as `"0"`; non-finite values as `NaN`, `Infinity`, `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    group_digits(&value.to_string())
}

/// Format an integer with thousands separators, exact for the whole `i64` range.
pub fn format_integer(value: i64) -> String {
    group_digits(&value.to_string())
}

/// Insert thousands separators into an already rendered decimal string.
///
/// Text that does not begin with an optional sign and at least one digit is
/// returned unchanged.
pub fn group_digits(text: &str) -> String {
    let Some(caps) = number_parts().and_then(|re| re.captures(text)) else {
        return text.to_string();
    };

    let sign = caps.get(1).map_or("", |m| m.as_str());
    let digits = caps.get(2).map_or("", |m| m.as_str());
    let rest = caps.get(3).map_or("", |m| m.as_str());

    let mut out = String::with_capacity(text.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(SEPARATOR);
        }
        out.push(ch);
    }
    out.push_str(rest);
    out
}
