//! Display Formatting
//!
//! Humanized relative timestamps, counter interpolation and number
//! formatting for the dashboard.

use wasm_bindgen::JsValue;

/// Humanize elapsed seconds with integer floor division.
pub fn relative_time(elapsed_secs: i64) -> String {
    if elapsed_secs < 60 {
        "Just now".to_string()
    } else if elapsed_secs < 3600 {
        format!("{} minutes ago", elapsed_secs / 60)
    } else if elapsed_secs < 86400 {
        format!("{} hours ago", elapsed_secs / 3600)
    } else {
        format!("{} days ago", elapsed_secs / 86400)
    }
}

/// Whole seconds elapsed since an ISO timestamp, via the JS `Date` parser.
pub fn elapsed_seconds(timestamp: &str) -> i64 {
    let then = js_sys::Date::new(&JsValue::from_str(timestamp)).get_time();
    let now = js_sys::Date::now();
    ((now - then) / 1000.0).floor() as i64
}

/// Counter value at `progress` (0..=1) of a linear count-up, floored.
pub fn interpolate(start: i64, target: i64, progress: f64) -> i64 {
    (start as f64 + (target - start) as f64 * progress).floor() as i64
}

/// Thousands-separated rendering, the `toLocaleString` of the counters.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Icon for an activity feed entry type.
pub fn activity_icon(kind: &str) -> &'static str {
    match kind {
        "claim" => "\u{1F39F}",
        "create" => "\u{2795}",
        "expire" => "\u{23F0}",
        "delete" => "\u{1F5D1}\u{FE0F}",
        "edit" => "\u{270F}\u{FE0F}",
        _ => "\u{1F4DD}",
    }
}
