//! Locale-fixed display formatting (ru-RU).
//!
//! The application renders amounts in rubles and dates as `dd.mm.yyyy`,
//! matching what the server-side templates produce. These are exported to
//! the templates under their camelCase names.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{NaiveDate, NaiveDateTime};

#[cfg(feature = "web")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Group an amount with no-break spaces and append the ruble sign.
///
/// Whole amounts render without a fraction; anything else keeps two
/// decimal places with a comma separator, the ru-RU convention.
#[cfg_attr(feature = "web", wasm_bindgen(js_name = formatCurrency))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();
    let mut whole = amount.trunc() as u64;
    let mut cents = ((amount - amount.trunc()) * 100.0).round() as u64;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if cents > 0 {
        out.push(',');
        out.push_str(&format!("{cents:02}"));
    }
    out.push('\u{a0}');
    out.push('₽');
    out
}

/// Render a parseable date as `dd.mm.yyyy`.
///
/// Unparseable input is returned unchanged rather than validated away; the
/// server controls what lands in these fields.
#[cfg_attr(feature = "web", wasm_bindgen(js_name = formatDate))]
pub fn format_date(value: &str) -> String {
    match parse_date_time(value) {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => value.to_owned(),
    }
}

/// Render a parseable date-time as `dd.mm.yyyy, hh:mm`.
#[cfg_attr(feature = "web", wasm_bindgen(js_name = formatDateTime))]
pub fn format_date_time(value: &str) -> String {
    match parse_date_time(value) {
        Some(dt) => dt.format("%d.%m.%Y, %H:%M").to_string(),
        None => value.to_owned(),
    }
}

/// Accept the date shapes the backend emits: RFC 3339, SQL-style
/// date-times, and bare dates (which get a midnight time).
fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut groups: Vec<String> = Vec::new();
    while value > 0 {
        groups.push((value % 1000).to_string());
        value /= 1000;
    }
    let mut out = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(group);
        } else {
            out.push('\u{a0}');
            out.push_str(&format!("{:0>3}", group));
        }
    }
    out
}
