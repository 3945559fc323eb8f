//! Display formatting for durations, statuses and sensor readings.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lowest temperature (°C) considered safe during transit.
pub const TEMPERATURE_MIN: f64 = 18.0;
/// Highest temperature (°C) considered safe during transit.
pub const TEMPERATURE_MAX: f64 = 22.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86400.0;

/// Formats the gap between two timeline events.
///
/// Seconds are shown whole, larger units with one decimal:
/// `59.0 -> "59s"`, `60.0 -> "1.0m"`, `3600.0 -> "1.0h"`.
pub fn format_duration(seconds: f64) -> String {
    if seconds < MINUTE {
        format!("{}s", to_fixed(seconds, 0))
    } else {
        format_above_minute(seconds)
    }
}

/// Formats a total transit time. Same bands as [`format_duration`] but the
/// seconds band keeps one decimal (`"59.0s"`).
pub fn format_transit_time(seconds: f64) -> String {
    if seconds < MINUTE {
        format!("{}s", to_fixed(seconds, 1))
    } else {
        format_above_minute(seconds)
    }
}

fn format_above_minute(seconds: f64) -> String {
    if seconds < HOUR {
        format!("{}m", to_fixed(seconds / MINUTE, 1))
    } else if seconds < DAY {
        format!("{}h", to_fixed(seconds / HOUR, 1))
    } else {
        format!("{}d", to_fixed(seconds / DAY, 1))
    }
}

/// Fixed-point rendering of the exact binary value, like JS `toFixed`.
///
/// Only exact decimal ties round away from zero, so `1.45` (stored as
/// `1.4499…`) gives `"1.4"` while `12.5` gives `"13"`.
pub(crate) fn to_fixed(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let decimals = decimals as usize;
    let mut magnitude = value.abs();
    if is_decimal_tie(magnitude, decimals) {
        // the next double up sits strictly above the tie
        magnitude = f64::from_bits(magnitude.to_bits() + 1);
    }
    let digits = format!("{:.*}", decimals, magnitude);
    // avoid "-0"
    if value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// True when the exact expansion of `magnitude` ends in a `5` right after
/// the last kept digit.
fn is_decimal_tie(magnitude: f64, decimals: usize) -> bool {
    // 1074 fractional digits hold any f64 exactly
    let exact = format!("{:.1074}", magnitude);
    let fraction = exact
        .split_once('.')
        .map(|(_, fraction)| fraction.trim_end_matches('0'))
        .unwrap_or("");
    fraction.len() == decimals + 1 && fraction.ends_with('5')
}

/// A card value split into its number and a spelled-out unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayValue {
    pub value: String,
    pub unit: Option<&'static str>,
}

/// Splits `"4.5h"` into `("4.5", "hours")` and `"12.0m"` into
/// `("12.0", "mins")`. Anything else is returned unchanged without a unit.
pub fn split_unit(display: &str) -> DisplayValue {
    if let Some(value) = display.strip_suffix('h') {
        DisplayValue { value: value.to_string(), unit: Some("hours") }
    } else if let Some(value) = display.strip_suffix('m') {
        DisplayValue { value: value.to_string(), unit: Some("mins") }
    } else {
        DisplayValue { value: display.to_string(), unit: None }
    }
}

/// `"arrived_at_retail"` -> `"ARRIVED AT RETAIL"`.
pub fn humanize_status(status: &str) -> String {
    status.replace('_', " ").to_uppercase()
}

pub fn is_temperature_violation(temperature: f64) -> bool {
    temperature < TEMPERATURE_MIN || temperature > TEMPERATURE_MAX
}

/// Converts unix seconds (fractional allowed) to a UTC date-time.
pub fn event_datetime(timestamp: f64) -> Option<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    let millis = (timestamp * 1000.0).round() as i64;
    DateTime::from_timestamp_millis(millis)
}
