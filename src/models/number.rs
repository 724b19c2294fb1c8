//! Lenient numeric coercion for upstream JSON payloads

use serde_json::Value;

/// Coerce a JSON value to a finite number.
///
/// Numbers and numeric strings yield `Some`; `null`, booleans, containers,
/// blank or non-numeric strings and non-finite values yield `None`.
/// An absent reading is never read as `0`: `null`, `""` and `false` stay `None`.
#[must_use]
pub fn finite(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                text.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// First element of a JSON array, coerced with [`finite`]
#[must_use]
pub fn first_finite(series: &Value) -> Option<f64> {
    series.as_array().and_then(|items| items.first()).and_then(finite)
}
