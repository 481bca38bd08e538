//! Decimal rendering policy for record payloads.

use serde_json::{Number, Value};

/// Rewrite floats with no fractional part as JSON integers, recursively.
///
/// Stored numeric attributes round-trip through an arbitrary-precision
/// decimal representation; on the way out the service renders `5.0` as the
/// integer `5` and keeps `5.5` as a float. Magnitudes outside the `i64`
/// range keep their float form.
#[must_use]
pub fn collapse_integral_floats(value: Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(collapse_number(number)),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(collapse_integral_floats).collect())
        }
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(name, field)| (name, collapse_integral_floats(field)))
                .collect(),
        ),
        other => other,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn collapse_number(number: Number) -> Number {
    if !number.is_f64() {
        return number;
    }
    let Some(float) = number.as_f64() else {
        return number;
    };
    if !float.is_finite() || float.fract() != 0.0 {
        return number;
    }
    if float < i64::MIN as f64 || float > i64::MAX as f64 {
        return number;
    }
    Number::from(float as i64)
}
