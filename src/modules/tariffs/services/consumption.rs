use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::core::{AppError, Result};

/// Largest consumption, in cubic meters, accepted for a single bill
pub const MAX_CONSUMPTION: i64 = 1_000_000_000;

/// Coerce a loosely-typed consumption value to cubic meters
///
/// JSON numbers and numeric strings are taken as-is; anything else
/// (null, booleans, blank or non-numeric text, arrays, objects) counts as no
/// usage. Negative values pass through unchanged. Numbers whose magnitude
/// exceeds [`MAX_CONSUMPTION`] are rejected rather than coerced.
pub fn coerce_consumption(value: &Value) -> Result<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => Ok(Decimal::ZERO),
    }
}

/// Rejects consumption whose magnitude exceeds [`MAX_CONSUMPTION`]
pub fn ensure_consumption_in_range(consumption: Decimal) -> Result<Decimal> {
    if consumption.abs() > Decimal::from(MAX_CONSUMPTION) {
        return Err(AppError::validation(format!(
            "consumption cannot exceed {} m3, got: {}",
            MAX_CONSUMPTION, consumption
        )));
    }

    Ok(consumption)
}

fn parse_decimal(text: &str) -> Result<Decimal> {
    if let Ok(value) = Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        return ensure_consumption_in_range(value);
    }

    // Not representable as a Decimal: either not a number at all, a fraction
    // finer than Decimal's scale, or a magnitude beyond its range.
    match f64::from_str(text) {
        Ok(number) if number.is_nan() => Ok(Decimal::ZERO),
        Ok(number) if number.abs() < 1.0 => Ok(Decimal::ZERO),
        Ok(_) => Err(AppError::validation(format!(
            "consumption is out of range: {}",
            text
        ))),
        Err(_) => Ok(Decimal::ZERO),
    }
}
