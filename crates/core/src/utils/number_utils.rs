use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};

/// Rounds `value` half away from zero to `places` decimal places.
///
/// Non-finite values pass through untouched so overflow stays visible to
/// callers instead of being clamped.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Rounds a currency amount for display.
pub fn round_currency(value: f64) -> f64 {
    round_to_places(value, DISPLAY_DECIMAL_PRECISION)
}

/// Rejects NaN and infinities coming from user input.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            expectation: "a finite number",
            value,
        }
        .into())
    }
}

/// Rejects negative (or non-finite) amounts.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            expectation: "zero or greater",
            value,
        }
        .into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(2083.333333), 2083.33);
        assert_eq!(round_currency(10.125), 10.13);
        assert_eq!(round_currency(-10.125), -10.13);
        assert_eq!(round_currency(0.0), 0.0);
    }

    #[test]
    fn test_round_keeps_non_finite() {
        assert!(round_currency(f64::INFINITY).is_infinite());
        assert!(round_currency(f64::NAN).is_nan());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("targetAmount", 0.0).unwrap(), 0.0);
        assert_eq!(ensure_non_negative("targetAmount", 12.5).unwrap(), 12.5);
        assert!(ensure_non_negative("targetAmount", -0.01).is_err());
        assert!(ensure_non_negative("targetAmount", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_finite_accepts_negative() {
        assert_eq!(ensure_finite("timeHorizonYears", -1.0).unwrap(), -1.0);
        assert!(ensure_finite("timeHorizonYears", f64::INFINITY).is_err());
    }
}
