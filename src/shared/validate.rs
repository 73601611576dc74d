//! Field validation for wire → domain conversions.
//!
//! The exchange is the sole producer of response data, so these checks are pure
//! data hygiene: a quantity, price or balance that parses negative means the
//! payload is not what the endpoint documents, and the conversion fails rather
//! than letting the value flow into caller arithmetic.

use rust_decimal::Decimal;
use thiserror::Error;

/// A wire field failed domain validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("negative value for `{field}`: {value}")]
    Negative { field: &'static str, value: Decimal },
}

/// Accepts zero and positive values; rejects negatives.
pub fn non_negative(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_zero_is_accepted() {
        assert_eq!(non_negative("qty", Decimal::ZERO), Ok(Decimal::ZERO));
        // Decimal can carry a negative zero; it is still zero.
        let neg_zero = Decimal::from_str("-0.0").unwrap();
        assert!(non_negative("qty", neg_zero).is_ok());
    }

    #[test]
    fn test_positive_is_accepted() {
        let v = Decimal::from_str("1.5").unwrap();
        assert_eq!(non_negative("qty", v), Ok(v));
    }

    #[test]
    fn test_negative_is_rejected() {
        let v = Decimal::from_str("-0.00000001").unwrap();
        let err = non_negative("free", v).unwrap_err();
        assert_eq!(err, ValidationError::Negative { field: "free", value: v });
        assert!(err.to_string().contains("free"));
    }
}
