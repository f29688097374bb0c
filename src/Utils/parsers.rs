//! Scalar sanitizers for user-facing numeric input. Constructors of the
//! numerical types funnel every scalar through these before storing it, so a
//! NaN or an infinity is rejected at the boundary of the library instead of
//! propagating through a linear solve.

/// Check that a value is an ordinary real number.
///
/// # Returns
/// The value itself, or an error naming what was given.
pub fn parse_float(value: f64) -> Result<f64, String> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("Expected real number (finite float). Given {}", value))
    }
}

/// Strictly positive integer, returned as usize.
pub fn parse_positive_integer(value: i64) -> Result<usize, String> {
    if value > 0 {
        Ok(value as usize)
    } else {
        Err(format!("Expected positive integer. Given {}", value))
    }
}

/// Non-negative integer, returned as usize.
pub fn parse_non_negative_integer(value: i64) -> Result<usize, String> {
    if value >= 0 {
        Ok(value as usize)
    } else {
        Err(format!("Expected non-negative integer. Given {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float(1.5), Ok(1.5));
        assert_eq!(parse_float(-0.0), Ok(-0.0));
        assert!(parse_float(f64::NAN).is_err());
        assert!(parse_float(f64::INFINITY).is_err());
        assert!(parse_float(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(parse_positive_integer(3), Ok(3));
        assert!(parse_positive_integer(0).is_err());
        assert!(parse_positive_integer(-2).is_err());
    }

    #[test]
    fn test_parse_non_negative_integer() {
        assert_eq!(parse_non_negative_integer(0), Ok(0));
        assert_eq!(parse_non_negative_integer(7), Ok(7));
        let err = parse_non_negative_integer(-1).unwrap_err();
        assert!(err.contains("Given -1"));
    }
}
