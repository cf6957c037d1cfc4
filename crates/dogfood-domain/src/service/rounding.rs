//! Rounding of order quantities

/// Round to the nearest tenth, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    if !scaled.is_finite() {
        // magnitudes this large carry no fractional part
        return value;
    }
    scaled.round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_down() {
        assert_eq!(round_to_tenth(363.5999999), 363.6);
        assert_eq!(round_to_tenth(12.34), 12.3);
    }

    #[test]
    fn test_half_away_from_zero() {
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(-0.25), -0.3);
    }

    #[test]
    fn test_whole_number_unchanged() {
        assert_eq!(round_to_tenth(444.0), 444.0);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn test_near_max_unchanged() {
        assert_eq!(round_to_tenth(f64::MAX), f64::MAX);
        assert_eq!(round_to_tenth(f64::MAX / 2.0), f64::MAX / 2.0);
    }
}
