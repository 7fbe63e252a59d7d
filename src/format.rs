//! Number formatting that matches a default C++ output stream (`%g`).
//!
//! `println!("{}", 78.53981633974483)` prints every digit; the demos want the
//! stream look instead: six significant digits, no trailing zeros.

/// Significant digits used by a default output stream.
pub const DEFAULT_PRECISION: usize = 6;

/// An f64 never carries more than 17 significant decimal digits.
pub const MAX_PRECISION: usize = 17;

/// Formats `value` with `precision` significant digits using `%g` rules.
///
/// Fixed notation is used while the decimal exponent `X` of the rounded value
/// satisfies `-4 <= X < precision`, scientific notation otherwise. Trailing
/// zeros are removed in both cases. `precision` is clamped to
/// `1..=MAX_PRECISION`.
///
/// ```
/// use oop_basics::format_significant;
///
/// assert_eq!(format_significant(std::f64::consts::PI * 25.0, 6), "78.5398");
/// assert_eq!(format_significant(20.0, 6), "20");
/// assert_eq!(format_significant(1234567.0, 6), "1.23457e+06");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    let precision = precision.clamp(1, MAX_PRECISION);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round first; the exponent after rounding picks the notation.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_significant(78.53981633974483, 6), "78.5398");
        assert_eq!(format_significant(20.0, 6), "20");
        assert_eq!(format_significant(0.5, 6), "0.5");
        assert_eq!(format_significant(-3.25, 6), "-3.25");
        assert_eq!(format_significant(0.0001234, 6), "0.0001234");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_significant(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_significant(0.00001234, 6), "1.234e-05");
        assert_eq!(format_significant(1e100, 6), "1e+100");
    }

    #[test]
    fn test_rounding_bumps_exponent() {
        // 999999.5 rounds to 1.00000e6, which no longer fits fixed notation.
        assert_eq!(format_significant(999_999.5, 6), "1e+06");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_significant(0.0, 6), "0");
        assert_eq!(format_significant(-0.0, 6), "-0");
        assert_eq!(format_significant(f64::INFINITY, 6), "inf");
        assert_eq!(format_significant(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(format_significant(f64::NAN, 6), "nan");
    }

    #[test]
    fn test_zero_precision_acts_as_one() {
        assert_eq!(format_significant(78.5, 0), "8e+01");
        assert_eq!(format_significant(78.5, 1), "8e+01");
        assert_eq!(format_significant(7.85, 1), "8");
    }

    #[test]
    fn test_huge_precision_is_clamped() {
        let third = 1.0 / 3.0;
        assert_eq!(
            format_significant(third, usize::MAX),
            format_significant(third, MAX_PRECISION)
        );
        assert_eq!(format_significant(third, usize::MAX), "0.33333333333333331");
        assert_eq!(format_significant(20.0, usize::MAX), "20");
    }

    proptest! {
        #[test]
        fn test_output_parses_back_close(value in 1e-3f64..1e5) {
            let text = format_significant(value, DEFAULT_PRECISION);
            let parsed: f64 = text.parse().unwrap();
            prop_assert!(((parsed - value) / value).abs() < 1e-5);
        }

        #[test]
        fn test_no_trailing_zeros_after_point(value in -1e5f64..1e5) {
            let text = format_significant(value, DEFAULT_PRECISION);
            if text.contains('.') && !text.contains('e') {
                prop_assert!(!text.ends_with('0'));
                prop_assert!(!text.ends_with('.'));
            }
        }
    }
}
