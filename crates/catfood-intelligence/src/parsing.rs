// ABOUTME: Lenient numeric parsing of calculator form text
// ABOUTME: Reads the leading number of a field and ignores trailing text such as units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form fields are free text. A field is read by taking its longest numeric
//! prefix after leading whitespace, so `"4 kg"` reads as 4 and `"10 months"`
//! as 10. Text without a leading number reads as `None`.

/// Parse the leading decimal number of `text`
///
/// Accepts an optional sign, digits with an optional fraction (`"5."` and
/// `".5"` are both valid) and an optional exponent.
#[must_use]
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = sign_len(bytes);

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = digit_run(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    trimmed[..end].parse().ok()
}

/// Parse the leading base-10 integer of `text`
///
/// Stops at the first non-digit, so `"7.9"` reads as 7. Values beyond the
/// `i64` range saturate.
#[must_use]
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let sign = sign_len(bytes);
    let digits = digit_run(&bytes[sign..]);
    if digits == 0 {
        return None;
    }

    let negative = bytes.first() == Some(&b'-');
    let magnitude = bytes[sign..sign + digits].iter().fold(0_i64, |acc, &b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a wet/dry ratio, clamped to 0..=100
#[must_use]
pub fn parse_ratio_percent(text: &str) -> Option<u8> {
    parse_leading_integer(text).map(|value| value.clamp(0, 100) as u8)
}

/// Whether the field is blank (the form treats an empty field as "not entered")
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(value: Option<f64>, expected: f64) -> bool {
        value.is_some_and(|v| (v - expected).abs() < 1e-12)
    }

    #[test]
    fn test_decimal_prefixes() {
        assert!(approx(parse_leading_decimal("4"), 4.0));
        assert!(approx(parse_leading_decimal("  3.5"), 3.5));
        assert!(approx(parse_leading_decimal("4kg"), 4.0));
        assert!(approx(parse_leading_decimal(".5"), 0.5));
        assert!(approx(parse_leading_decimal("5."), 5.0));
        assert!(approx(parse_leading_decimal("-2.25 kg"), -2.25));
        assert!(approx(parse_leading_decimal("1e2"), 100.0));
        assert!(approx(parse_leading_decimal("3e"), 3.0));
        assert!(approx(parse_leading_decimal("3.7.1"), 3.7));
    }

    #[test]
    fn test_decimal_rejects_non_numbers() {
        assert_eq!(parse_leading_decimal(""), None);
        assert_eq!(parse_leading_decimal("   "), None);
        assert_eq!(parse_leading_decimal("abc"), None);
        assert_eq!(parse_leading_decimal("."), None);
        assert_eq!(parse_leading_decimal("-"), None);
        assert_eq!(parse_leading_decimal("kg4"), None);
    }

    #[test]
    fn test_integer_prefixes() {
        assert_eq!(parse_leading_integer("7"), Some(7));
        assert_eq!(parse_leading_integer("7.9"), Some(7));
        assert_eq!(parse_leading_integer(" 10 months"), Some(10));
        assert_eq!(parse_leading_integer("-3"), Some(-3));
        assert_eq!(parse_leading_integer("0"), Some(0));
        assert_eq!(parse_leading_integer(".5"), None);
        assert_eq!(parse_leading_integer(""), None);
        assert_eq!(
            parse_leading_integer("99999999999999999999999"),
            Some(i64::MAX)
        );
    }

    #[test]
    fn test_ratio_is_clamped() {
        assert_eq!(parse_ratio_percent("33"), Some(33));
        assert_eq!(parse_ratio_percent("150"), Some(100));
        assert_eq!(parse_ratio_percent("-5"), Some(0));
        assert_eq!(parse_ratio_percent("half"), None);
    }
}
