//! Price parsing and the wire encoding of non-numeric prices.
//!
//! The form accepts free text. Parsing follows the browser's `parseFloat`:
//! leading whitespace is skipped, the longest numeric prefix is used and
//! anything without one becomes NaN. NaN is kept rather than rejected, so a
//! bad entry shows up as NaN in every total it touches.

use serde::{Deserialize, Deserializer};

/// Parse a price the way `parseFloat` does.
pub fn parse_price(input: &str) -> f64 {
    let text = input.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = leading_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // An exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = leading_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// JSON has no NaN, so serde_json writes it as `null`. Read `null` back as NaN.
pub(crate) fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

pub(crate) fn missing_price() -> f64 {
    f64::NAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_price("100"), 100.0);
        assert_eq!(parse_price("12.5"), 12.5);
        assert_eq!(parse_price("-3"), -3.0);
        assert_eq!(parse_price("+4.25"), 4.25);
        assert_eq!(parse_price(".5"), 0.5);
        assert_eq!(parse_price("7."), 7.0);
    }

    #[test]
    fn test_parse_skips_leading_whitespace() {
        assert_eq!(parse_price("   42"), 42.0);
        assert_eq!(parse_price("\t\n8.75"), 8.75);
    }

    #[test]
    fn test_parse_uses_numeric_prefix() {
        assert_eq!(parse_price("42abc"), 42.0);
        assert_eq!(parse_price("1.5.3"), 1.5);
        assert_eq!(parse_price("20 rupees"), 20.0);
        assert_eq!(parse_price("1e"), 1.0);
        assert_eq!(parse_price("2e+"), 2.0);
    }

    #[test]
    fn test_parse_exponents() {
        assert_eq!(parse_price("-3e2"), -300.0);
        assert_eq!(parse_price("1.5E-1"), 0.15);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_price("Infinity"), f64::INFINITY);
        assert_eq!(parse_price("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_price("+Infinityx"), f64::INFINITY);
    }

    #[test]
    fn test_parse_non_numeric_is_nan() {
        assert!(parse_price("").is_nan());
        assert!(parse_price("abc").is_nan());
        assert!(parse_price(".").is_nan());
        assert!(parse_price("-").is_nan());
        assert!(parse_price("$10").is_nan());
        assert!(parse_price("NaN").is_nan());
        assert!(parse_price("inf").is_nan());
    }
}
