//! Parsing contract for raw, currency-formatted user input
//!
//! Callers collect principal amounts as display strings ("Rp 1.000.000")
//! with an optional separate fractional component. The contract: strip
//! every non-digit character, parse the remainder, and treat empty input
//! as zero. Parsing is infallible; it never reaches the engine, which
//! only sees numeric values.

/// Strip all non-digit characters from a currency-formatted string
/// and parse the remaining digits. Empty input parses to 0.
pub fn parse_amount(raw: &str) -> f64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse().unwrap_or(0.0)
}

/// Compose a whole amount from separate integer and fractional display
/// fields, each parsed under the same strip-non-digits contract.
///
/// The fractional field is joined as literal decimal digits ("1000" and
/// "5" make 1000.5), matching how the original form concatenated its two
/// deposit inputs.
pub fn compose_amount(integer_part: &str, fraction_part: &str) -> f64 {
    let int_digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();
    let frac_digits: String = fraction_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let joined = format!(
        "{}.{}",
        if int_digits.is_empty() { "0" } else { int_digits.as_str() },
        if frac_digits.is_empty() { "0" } else { frac_digits.as_str() },
    );
    joined.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_currency_formatting() {
        assert_eq!(parse_amount("Rp 1.000.000"), 1_000_000.0);
        assert_eq!(parse_amount("1,234,567"), 1_234_567.0);
        assert_eq!(parse_amount("25000"), 25_000.0);
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("Rp "), 0.0);
    }

    #[test]
    fn test_compose_integer_and_fraction() {
        assert_eq!(compose_amount("1.000.000", "5"), 1_000_000.5);
        assert_eq!(compose_amount("1000", "25"), 1000.25);
    }

    #[test]
    fn test_compose_missing_parts() {
        assert_eq!(compose_amount("", ""), 0.0);
        assert_eq!(compose_amount("500", ""), 500.0);
        assert_eq!(compose_amount("", "75"), 0.75);
    }
}
