//! Amount Input Module
//! Keeps the order amount field numeric and parses it.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AmountError {
    #[error("No amount entered")]
    Empty,
    #[error("Invalid amount: {0}")]
    Invalid(String),
}

/// Keep ASCII digits and the first decimal point, drop everything else.
pub fn sanitize(input: &str) -> String {
    let mut seen_point = false;
    input
        .chars()
        .filter(|&c| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Parse the amount field into a non-negative quantity.
pub fn parse_amount(input: &str) -> Result<f64, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::Invalid(trimmed.to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(AmountError::Invalid(trimmed.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_numeric_text() {
        assert_eq!(sanitize("0.034"), "0.034");
        assert_eq!(sanitize("1a2b3"), "123");
        assert_eq!(sanitize("1.2.3"), "1.23");
        assert_eq!(sanitize("-5"), "5");
        assert_eq!(sanitize(" 1,000 "), "1000");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn parse_results() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
        assert_eq!(parse_amount("0.5"), Ok(0.5));
        assert_eq!(parse_amount(" 12 "), Ok(12.0));
        assert_eq!(parse_amount("."), Err(AmountError::Invalid(".".to_string())));
        assert_eq!(parse_amount("abc"), Err(AmountError::Invalid("abc".to_string())));
        assert_eq!(parse_amount("-1"), Err(AmountError::Invalid("-1".to_string())));
        assert_eq!(parse_amount("inf"), Err(AmountError::Invalid("inf".to_string())));
    }

    #[test]
    fn sanitized_text_always_parses_or_is_empty() {
        for raw in ["12.5x", "..", "BTC", "7.", ".25"] {
            let clean = sanitize(raw);
            match parse_amount(&clean) {
                Ok(v) => assert!(v >= 0.0),
                Err(AmountError::Empty) => assert!(clean.is_empty()),
                Err(AmountError::Invalid(s)) => assert_eq!(s, "."),
            }
        }
    }
}
