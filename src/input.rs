//! Typed boundary for raw user input
//!
//! All localized number parsing happens here, once, so the engine only
//! ever sees validated numeric types.

use crate::error::EngineError;

/// Parse a monetary string in either European or US grouping
/// ("1.234,56" and "1,234.56" both become 1234.56). Currency symbols and
/// whitespace are stripped; anything else is a parse error, never a
/// silent zero.
pub fn parse_money_input(raw: &str) -> Result<f64, EngineError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '€' | '$' | '£'))
        .collect();

    if cleaned.is_empty() {
        return Err(EngineError::ParseMoney(raw.to_string()));
    }

    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');

    let normalized = match (last_dot, last_comma) {
        // Both separators present: the later one is the decimal point
        (Some(d), Some(c)) => {
            let (thousands, decimal) = if d > c { (',', '.') } else { ('.', ',') };
            cleaned
                .replace(thousands, "")
                .replace(decimal, ".")
        }
        // Comma only: decimal when followed by 1-2 digits, grouping otherwise
        (None, Some(c)) => {
            let trailing = cleaned.len() - c - 1;
            if cleaned.matches(',').count() == 1 && (1..=2).contains(&trailing) {
                cleaned.replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        // Dot only: same rule; "1.234" is grouping, "12.34" is decimal
        (Some(d), None) => {
            let trailing = cleaned.len() - d - 1;
            if cleaned.matches('.').count() == 1 && (1..=2).contains(&trailing) {
                cleaned
            } else {
                cleaned.replace('.', "")
            }
        }
        (None, None) => cleaned,
    };

    let value: f64 = normalized
        .parse()
        .map_err(|_| EngineError::ParseMoney(raw.to_string()))?;

    if !value.is_finite() {
        return Err(EngineError::ParseMoney(raw.to_string()));
    }
    Ok(value)
}

/// Parse and enforce a range. Out-of-range input is rejected, not
/// clamped; range clamping for UI purposes belongs to the caller.
pub fn parse_money_in_range(raw: &str, min: f64, max: f64) -> Result<f64, EngineError> {
    let value = parse_money_input(raw)?;
    crate::error::check_range("money_input", value, min, max)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_european_format() {
        assert_relative_eq!(parse_money_input("1.234,56").unwrap(), 1234.56);
        assert_relative_eq!(parse_money_input("1.234.567,89").unwrap(), 1_234_567.89);
        assert_relative_eq!(parse_money_input("1,5").unwrap(), 1.5);
    }

    #[test]
    fn test_us_format() {
        assert_relative_eq!(parse_money_input("1,234.56").unwrap(), 1234.56);
        assert_relative_eq!(parse_money_input("1,234,567.89").unwrap(), 1_234_567.89);
        assert_relative_eq!(parse_money_input("12.34").unwrap(), 12.34);
    }

    #[test]
    fn test_grouping_only() {
        // A lone separator with three trailing digits is grouping
        assert_relative_eq!(parse_money_input("1.234").unwrap(), 1234.0);
        assert_relative_eq!(parse_money_input("1,234").unwrap(), 1234.0);
        assert_relative_eq!(parse_money_input("1234").unwrap(), 1234.0);
    }

    #[test]
    fn test_currency_symbols_and_spaces() {
        assert_relative_eq!(parse_money_input("€ 1.234,56").unwrap(), 1234.56);
        assert_relative_eq!(parse_money_input("$450.00").unwrap(), 450.0);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_money_input("").is_err());
        assert!(parse_money_input("abc").is_err());
        assert!(parse_money_input("12x3").is_err());
        assert!(parse_money_input("€").is_err());
    }

    #[test]
    fn test_range_enforced_not_clamped() {
        assert!(parse_money_in_range("150", 0.0, 100.0).is_err());
        assert_relative_eq!(parse_money_in_range("99,5", 0.0, 100.0).unwrap(), 99.5);
    }
}
