//! Brazilian money parsing and formatting.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::BRL_AMOUNT_PATTERN;
use super::{ExtractionMatch, FieldExtractor};

/// Default currency symbol for formatted amounts.
pub const CURRENCY_PREFIX: &str = "R$";

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        BRL_AMOUNT_PATTERN
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(parse_brl(m.as_str()), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Parse a Brazilian-formatted amount ("1.234,56", "0,00", "R$ 10,00").
///
/// Anything that does not parse becomes zero, so one unreadable value shows
/// up in the report instead of aborting it.
pub fn parse_brl(s: &str) -> Decimal {
    try_parse_brl(s).unwrap_or(Decimal::ZERO)
}

/// Parse a Brazilian-formatted amount, or `None` when it is malformed or
/// does not fit in a `Decimal`.
pub fn try_parse_brl(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix(CURRENCY_PREFIX)
        .map(str::trim_start)
        .unwrap_or(trimmed);

    let normalized = trimmed.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format an amount as `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    format_brl_with_prefix(amount, CURRENCY_PREFIX)
}

/// Format an optional amount; an absent amount renders as an empty string.
pub fn format_optional_brl(amount: Option<Decimal>) -> String {
    amount.map(format_brl).unwrap_or_default()
}

/// Format an amount with a custom currency symbol (empty for none).
pub fn format_brl_with_prefix(amount: Decimal, prefix: &str) -> String {
    let s = format!("{:.2}", amount.round_dp(2));
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };

    let (integer_part, decimal_part) = digits.split_once('.').unwrap_or((digits, "00"));

    // Add thousand separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    if prefix.is_empty() {
        format!("{}{},{}", sign, formatted, decimal_part)
    } else {
        format!("{} {}{},{}", prefix, sign, formatted, decimal_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl("1.234,56"), d("1234.56"));
        assert_eq!(parse_brl("0,00"), Decimal::ZERO);
        assert_eq!(parse_brl("500.000,00"), d("500000.00"));
        assert_eq!(parse_brl(" 12,30 "), d("12.30"));
        assert_eq!(parse_brl("-1.000,01"), d("-1000.01"));
        assert_eq!(parse_brl("R$ 1.234,56"), d("1234.56"));
    }

    #[test]
    fn test_parse_brl_garbage_is_zero() {
        for input in ["", "   ", "abc", "1,2,3", "R$", "12a,00", "--1,00"] {
            assert_eq!(parse_brl(input), Decimal::ZERO, "input {:?}", input);
        }
    }

    #[test]
    fn test_try_parse_brl_out_of_range() {
        assert_eq!(try_parse_brl("1.234,56"), Some(d("1234.56")));
        assert_eq!(try_parse_brl("abc"), None);
        // 31 integer digits, beyond what a Decimal holds
        assert_eq!(try_parse_brl("1.000.000.000.000.000.000.000.000.000.000,00"), None);
        assert_eq!(parse_brl("1.000.000.000.000.000.000.000.000.000.000,00"), Decimal::ZERO);
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(d("1234.56")), "R$ 1.234,56");
        assert_eq!(format_brl(d("500000")), "R$ 500.000,00");
        assert_eq!(format_brl(d("0")), "R$ 0,00");
        assert_eq!(format_brl(d("999.999")), "R$ 1.000,00");
        assert_eq!(format_brl(d("-1234567.8")), "R$ -1.234.567,80");
        assert_eq!(format_brl_with_prefix(d("12.5"), ""), "12,50");
    }

    #[test]
    fn test_format_optional_brl() {
        assert_eq!(format_optional_brl(None), "");
        assert_eq!(format_optional_brl(Some(Decimal::ZERO)), "R$ 0,00");
    }

    #[test]
    fn test_round_trip_is_stable() {
        let tolerance = d("0.005");
        for input in ["0,00", "1,00", "12,34", "999,99", "1.000,00", "12.345.678,90", "-7.654,32"] {
            let parsed = parse_brl(input);
            let again = parse_brl(&format_brl(parsed));
            assert!((again - parsed).abs() <= tolerance, "input {:?}", input);
        }
    }

    #[test]
    fn test_extract_all_amounts() {
        let extractor = AmountExtractor::new();
        let results = extractor.extract_all("Saldo 1.000,00 e 2.500,50");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].value, d("1000.00"));
        assert_eq!(results[1].source, "2.500,50");
        assert_eq!(results[1].position, Some((17, 25)));
    }
}
