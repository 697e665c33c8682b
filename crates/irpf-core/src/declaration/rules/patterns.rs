//! Common regex patterns for IRPF declaration extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Brazilian money: dot thousands separator, comma decimals (1.234,56).
pub const BRL_AMOUNT: &str = r"-?(?:\d{1,3}(?:\.\d{3})*,\d{2}|0,00)";

lazy_static! {
    pub static ref BRL_AMOUNT_PATTERN: Regex = Regex::new(BRL_AMOUNT).unwrap();

    // Item anchor: "GG CC ..." at the very start of a line
    pub static ref ITEM_ANCHOR: Regex = Regex::new(
        r"(?mR)^[^\S\r\n]*(\d{2})[^\S\r\n]+(\d{2})(?:[^\S\r\n]+(.*))?$"
    ).unwrap();

    // Column headers such as "SITUAÇÃO EM 31/12/2023"
    pub static ref YEAR_END_DATE: Regex = Regex::new(
        r"31/12/(\d{4})"
    ).unwrap();

    // CPF (Brazilian individual taxpayer id)
    pub static ref CPF_PATTERN: Regex = Regex::new(
        r"(?i)CPF[:\s]*((?:\d{3}\.\d{3}\.\d{3}-\d{2})|\d{11})"
    ).unwrap();

    pub static ref BIRTH_DATE: Regex = Regex::new(
        r"(?i)(?:Data de nascimento|Nascimento|Nascido em)[:\s\-]*?(\d{2}/\d{2}/\d{4})"
    ).unwrap();
}

/// Value part of a labeled name field: an upper-case letter, then letters
/// (with diacritics), digits and a little punctuation.
pub const NAME_VALUE: &str = r"([A-ZÀ-Ý][A-Za-zÀ-ÿ0-9.\- \x{00C0}-\x{017F},/]{2,120})";

/// Build the pattern for one name label.
pub fn labeled_name_pattern(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?i){}\s*[:\-]?\s*{}",
        regex::escape(label),
        NAME_VALUE
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_requires_line_start() {
        let text = "01 11 Apartamento\nvalor 02 03 embutido\n  04 02 CDB";
        let found: Vec<(String, String)> = ITEM_ANCHOR
            .captures_iter(text)
            .map(|c| (c[1].to_string(), c[2].to_string()))
            .collect();

        assert_eq!(
            found,
            vec![
                ("01".to_string(), "11".to_string()),
                ("04".to_string(), "02".to_string()),
            ]
        );
    }

    #[test]
    fn test_anchor_rejects_longer_numbers() {
        assert!(!ITEM_ANCHOR.is_match("01 112 Apartamento"));
        assert!(!ITEM_ANCHOR.is_match("011 12 Apartamento"));
        assert!(ITEM_ANCHOR.is_match("01 12"));
        assert!(ITEM_ANCHOR.is_match("01 12 Casa\r\nRua X"));
        assert!(ITEM_ANCHOR.is_match("01\u{a0}12\u{a0}Casa"));
        assert!(ITEM_ANCHOR.is_match("\u{2007}01\u{2009}12 Casa"));
        assert!(!ITEM_ANCHOR.is_match("01\n12 Casa"));
    }

    #[test]
    fn test_amount_pattern() {
        let found: Vec<&str> = BRL_AMOUNT_PATTERN
            .find_iter("01 11 Apto 500.000,00 550.000,00 e 0,00 e -1.234,56")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["500.000,00", "550.000,00", "0,00", "-1.234,56"]);
    }

    #[test]
    fn test_labeled_name_escapes_label() {
        let re = labeled_name_pattern("Nome (titular)").unwrap();
        assert!(re.is_match("Nome (titular): Maria"));
        assert!(!re.is_match("Nome titular: Maria"));
    }
}
