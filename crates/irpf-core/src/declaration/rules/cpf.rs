//! CPF (Brazilian individual taxpayer number) extraction and validation.

use super::patterns::CPF_PATTERN;
use super::{ExtractionMatch, FieldExtractor};

/// CPF field extractor. Returns the number as written in the document.
pub struct CpfExtractor;

impl CpfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CpfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CpfExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        CPF_PATTERN
            .captures_iter(text)
            .filter_map(|caps| {
                let value = caps.get(1)?;
                Some(
                    ExtractionMatch::new(value.as_str().trim().to_string(), value.as_str())
                        .with_position(value.start(), value.end()),
                )
            })
            .collect()
    }
}

/// Validate a CPF using its two mod-11 check digits.
///
/// Punctuation is ignored. Numbers made of one repeated digit are invalid.
pub fn validate_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let check_digit = |len: usize| -> u32 {
        let sum: u32 = digits
            .iter()
            .take(len)
            .zip((2..=len as u32 + 1).rev())
            .map(|(d, w)| d * w)
            .sum();
        let rest = (sum * 10) % 11;
        if rest == 10 { 0 } else { rest }
    };

    check_digit(9) == digits[9] && check_digit(10) == digits[10]
}

/// Format a CPF as XXX.XXX.XXX-XX.
pub fn format_cpf(cpf: &str) -> String {
    let digits: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return cpf.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}
