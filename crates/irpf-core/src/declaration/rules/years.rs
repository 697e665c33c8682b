//! Year labels for the two value columns.

use std::collections::BTreeSet;

use super::patterns::YEAR_END_DATE;
use crate::models::declaration::YearHeaders;

/// Detect the prior and current years from `31/12/YYYY` headings.
///
/// The two most recent distinct years win. With fewer than two the
/// placeholder labels are used.
pub fn detect_year_headers(text: &str) -> YearHeaders {
    let years: BTreeSet<&str> = YEAR_END_DATE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    let mut latest = years.iter().rev();
    match (latest.next(), latest.next()) {
        (Some(current), Some(prior)) => YearHeaders {
            prior: (*prior).to_string(),
            current: (*current).to_string(),
        },
        _ => YearHeaders::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_year_headers() {
        let text = "SITUAÇÃO EM 31/12/2023 SITUAÇÃO EM 31/12/2024\n\
                    01 11 Apto 1,00 2,00\n\
                    adquirido em 31/12/2010";
        let years = detect_year_headers(text);
        assert_eq!(years.prior, "2023");
        assert_eq!(years.current, "2024");
    }

    #[test]
    fn test_single_year_uses_placeholders() {
        let years = detect_year_headers("SITUAÇÃO EM 31/12/2024 31/12/2024");
        assert_eq!(years, YearHeaders::default());
    }
}
