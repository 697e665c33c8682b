//! Assets and rights parser: section, items, values, summary.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::models::config::ExtractionConfig;
use crate::models::declaration::{DeclarantInfo, DeclarationReport, ExtractedRecord};

use super::aggregate::aggregate;
use super::rules::{
    declarant::DeclarantExtractor, detect_year_headers, extract_values, locate_section,
    patterns::BRL_AMOUNT_PATTERN, split_items, try_parse_brl, validate_cpf,
};
use super::Result;

/// Trait for declaration parsing.
pub trait DeclarationParser {
    /// Parse a declaration from its extracted text.
    fn parse(&self, text: &str) -> Result<DeclarationReport>;
}

/// Parser for the "Declaração de Bens e Direitos" section.
pub struct AssetsParser {
    /// Heading that opens the section.
    section_start: String,
    /// Headings that may close the section.
    stop_markers: Vec<String>,
    /// Declarant block extractor.
    declarant: DeclarantExtractor,
    /// Whether to check CPF digits.
    validate_cpf: bool,
}

impl AssetsParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            section_start: config.section_start.clone(),
            stop_markers: config.stop_markers.clone(),
            declarant: DeclarantExtractor::with_labels(&config.name_labels),
            validate_cpf: config.validate_cpf,
        }
    }

    /// Set the section heading.
    pub fn with_section_start(mut self, marker: impl Into<String>) -> Self {
        self.section_start = marker.into();
        self
    }

    /// Set the headings that close the section.
    pub fn with_stop_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set CPF validation.
    pub fn with_cpf_validation(mut self, validate: bool) -> Self {
        self.validate_cpf = validate;
        self
    }

    /// Extract only the declarant block. Never fails.
    pub fn extract_declarant(&self, text: &str) -> DeclarantInfo {
        self.declarant.extract(text)
    }

    /// Extract one record per item occurrence in the section, in order.
    fn extract_records(&self, section: &str, warnings: &mut Vec<String>) -> Vec<ExtractedRecord> {
        split_items(section)
            .iter()
            .map(|item| {
                for amount in BRL_AMOUNT_PATTERN.find_iter(item.text) {
                    if try_parse_brl(amount.as_str()).is_none() {
                        warn!(
                            "Unreadable amount '{}' in {}/{}",
                            amount.as_str(),
                            item.group,
                            item.code
                        );
                        warnings.push(format!(
                            "Item {}/{} has out-of-range amount {}; counted as zero",
                            item.group,
                            item.code,
                            amount.as_str()
                        ));
                    }
                }

                let (prior, current) = extract_values(item).unwrap_or_else(|| {
                    warn!(
                        "Item {}/{} has fewer than two amounts, using zero",
                        item.group, item.code
                    );
                    warnings.push(format!(
                        "Item {}/{} has no recoverable values; counted as zero",
                        item.group, item.code
                    ));
                    (Decimal::ZERO, Decimal::ZERO)
                });

                ExtractedRecord::new(item.group, item.code, prior, current)
            })
            .collect()
    }
}

impl Default for AssetsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationParser for AssetsParser {
    fn parse(&self, text: &str) -> Result<DeclarationReport> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing declaration from {} characters of text", text.len());

        let declarant = self.extract_declarant(text);
        if let Some(cpf) = &declarant.cpf {
            if self.validate_cpf && !validate_cpf(cpf) {
                warnings.push(format!("CPF {} has invalid check digits", cpf));
            }
        }

        let section = locate_section(text, &self.section_start, &self.stop_markers)?;
        let years = detect_year_headers(section);

        let records = self.extract_records(section, &mut warnings);
        if records.is_empty() {
            warnings.push(format!("No items found in section '{}'", self.section_start));
        }

        let summary = aggregate(&records);
        if summary.overflowed() {
            warnings.push(
                "Summary sums exceeded the supported range; totals are incomplete".to_string(),
            );
        }

        debug!(
            "Extracted {} items into {} rows (years {} / {})",
            records.len(),
            summary.len(),
            years.prior,
            years.current
        );

        Ok(DeclarationReport {
            declarant,
            years,
            records,
            summary,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
