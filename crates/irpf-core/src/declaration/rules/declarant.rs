//! Declarant identity fields (name, CPF, birth date).

use regex::Regex;
use tracing::{debug, warn};

use super::cpf::CpfExtractor;
use super::patterns::{labeled_name_pattern, BIRTH_DATE};
use super::FieldExtractor;
use crate::models::config::ExtractionConfig;
use crate::models::declaration::DeclarantInfo;

/// Extracts the declarant block with labeled patterns.
///
/// Name labels are tried in order and the first one producing a plausible
/// value wins; later labels are never consulted.
pub struct DeclarantExtractor {
    name_patterns: Vec<(String, Regex)>,
}

impl DeclarantExtractor {
    /// Create an extractor with the default name labels.
    pub fn new() -> Self {
        Self::with_labels(&ExtractionConfig::default().name_labels)
    }

    /// Create an extractor trying `labels` in order for the name.
    pub fn with_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let name_patterns = labels
            .iter()
            .map(AsRef::as_ref)
            .filter_map(|label| match labeled_name_pattern(label) {
                Ok(re) => Some((label.to_string(), re)),
                Err(e) => {
                    warn!("Skipping name label '{}': {}", label, e);
                    None
                }
            })
            .collect();

        Self { name_patterns }
    }

    /// Extract all declarant fields; each missing field is `None`.
    pub fn extract(&self, text: &str) -> DeclarantInfo {
        DeclarantInfo {
            name: self.extract_name(text),
            cpf: CpfExtractor::new().extract(text).map(|m| m.value),
            birth_date: BIRTH_DATE
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string()),
        }
    }

    fn extract_name(&self, text: &str) -> Option<String> {
        self.name_patterns.iter().find_map(|(label, re)| {
            let caps = re.captures(text)?;
            let candidate = caps.get(1)?.as_str().trim().trim_matches(':').to_string();
            let len = candidate.chars().count();

            if len > 2 && len < 160 {
                debug!("Declarant name found with label '{}'", label);
                Some(candidate)
            } else {
                None
            }
        })
    }
}

impl Default for DeclarantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract declarant fields with the default labels.
pub fn extract_declarant_info(text: &str) -> DeclarantInfo {
    DeclarantExtractor::new().extract(text)
}
