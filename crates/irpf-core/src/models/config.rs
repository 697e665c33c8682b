//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::IrpfError;

/// Main configuration for the irpf pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IrpfConfig {
    /// Section and declarant extraction configuration.
    pub extraction: ExtractionConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Report export configuration.
    pub export: ExportConfig,
}

/// Section and declarant extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Heading that opens the assets and rights section.
    pub section_start: String,

    /// Headings that may follow the section, in any order.
    pub stop_markers: Vec<String>,

    /// Labels tried in order when looking for the declarant name.
    pub name_labels: Vec<String>,

    /// Warn when the CPF check digits do not match.
    pub validate_cpf: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            section_start: "DECLARAÇÃO DE BENS E DIREITOS".to_string(),
            stop_markers: vec![
                "DÍVIDAS E ÔNUS".to_string(),
                "RENDIMENTOS".to_string(),
                "EVOLUÇÃO PATRIMONIAL".to_string(),
                "OUTRAS INFORMAÇÕES".to_string(),
            ],
            name_labels: vec![
                "Nome do contribuinte".to_string(),
                "Nome".to_string(),
                "Declarante".to_string(),
                "Contribuinte".to_string(),
                "NOME".to_string(),
            ],
            validate_cpf: true,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum text length to consider the PDF readable.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 50 }
    }
}

/// Report export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Currency symbol placed before formatted amounts.
    pub currency_prefix: String,

    /// Include the declarant block in CSV and text output.
    pub include_declarant: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            currency_prefix: "R$".to_string(),
            include_declarant: true,
        }
    }
}

impl IrpfConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| IrpfError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| IrpfError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
