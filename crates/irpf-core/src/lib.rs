//! Core library for IRPF (Brazilian income tax) declaration processing.
//!
//! This crate provides:
//! - PDF text loading
//! - Location of the "Declaração de Bens e Direitos" section
//! - Item segmentation and value recovery for each asset
//! - Aggregation per (group, code) against the Receita reference table
//! - Declarant identity extraction (name, CPF, birth date)

pub mod error;
pub mod models;
pub mod pdf;
pub mod declaration;

pub use error::{IrpfError, ExtractionError, PdfError, Result};
pub use models::config::IrpfConfig;
pub use models::declaration::{
    AggregatedRecord, DeclarantInfo, DeclarationReport, ExtractedRecord, SummaryTable, YearHeaders,
};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use declaration::{AssetsParser, DeclarationParser};
