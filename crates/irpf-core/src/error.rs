//! Error types for the irpf-core library.

use thiserror::Error;

/// Main error type for the irpf library.
#[derive(Error, Debug)]
pub enum IrpfError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Declaration extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input file type that cannot be read.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF has too little text, typically a scanned document.
    #[error("PDF has no usable text ({length} characters); scanned declarations are not supported")]
    InsufficientText { length: usize },
}

/// Errors related to declaration extraction.
///
/// Only a missing section aborts the pipeline. Everything else (malformed
/// amounts, items without values, unknown codes, missing declarant fields)
/// degrades to a default and is reported as a warning instead.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The section start marker does not occur in the text.
    #[error("section '{marker}' not found in document")]
    SectionNotFound { marker: String },
}

/// Result type for the irpf library.
pub type Result<T> = std::result::Result<T, IrpfError>;
