//! Rule-based extractors for IRPF declarations.

pub mod amounts;
pub mod cpf;
pub mod declarant;
pub mod items;
pub mod patterns;
pub mod section;
pub mod values;
pub mod years;

pub use amounts::{
    format_brl, format_brl_with_prefix, format_optional_brl, parse_brl, try_parse_brl,
    AmountExtractor,
};
pub use cpf::{format_cpf, validate_cpf, CpfExtractor};
pub use declarant::{extract_declarant_info, DeclarantExtractor};
pub use items::{split_items, ItemChunk};
pub use section::locate_section;
pub use values::extract_values;
pub use years::detect_year_headers;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An extracted value together with the text it came from.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
