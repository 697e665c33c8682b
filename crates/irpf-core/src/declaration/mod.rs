//! Assets and rights extraction module.

mod aggregate;
mod parser;
pub mod rules;

pub use aggregate::{aggregate, aggregate_with_lookup};
pub use parser::{AssetsParser, DeclarationParser};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
