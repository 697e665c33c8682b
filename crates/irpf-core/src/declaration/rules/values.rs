//! Recovering the two situation values of an item.
//!
//! This is a heuristic policy, not a parser:
//!
//! 1. Take the amounts on the anchor line; if there are at least two, the
//!    last two are (prior, current). Leading numbers on the line, such as an
//!    amount quoted in the description, are ignored.
//! 2. Otherwise take the last two amounts anywhere in the chunk.
//! 3. Otherwise the item has no values and both are zero. The item is kept
//!    so its (group, code) still shows up in the summary.
//!
//! A description with two amount-like substrings and no real values on the
//! anchor line is misread. The tie-break above decides financial totals, so
//! changes here change reports.

use rust_decimal::Decimal;
use tracing::trace;

use super::amounts::AmountExtractor;
use super::items::ItemChunk;
use super::FieldExtractor;

/// Last two amounts in `text`, if there are at least two.
fn last_two_amounts(extractor: &AmountExtractor, text: &str) -> Option<(Decimal, Decimal)> {
    let amounts = extractor.extract_all(text);
    match amounts.as_slice() {
        [.., prior, current] => Some((prior.value, current.value)),
        _ => None,
    }
}

/// Extract (prior, current) from an item chunk.
///
/// Returns `None` when fewer than two amounts exist in the whole chunk; the
/// caller decides the default.
pub fn extract_values(chunk: &ItemChunk<'_>) -> Option<(Decimal, Decimal)> {
    let extractor = AmountExtractor::new();

    if let Some(values) = last_two_amounts(&extractor, chunk.first_line()) {
        trace!("{}/{}: values on anchor line", chunk.group, chunk.code);
        return Some(values);
    }

    let values = last_two_amounts(&extractor, chunk.text);
    if values.is_some() {
        trace!("{}/{}: values from whole chunk", chunk.group, chunk.code);
    }
    values
}
