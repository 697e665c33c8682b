//! Data models for the assets and rights section of a declaration.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label of the synthetic totals row.
pub const TOTAL_LABEL: &str = "TOTAL";

/// Left-pad a group or item code to two digits.
pub fn pad_code(code: &str) -> String {
    format!("{:0>2}", code.trim())
}

/// One item occurrence found in the section, before aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Two-digit group code.
    pub group: String,
    /// Two-digit item code within the group.
    pub code: String,
    /// Situation on 31/12 of the prior year.
    pub prior_value: Decimal,
    /// Situation on 31/12 of the declared year.
    pub current_value: Decimal,
}

impl ExtractedRecord {
    pub fn new(group: &str, code: &str, prior_value: Decimal, current_value: Decimal) -> Self {
        Self {
            group: pad_code(group),
            code: pad_code(code),
            prior_value,
            current_value,
        }
    }

    /// Aggregation key.
    pub fn key(&self) -> (&str, &str) {
        (&self.group, &self.code)
    }
}

/// One summary row, unique per (group, code).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    /// Two-digit group code (empty on the totals row).
    pub group: String,
    /// Two-digit item code (empty on the totals row).
    pub code: String,
    /// Reference description, absent when the code is unknown.
    pub description: Option<String>,
    pub prior_value: Decimal,
    pub current_value: Decimal,
}

impl AggregatedRecord {
    /// Whether this is the synthetic totals row.
    pub fn is_total(&self) -> bool {
        self.group.is_empty()
            && self.code.is_empty()
            && self.description.as_deref() == Some(TOTAL_LABEL)
    }
}

impl From<&AggregatedRecord> for ExtractedRecord {
    fn from(row: &AggregatedRecord) -> Self {
        Self {
            group: row.group.clone(),
            code: row.code.clone(),
            prior_value: row.prior_value,
            current_value: row.current_value,
        }
    }
}

/// Add `value` to `sum` in place. On overflow `sum` is left unchanged and
/// `false` is returned.
pub(crate) fn accumulate(sum: &mut Decimal, value: Decimal) -> bool {
    match sum.checked_add(value) {
        Some(next) => {
            *sum = next;
            true
        }
        None => false,
    }
}

/// Aggregated rows in first-seen order, followed by the totals row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    rows: Vec<AggregatedRecord>,
    total: AggregatedRecord,
    /// Set when some sum exceeded the `Decimal` range and an addend was dropped.
    #[serde(default)]
    overflow: bool,
}

impl SummaryTable {
    /// Build a table from aggregated rows, computing the totals row.
    ///
    /// A row that would overflow a total is left out of that total and the
    /// table is flagged, see [`SummaryTable::overflowed`].
    pub fn new(rows: Vec<AggregatedRecord>) -> Self {
        let mut prior_value = Decimal::ZERO;
        let mut current_value = Decimal::ZERO;
        let mut overflow = false;
        for row in &rows {
            overflow |= !accumulate(&mut prior_value, row.prior_value);
            overflow |= !accumulate(&mut current_value, row.current_value);
        }

        let total = AggregatedRecord {
            group: String::new(),
            code: String::new(),
            description: Some(TOTAL_LABEL.to_string()),
            prior_value,
            current_value,
        };

        Self {
            rows,
            total,
            overflow,
        }
    }

    pub(crate) fn mark_overflow(mut self) -> Self {
        self.overflow = true;
        self
    }

    /// Whether any row or total sum overflowed and is therefore incomplete.
    pub fn overflowed(&self) -> bool {
        self.overflow
    }

    /// Aggregated rows, without the totals row.
    pub fn rows(&self) -> &[AggregatedRecord] {
        &self.rows
    }

    /// The totals row.
    pub fn total(&self) -> &AggregatedRecord {
        &self.total
    }

    /// All rows with the totals row last.
    pub fn iter(&self) -> impl Iterator<Item = &AggregatedRecord> {
        self.rows.iter().chain(std::iter::once(&self.total))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Identity fields of the declarant. Each field is found independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarantInfo {
    pub name: Option<String>,
    /// CPF as written in the document.
    pub cpf: Option<String>,
    /// Birth date as written in the document (DD/MM/YYYY).
    pub birth_date: Option<String>,
}

impl DeclarantInfo {
    /// Birth date parsed as a calendar date.
    pub fn birth_date_value(&self) -> Option<NaiveDate> {
        self.birth_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok())
    }

    /// Whether no field could be extracted.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.cpf.is_none() && self.birth_date.is_none()
    }
}

/// Labels of the two value columns, taken from the 31/12/YYYY headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearHeaders {
    pub prior: String,
    pub current: String,
}

impl Default for YearHeaders {
    fn default() -> Self {
        Self {
            prior: "ano_1".to_string(),
            current: "ano_2".to_string(),
        }
    }
}

impl YearHeaders {
    /// Column names used by the exports (`situacao_<year>`).
    pub fn column_names(&self) -> (String, String) {
        (
            format!("situacao_{}", self.prior),
            format!("situacao_{}", self.current),
        )
    }
}

/// Everything extracted from one declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclarationReport {
    pub declarant: DeclarantInfo,
    pub years: YearHeaders,
    /// Item occurrences in document order, before aggregation.
    pub records: Vec<ExtractedRecord>,
    pub summary: SummaryTable,
    /// Degraded-to-default outcomes worth showing to the user.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}
