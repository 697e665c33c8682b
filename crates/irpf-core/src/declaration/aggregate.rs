//! Summing item occurrences per (group, code).

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::declaration::{accumulate, AggregatedRecord, ExtractedRecord, SummaryTable};
use crate::models::reference;

/// Aggregate records against the built-in reference table.
pub fn aggregate<'a, I>(records: I) -> SummaryTable
where
    I: IntoIterator<Item = &'a ExtractedRecord>,
{
    aggregate_with_lookup(records, reference::describe)
}

/// Aggregate records, describing each (group, code) with `lookup`.
///
/// Repeated (group, code) pairs are summed into one row. Rows keep the order
/// in which their key first appears. Unknown codes get no description. The
/// totals row is appended by [`SummaryTable`]. A sum that would leave the
/// `Decimal` range keeps its previous value and flags the table.
pub fn aggregate_with_lookup<'a, I, F, D>(records: I, lookup: F) -> SummaryTable
where
    I: IntoIterator<Item = &'a ExtractedRecord>,
    F: Fn(&str, &str) -> Option<D>,
    D: Into<String>,
{
    let mut rows: Vec<AggregatedRecord> = Vec::new();
    let mut index: HashMap<(&'a str, &'a str), usize> = HashMap::new();
    let mut occurrences = 0usize;
    let mut overflow = false;

    for record in records {
        occurrences += 1;
        let key = record.key();

        match index.get(&key) {
            Some(&i) => {
                let row = &mut rows[i];
                let fits = accumulate(&mut row.prior_value, record.prior_value)
                    & accumulate(&mut row.current_value, record.current_value);
                if !fits {
                    warn!("Sum for {}/{} overflowed, dropping addend", row.group, row.code);
                    overflow = true;
                }
            }
            None => {
                index.insert(key, rows.len());
                rows.push(AggregatedRecord {
                    group: record.group.clone(),
                    code: record.code.clone(),
                    description: lookup(&record.group, &record.code).map(Into::into),
                    prior_value: record.prior_value,
                    current_value: record.current_value,
                });
            }
        }
    }

    debug!("Aggregated {} records into {} rows", occurrences, rows.len());
    let table = SummaryTable::new(rows);
    if overflow {
        table.mark_overflow()
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rec(group: &str, code: &str, prior: &str, current: &str) -> ExtractedRecord {
        ExtractedRecord::new(group, code, d(prior), d(current))
    }

    #[test]
    fn test_duplicates_are_summed() {
        let records = vec![rec("01", "11", "100.00", "200.00"), rec("01", "11", "50.00", "25.00")];

        let table = aggregate(&records);

        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.prior_value, d("150.00"));
        assert_eq!(row.current_value, d("225.00"));
        assert_eq!(row.description.as_deref(), Some("Apartamento"));
    }

    #[test]
    fn test_first_seen_order_and_total_last() {
        let records = vec![
            rec("04", "02", "10.00", "11.00"),
            rec("01", "11", "1.00", "2.00"),
            rec("04", "02", "5.00", "5.00"),
            rec("99", "99", "0.00", "3.00"),
        ];

        let table = aggregate(&records);
        let keys: Vec<(&str, &str)> = table
            .rows()
            .iter()
            .map(|r| (r.group.as_str(), r.code.as_str()))
            .collect();

        assert_eq!(keys, vec![("04", "02"), ("01", "11"), ("99", "99")]);

        let last = table.iter().last().unwrap();
        assert!(last.is_total());
        assert_eq!(last.prior_value, d("16.00"));
        assert_eq!(last.current_value, d("21.00"));
    }

    #[test]
    fn test_permutation_keeps_row_multiset() {
        let records = vec![
            rec("01", "11", "100.00", "200.00"),
            rec("04", "02", "10.00", "11.00"),
            rec("01", "11", "50.00", "25.00"),
        ];
        let mut reversed = records.clone();
        reversed.reverse();

        let a = aggregate(&records);
        let b = aggregate(&reversed);

        let mut rows_a = a.rows().to_vec();
        let mut rows_b = b.rows().to_vec();
        let by_key = |x: &AggregatedRecord, y: &AggregatedRecord| {
            (&x.group, &x.code).cmp(&(&y.group, &y.code))
        };
        rows_a.sort_by(by_key);
        rows_b.sort_by(by_key);

        assert_eq!(rows_a, rows_b);
        assert_eq!(a.total(), b.total());
        assert_eq!(b.rows()[0].group, "04");
    }

    #[test]
    fn test_reaggregation_is_idempotent() {
        let records = vec![
            rec("01", "11", "100.00", "200.00"),
            rec("01", "11", "50.00", "25.00"),
            rec("02", "01", "30.00", "20.00"),
        ];

        let first = aggregate(&records);
        let regrouped: Vec<ExtractedRecord> = first.rows().iter().map(Into::into).collect();
        let second = aggregate(&regrouped);

        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_code_has_no_description() {
        let table = aggregate(&[rec("01", "42", "1.00", "1.00")]);
        assert_eq!(table.rows()[0].description, None);
    }

    #[test]
    fn test_custom_lookup() {
        let table = aggregate_with_lookup(&[rec("01", "11", "1.00", "1.00")], |g, c| {
            Some(format!("{}-{}", g, c))
        });
        assert_eq!(table.rows()[0].description.as_deref(), Some("01-11"));
    }

    #[test]
    fn test_overflow_keeps_running_sum() {
        let records = vec![
            ExtractedRecord::new("01", "11", Decimal::MAX, Decimal::ONE),
            ExtractedRecord::new("01", "11", Decimal::MAX, Decimal::ONE),
        ];

        let table = aggregate(&records);

        assert!(table.overflowed());
        assert_eq!(table.rows()[0].prior_value, Decimal::MAX);
        assert_eq!(table.rows()[0].current_value, d("2"));
    }

    #[test]
    fn test_overflow_in_total() {
        let records = vec![
            ExtractedRecord::new("01", "11", Decimal::MAX, Decimal::ONE),
            ExtractedRecord::new("02", "01", Decimal::MAX, Decimal::ONE),
        ];

        let table = aggregate(&records);

        assert!(table.overflowed());
        assert_eq!(table.total().prior_value, Decimal::MAX);
        assert_eq!(table.total().current_value, d("2"));
    }

    #[test]
    fn test_empty_input() {
        let table = aggregate(&[] as &[ExtractedRecord]);
        assert!(table.is_empty());
        assert!(!table.overflowed());
        assert_eq!(table.total().current_value, Decimal::ZERO);
    }
}
