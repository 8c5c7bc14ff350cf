//! Filtering and aggregation over priced rows.

use std::cmp::Ordering;

use crate::models::{FilterCriteria, PricedRow, ResultSummary};

/// Apply both predicates as one conjunctive, order-preserving filter and
/// compute summary statistics over the survivors.
pub fn apply(rows: &[PricedRow], criteria: &FilterCriteria) -> (Vec<PricedRow>, ResultSummary) {
    let filtered: Vec<PricedRow> = rows
        .iter()
        .filter(|row| criteria.matches(row))
        .cloned()
        .collect();
    let summary = summarize(&filtered);
    (filtered, summary)
}

/// Count and mean raw price of a row collection. The mean is None for an
/// empty collection rather than NaN.
pub fn summarize(rows: &[PricedRow]) -> ResultSummary {
    let count = rows.len();
    let mean_price = if count > 0 {
        let sum: f64 = rows.iter().map(|row| row.raw_price).sum();
        Some(sum / count as f64)
    } else {
        None
    };
    ResultSummary { count, mean_price }
}

/// Sort rows descending by raw price for display. The sort is stable, so
/// rows with equal price keep their pre-sort relative order.
pub fn sort_rows_desc(rows: &mut [PricedRow]) {
    rows.sort_by(|a, b| {
        b.raw_price
            .partial_cmp(&a.raw_price)
            .unwrap_or(Ordering::Equal)
    });
}
