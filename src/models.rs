use std::collections::HashSet;

/// A card with a resolved raw market price.
///
/// A row exists only when the source record had a usable market price;
/// unpriced records are dropped during normalization, never carried with
/// a null price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedRow {
    /// Catalog identifier, unique within one fetch result
    pub card_id: String,
    pub card_name: String,
    pub set_name: String,
    /// Ungraded market price, rounded to 2 fractional digits
    pub raw_price: f64,
    /// Reserved for a future graded-pricing source; never populated by
    /// the normalizer.
    pub graded_price_psa9: Option<f64>,
    pub graded_price_psa10: Option<f64>,
}

/// User-specified predicates applied after normalization
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    /// Allowed set display names; empty means no restriction.
    /// Matching is exact and case-sensitive, following the catalog's
    /// own casing.
    pub sets: HashSet<String>,
    /// Inclusive upper bound on raw price
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            sets: HashSet::new(),
            max_price: f64::INFINITY,
        }
    }
}

impl FilterCriteria {
    /// Whether a row passes both predicates
    pub fn matches(&self, row: &PricedRow) -> bool {
        let set_ok = self.sets.is_empty() || self.sets.contains(&row.set_name);
        set_ok && row.raw_price <= self.max_price
    }
}

/// Aggregate statistics over a filtered collection
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub count: usize,
    /// Arithmetic mean of raw prices; None when the collection is empty
    pub mean_price: Option<f64>,
}
