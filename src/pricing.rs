//! Turns raw catalog records into priced rows.
//!
//! Pure and order-independent: each record is normalized on its own, so
//! the same input always yields the same row (or none).

use crate::api::catalog::CatalogCard;
use crate::models::PricedRow;

/// Round to 2 fractional digits, half away from zero on the scaled f64.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolve a record's raw market price and build a row from it.
///
/// Finish preference is fixed: holofoil first, then normal. The order
/// encodes which finish best represents raw grading-candidate value and
/// is deliberately not configurable. Within the chosen bundle the
/// `market` field must be present; a bundle without a market value is
/// not a usable price and the record is dropped.
pub fn normalize_card(card: &CatalogCard) -> Option<PricedRow> {
    let prices = card.tcgplayer.as_ref()?.prices.as_ref()?;
    let bundle = prices.holofoil.as_ref().or(prices.normal.as_ref())?;
    let market = bundle.market?;

    Some(PricedRow {
        card_id: card.id.clone(),
        card_name: card.name.clone(),
        set_name: card.set.name.clone(),
        raw_price: round_to_cents(market),
        graded_price_psa9: None,
        graded_price_psa10: None,
    })
}

/// Normalize a fetched record sequence, preserving input order and
/// dropping records without a usable price.
pub fn normalize_all(cards: &[CatalogCard]) -> Vec<PricedRow> {
    let rows: Vec<PricedRow> = cards.iter().filter_map(normalize_card).collect();
    log::debug!(
        "Normalized {} of {} records into priced rows",
        rows.len(),
        cards.len()
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::catalog::{CardSet, FinishPrices, PriceBundle, Tcgplayer};

    fn bundle(market: Option<f64>) -> PriceBundle {
        PriceBundle {
            market,
            low: None,
            mid: None,
            high: None,
        }
    }

    fn card(id: &str, prices: Option<FinishPrices>) -> CatalogCard {
        CatalogCard {
            id: id.to_string(),
            name: "Test Card".to_string(),
            set: CardSet {
                name: "Test Set".to_string(),
            },
            tcgplayer: prices.map(|p| Tcgplayer { prices: Some(p) }),
        }
    }

    fn holofoil_and_normal(holofoil: Option<PriceBundle>, normal: Option<PriceBundle>) -> FinishPrices {
        FinishPrices {
            holofoil,
            normal,
            reverse_holofoil: None,
        }
    }

    // ==================== normalize_card ====================

    #[test]
    fn prefers_holofoil_over_normal() {
        let card = card(
            "base1-4",
            Some(holofoil_and_normal(
                Some(bundle(Some(100.0))),
                Some(bundle(Some(5.0))),
            )),
        );
        let row = normalize_card(&card).unwrap();
        assert_eq!(row.raw_price, 100.0);
    }

    #[test]
    fn falls_back_to_normal_when_holofoil_absent() {
        let card = card(
            "base1-58",
            Some(holofoil_and_normal(None, Some(bundle(Some(5.0))))),
        );
        let row = normalize_card(&card).unwrap();
        assert_eq!(row.raw_price, 5.0);
    }

    #[test]
    fn holofoil_without_market_does_not_fall_back() {
        // The holofoil bundle is chosen; its missing market drops the
        // record even though normal carries a price.
        let card = card(
            "base1-4",
            Some(holofoil_and_normal(
                Some(bundle(None)),
                Some(bundle(Some(5.0))),
            )),
        );
        assert!(normalize_card(&card).is_none());
    }

    #[test]
    fn no_bundles_drops_record() {
        let card = card("base1-1", Some(holofoil_and_normal(None, None)));
        assert!(normalize_card(&card).is_none());
    }

    #[test]
    fn missing_tcgplayer_block_drops_record() {
        let card = card("base1-1", None);
        assert!(normalize_card(&card).is_none());
    }

    #[test]
    fn reverse_holofoil_alone_is_not_usable() {
        let card = card(
            "base1-1",
            Some(FinishPrices {
                holofoil: None,
                normal: None,
                reverse_holofoil: Some(bundle(Some(3.0))),
            }),
        );
        assert!(normalize_card(&card).is_none());
    }

    #[test]
    fn copies_identity_fields() {
        let card = card(
            "base1-4",
            Some(holofoil_and_normal(Some(bundle(Some(420.0))), None)),
        );
        let row = normalize_card(&card).unwrap();
        assert_eq!(row.card_id, "base1-4");
        assert_eq!(row.card_name, "Test Card");
        assert_eq!(row.set_name, "Test Set");
    }

    #[test]
    fn graded_prices_are_never_populated() {
        let card = card(
            "base1-4",
            Some(holofoil_and_normal(Some(bundle(Some(420.0))), None)),
        );
        let row = normalize_card(&card).unwrap();
        assert!(row.graded_price_psa9.is_none());
        assert!(row.graded_price_psa10.is_none());
    }

    #[test]
    fn normalize_is_idempotent() {
        let card = card(
            "base1-4",
            Some(holofoil_and_normal(Some(bundle(Some(12.345))), None)),
        );
        assert_eq!(normalize_card(&card), normalize_card(&card));
    }

    // ==================== rounding ====================

    #[test]
    fn rounds_below_half_down() {
        assert_eq!(round_to_cents(10.004), 10.00);
    }

    #[test]
    fn rounds_exact_half_away_from_zero() {
        // 0.125 is exactly representable in binary
        assert_eq!(round_to_cents(0.125), 0.13);
    }

    #[test]
    fn rounds_above_half_up() {
        assert_eq!(round_to_cents(7.256), 7.26);
    }

    #[test]
    fn literal_5_005_rounds_down() {
        // 5.005 as f64 is 5.00499..., just below the true halfway point
        assert_eq!(round_to_cents(5.005), 5.00);
    }

    // ==================== normalize_all ====================

    #[test]
    fn normalize_all_preserves_order_and_drops_unpriced() {
        let cards = vec![
            card(
                "a",
                Some(holofoil_and_normal(Some(bundle(Some(10.0))), None)),
            ),
            card("b", None),
            card("c", Some(holofoil_and_normal(None, Some(bundle(Some(5.0)))))),
        ];

        let rows = normalize_all(&cards);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].card_id, "a");
        assert_eq!(rows[1].card_id, "c");
    }

    #[test]
    fn normalize_all_empty_input() {
        assert!(normalize_all(&[]).is_empty());
    }
}
