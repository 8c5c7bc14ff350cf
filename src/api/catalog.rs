use crate::config::CatalogConfig;
use crate::error::{ApiError, ApiResult};
use serde::Deserialize;

/// Identifying agent string sent with every request
const USER_AGENT: &str = "GradingFinder/1.0";

/// Field projection requested from the catalog. This is an optimization
/// hint only; deserialization tolerates full or projected record shapes.
const FIELD_PROJECTION: &str = "id,name,set,tcgplayer";

/// Raw catalog card record, returned verbatim from the API
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogCard {
    pub id: String,
    pub name: String,
    pub set: CardSet,
    #[serde(default)]
    pub tcgplayer: Option<Tcgplayer>,
}

/// Set descriptor nested inside a card record
#[derive(Debug, Deserialize, Clone)]
pub struct CardSet {
    pub name: String,
}

/// TCGplayer pricing block of a card record
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Tcgplayer {
    #[serde(default)]
    pub prices: Option<FinishPrices>,
}

/// Price bundles keyed by finish variant
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinishPrices {
    #[serde(default)]
    pub holofoil: Option<PriceBundle>,
    #[serde(default)]
    pub normal: Option<PriceBundle>,
    /// Present on the wire for many cards; takes no part in the
    /// finish-preference rule.
    #[serde(default)]
    pub reverse_holofoil: Option<PriceBundle>,
}

/// Prices for a single finish variant
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PriceBundle {
    #[serde(default)]
    pub market: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub mid: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
}

/// One page of the catalog response
#[derive(Debug, Deserialize)]
struct CardPage {
    data: Vec<CatalogCard>,
}

/// Client for the card catalog API.
///
/// The credential and endpoint are fixed at construction; a missing
/// credential constructs a working client that sends unauthenticated
/// requests (the catalog may rate-limit or reject them, which surfaces
/// as `ApiError::Catalog`).
pub struct CatalogClient {
    client: reqwest::blocking::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            config,
        }
    }

    /// Fetch one page of card records.
    ///
    /// Issues exactly one GET; no retries, no multi-page traversal.
    /// Either the full record sequence of the page is returned or none.
    pub fn fetch_page(&self, page_size: u32, page: u32) -> ApiResult<Vec<CatalogCard>> {
        let url = format!("{}/cards", self.config.base_url);
        log::info!("Fetching catalog page {page} (pageSize {page_size}) from {url}");

        let mut request = self
            .client
            .get(&url)
            .timeout(self.config.timeout)
            .header("User-Agent", USER_AGENT)
            .query(&[
                ("pageSize", page_size.to_string()),
                ("page", page.to_string()),
                ("select", FIELD_PROJECTION.to_string()),
            ]);
        if let Some(key) = &self.config.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::warn!("Catalog returned {status}: {body}");
            return Err(ApiError::Catalog { status, body });
        }

        let body = response.text()?;
        let page_body: CardPage = serde_json::from_str(&body)?;
        log::info!("Fetched {} catalog records", page_body.data.len());
        Ok(page_body.data)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
