//! Time-bounded memoization of catalog fetches.
//!
//! One entry per distinct fetch parameter set; an entry is served while
//! younger than the freshness window and silently refetched after that.
//! There is no other invalidation; the catalog data changes slowly.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::api::catalog::{CatalogCard, CatalogClient};
use crate::error::ApiResult;

/// Cached results stay valid for an hour
const DEFAULT_FRESHNESS: Duration = Duration::from_secs(3600);

struct CachedPage {
    fetched_at: Instant,
    cards: Vec<CatalogCard>,
}

/// In-memory cache of fetched catalog pages, keyed by (pageSize, page)
pub struct FetchCache {
    freshness: Duration,
    entries: HashMap<(u32, u32), CachedPage>,
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::with_freshness(DEFAULT_FRESHNESS)
    }
}

impl FetchCache {
    /// Create a cache with a custom freshness window
    pub fn with_freshness(freshness: Duration) -> Self {
        Self {
            freshness,
            entries: HashMap::new(),
        }
    }

    /// Get a page from cache, if present and still fresh
    pub fn get(&self, page_size: u32, page: u32) -> Option<&[CatalogCard]> {
        let entry = self.entries.get(&(page_size, page))?;
        if entry.fetched_at.elapsed() < self.freshness {
            Some(&entry.cards)
        } else {
            None
        }
    }

    /// Insert a freshly fetched page, replacing any prior entry for the
    /// same parameters
    pub fn insert(&mut self, page_size: u32, page: u32, cards: Vec<CatalogCard>) {
        self.entries.insert(
            (page_size, page),
            CachedPage {
                fetched_at: Instant::now(),
                cards,
            },
        );
    }

    /// Number of cached parameter sets, fresh or stale
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fetch a catalog page, checking the cache first
pub fn fetch_page_cached(
    cache: &mut FetchCache,
    client: &CatalogClient,
    page_size: u32,
    page: u32,
) -> ApiResult<Vec<CatalogCard>> {
    if let Some(cards) = cache.get(page_size, page) {
        log::info!("Cache hit for page {page} (pageSize {page_size})");
        return Ok(cards.to_vec());
    }

    log::info!("Cache miss for page {page} (pageSize {page_size}), fetching from catalog");
    let cards = client.fetch_page(page_size, page)?;
    cache.insert(page_size, page, cards.clone());
    Ok(cards)
}
