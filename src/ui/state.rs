use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::api::catalog::{CatalogCard, CatalogClient};
use crate::cache::FetchCache;
use crate::error::{ApiError, ApiResult};
use crate::filter;
use crate::models::{FilterCriteria, PricedRow, ResultSummary};
use crate::pricing::normalize_all;

/// Message sent from a background fetch task
pub struct FetchMessage {
    /// Fetch generation this result belongs to. Results from an
    /// abandoned generation are discarded, never applied to the view.
    pub generation: u64,
    pub page_size: u32,
    pub page: u32,
    pub result: ApiResult<Vec<CatalogCard>>,
}

/// Non-fatal status shown above the results table
#[derive(Debug, PartialEq)]
pub enum Notice {
    /// A successful fetch normalized to zero usable rows. Not an error;
    /// the table still renders its empty state.
    EmptyResult,
    /// The fetch failed; kind and detail preformatted for display
    FetchFailed(String),
}

/// State for the dashboard screen
pub struct DashboardState {
    /// All normalized rows from the last applied fetch
    pub rows: Vec<PricedRow>,
    /// Distinct set names present in `rows`, sorted for display
    pub available_sets: Vec<String>,
    /// Sets currently ticked in the sidebar; empty means no restriction
    pub selected_sets: HashSet<String>,
    /// Inclusive raw-price ceiling from the sidebar slider
    pub max_price: f64,
    /// Upper end of the slider range, from the highest observed price
    pub price_ceiling: f64,
    /// Estimated grading cost input. Placeholder for the future ROI
    /// computation; feeds no calculation yet.
    pub grading_cost: f64,
    /// Records requested per fetch
    pub page_size: u32,
    /// Requested catalog page; no automatic traversal
    pub page: u32,
    pub notice: Option<Notice>,
    pub in_flight: bool,
    pub last_refreshed: Option<DateTime<Local>>,
    /// Memoizes fetches per parameter set for the freshness window
    cache: FetchCache,
    client: Arc<CatalogClient>,
    /// Current fetch generation; bumped on every trigger
    generation: u64,
    /// Tokio runtime for background fetches
    runtime: Runtime,
    sender: UnboundedSender<FetchMessage>,
    receiver: UnboundedReceiver<FetchMessage>,
}

impl DashboardState {
    pub fn new(client: CatalogClient) -> Self {
        let (tx, rx) = unbounded_channel();
        let runtime = Runtime::new().expect("Failed to create Tokio runtime");
        Self {
            rows: Vec::new(),
            available_sets: Vec::new(),
            selected_sets: HashSet::new(),
            max_price: 100.0,
            price_ceiling: 100.0,
            grading_cost: 25.0,
            page_size: 100,
            page: 1,
            notice: None,
            in_flight: false,
            last_refreshed: None,
            cache: FetchCache::default(),
            client: Arc::new(client),
            generation: 0,
            runtime,
            sender: tx,
            receiver: rx,
        }
    }

    /// Start a fetch for the current parameters. Served from cache when
    /// a fresh entry exists; otherwise runs on a background task so the
    /// UI thread never blocks on HTTP.
    pub fn trigger_fetch(&mut self) {
        self.generation += 1;
        let page_size = self.page_size;
        let page = self.page;

        if let Some(cards) = self.cache.get(page_size, page) {
            log::info!("Cache hit for page {page} (pageSize {page_size})");
            let cards = cards.to_vec();
            self.in_flight = false;
            self.ingest(&cards);
            return;
        }

        log::info!("Cache miss for page {page} (pageSize {page_size}), fetching in background");
        self.in_flight = true;
        self.notice = None;

        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();
        let generation = self.generation;

        self.runtime.spawn(async move {
            let result =
                match tokio::task::spawn_blocking(move || client.fetch_page(page_size, page)).await
                {
                    Ok(result) => result,
                    Err(e) => Err(ApiError::Transport(format!("fetch task failed: {e}"))),
                };
            if sender
                .send(FetchMessage {
                    generation,
                    page_size,
                    page,
                    result,
                })
                .is_err()
            {
                log::warn!("Dashboard closed before fetch completed");
            }
        });
    }

    /// Poll the channel for completed fetches (non-blocking)
    pub fn poll_fetch_results(&mut self) {
        let mut messages = Vec::new();
        while let Ok(msg) = self.receiver.try_recv() {
            messages.push(msg);
        }
        for msg in messages {
            self.handle_message(msg);
        }
    }

    /// Apply one fetch result to the view, unless it is stale
    pub fn handle_message(&mut self, msg: FetchMessage) {
        if msg.generation != self.generation {
            log::debug!(
                "Discarding stale fetch result (generation {} != {})",
                msg.generation,
                self.generation
            );
            return;
        }

        self.in_flight = false;
        match msg.result {
            Ok(cards) => {
                self.cache.insert(msg.page_size, msg.page, cards.clone());
                self.ingest(&cards);
            }
            Err(err) => {
                log::error!("Catalog fetch failed: {err}");
                self.notice = Some(Notice::FetchFailed(err.to_string()));
            }
        }
    }

    /// Normalize fetched records and rebuild the sidebar inputs that
    /// derive from them
    fn ingest(&mut self, cards: &[CatalogCard]) {
        self.rows = normalize_all(cards);

        let mut sets: Vec<String> = self
            .rows
            .iter()
            .map(|row| row.set_name.clone())
            .collect::<HashSet<String>>()
            .into_iter()
            .collect();
        sets.sort();
        self.available_sets = sets;

        // Drop selections for sets no longer present
        let available = &self.available_sets;
        self.selected_sets.retain(|s| available.contains(s));

        let highest = self.rows.iter().map(|r| r.raw_price).fold(0.0, f64::max);
        self.price_ceiling = highest.ceil().max(1.0);
        if self.max_price > self.price_ceiling {
            self.max_price = self.price_ceiling;
        }

        self.notice = if self.rows.is_empty() {
            log::warn!("Fetch returned no usable pricing data");
            Some(Notice::EmptyResult)
        } else {
            None
        };
        self.last_refreshed = Some(Local::now());
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            sets: self.selected_sets.clone(),
            max_price: self.max_price,
        }
    }

    /// Rows passing the current sidebar criteria, with their summary
    pub fn filtered_rows(&self) -> (Vec<PricedRow>, ResultSummary) {
        filter::apply(&self.rows, &self.criteria())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
