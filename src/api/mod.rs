//! API client for the card catalog service

pub mod catalog;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use catalog::{CatalogCard, CatalogClient, FinishPrices, PriceBundle};
