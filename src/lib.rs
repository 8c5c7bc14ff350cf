pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pricing;
pub mod ui;

// Re-export commonly used items
pub use api::{CatalogCard, CatalogClient};
pub use cache::{fetch_page_cached, FetchCache};
pub use config::CatalogConfig;
pub use error::{ApiError, ApiResult};
pub use filter::{apply, sort_rows_desc, summarize};
pub use models::{FilterCriteria, PricedRow, ResultSummary};
pub use pricing::{normalize_all, normalize_card};
pub use ui::{launch_gui, FetchPolicy};
