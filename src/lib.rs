// src/lib.rs
// Public library surface for integration tests (and the dashboard bins).

pub mod bundle;
pub mod client;
pub mod company;
pub mod config;
pub mod model;
pub mod normalize;
pub mod remote;

// ---- Re-exports for stable public API ----
pub use crate::bundle::StaticBundle;
pub use crate::client::{CompanyPage, DataClient, Overview};
pub use crate::company::CompanyKey;
pub use crate::config::{load_remote_config_default, RemoteConfig};
pub use crate::model::{
    ComprehensiveSnapshot, Fetched, NewsMetadata, NormalizedNewsItem, Origin, SummaryMap,
    SummaryRow, Timestamp,
};
pub use crate::normalize::{normalize_feed, normalize_news_item};
pub use crate::remote::{HttpRemote, RemoteSource, REMOTE_TIMEOUT};
