// src/client.rs
//! The data-access client: one remote attempt per resource, bundled fallback
//! on failure, identical normalization on both paths for news.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::bundle::StaticBundle;
use crate::company::CompanyKey;
use crate::config::{load_remote_config_default, RemoteConfig};
use crate::model::{
    ComprehensiveSnapshot, Fetched, NewsMetadata, NormalizedNewsItem, SummaryMap,
};
use crate::normalize::normalize_feed;
use crate::remote::{HttpRemote, RemoteSource};

pub const SUMMARY_PATH: &str = "stock_summary.json";
pub const COMPREHENSIVE_PATH: &str = "comprehensive_stock_data.json";
pub const NEWS_METADATA_PATH: &str = "news_metadata.json";

/// Stateless fetch-with-fallback client. Every operation resolves with a
/// usable value of the expected shape; remote failures are logged, recovered
/// from locally, and never surfaced. No caching, no retries, no cross-call
/// state.
pub struct DataClient {
    remote: Box<dyn RemoteSource>,
    bundle: StaticBundle,
}

/// Index-page load: summary table + comprehensive snapshot, fetched
/// concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub summary: Fetched<SummaryMap>,
    pub comprehensive: Fetched<ComprehensiveSnapshot>,
}

/// Company-page load: comprehensive snapshot + the company's news + news
/// metadata, fetched concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyPage {
    pub company: CompanyKey,
    pub comprehensive: Fetched<ComprehensiveSnapshot>,
    pub news: Fetched<Vec<NormalizedNewsItem>>,
    pub news_metadata: Fetched<NewsMetadata>,
}

impl DataClient {
    pub fn new(remote: impl RemoteSource + 'static, bundle: StaticBundle) -> Self {
        Self {
            remote: Box::new(remote),
            bundle,
        }
    }

    /// HTTP client against the configured base URL, compiled-in fallback data.
    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        Ok(Self::new(
            HttpRemote::new(config)?,
            StaticBundle::bundled().clone(),
        ))
    }

    /// Convenience for binaries: env/file config layering, then `from_config`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&load_remote_config_default()?)
    }

    pub async fn fetch_summary(&self) -> Fetched<SummaryMap> {
        self.fetch_or_fallback(SUMMARY_PATH, &self.bundle.summary)
            .await
    }

    pub async fn fetch_comprehensive(&self) -> Fetched<ComprehensiveSnapshot> {
        self.fetch_or_fallback(COMPREHENSIVE_PATH, &self.bundle.comprehensive)
            .await
    }

    pub async fn fetch_news_metadata(&self) -> Fetched<NewsMetadata> {
        self.fetch_or_fallback(NEWS_METADATA_PATH, &self.bundle.news_metadata)
            .await
    }

    /// Company news feed, normalized and filtered. A remote body that is not
    /// an array means "feed present but empty" and resolves to an empty list
    /// WITHOUT falling back to the bundle; only a failed request falls back.
    pub async fn fetch_company_news(&self, company: CompanyKey) -> Fetched<Vec<NormalizedNewsItem>> {
        let path = format!("news_{company}.json");
        match self.remote.get_json(&path).await {
            Ok(Value::Array(items)) => Fetched::remote(normalize_feed(&items)),
            Ok(_) => {
                debug!(%path, "remote news body is not an array; treating as empty feed");
                Fetched::remote(Vec::new())
            }
            Err(e) => {
                warn!(%path, error = %e, "remote news fetch failed; using bundled fallback");
                Fetched::fallback(normalize_feed(self.bundle.news_for(company)))
            }
        }
    }

    /// Index-page load. Both resources are attempted concurrently and fall
    /// back independently; the combined load always settles.
    pub async fn load_overview(&self) -> Overview {
        let (summary, comprehensive) =
            tokio::join!(self.fetch_summary(), self.fetch_comprehensive());
        Overview {
            summary,
            comprehensive,
        }
    }

    /// Company-page load; same independent-fallback semantics across the
    /// three resources.
    pub async fn load_company_page(&self, company: CompanyKey) -> CompanyPage {
        let (comprehensive, news, news_metadata) = tokio::join!(
            self.fetch_comprehensive(),
            self.fetch_company_news(company),
            self.fetch_news_metadata()
        );
        CompanyPage {
            company,
            comprehensive,
            news,
            news_metadata,
        }
    }

    /// Single attempt, then bundled fallback. A body that does not
    /// deserialize into the expected shape counts as a failed fetch.
    async fn fetch_or_fallback<T>(&self, path: &str, fallback: &T) -> Fetched<T>
    where
        T: DeserializeOwned + Clone,
    {
        match self.remote.get_json(path).await {
            Ok(body) => match serde_json::from_value::<T>(body) {
                Ok(payload) => Fetched::remote(payload),
                Err(e) => {
                    warn!(%path, error = %e, "remote payload has unexpected shape; using bundled fallback");
                    Fetched::fallback(fallback.clone())
                }
            },
            Err(e) => {
                warn!(%path, error = %e, "remote fetch failed; using bundled fallback");
                Fetched::fallback(fallback.clone())
            }
        }
    }
}
