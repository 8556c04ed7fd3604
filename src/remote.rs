// src/remote.rs
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::RemoteConfig;

/// Every remote call gets exactly this long, end to end. Not configurable per
/// call site.
pub const REMOTE_TIMEOUT: Duration = Duration::from_secs(8);

/// Seam between the client and the wire. The production impl speaks HTTP;
/// tests inject stubs so fallback paths run without any network mocking.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch `<base>/<path>` and parse the body as JSON. Any transport error,
    /// timeout, or non-2xx status is an `Err`.
    async fn get_json(&self, path: &str) -> Result<Value>;
}

pub struct HttpRemote {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRemote {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REMOTE_TIMEOUT)
            .build()
            .context("building http client")?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            bail!("HTTP {status} for {url}");
        }

        resp.json::<Value>()
            .await
            .with_context(|| format!("decoding json body from {url}"))
    }
}
