// src/model.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::company::CompanyKey;

/// A point-in-time value that producers emit either as unix epoch seconds or
/// as an ISO-8601 string. Kept as received; display formatting is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(i64),
    Iso(String),
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::Epoch(0)
    }
}

impl Timestamp {
    /// True for the values the resolution chain treats as "not provided":
    /// epoch 0 or an empty string.
    pub fn is_absent(&self) -> bool {
        match self {
            Timestamp::Epoch(secs) => *secs == 0,
            Timestamp::Iso(s) => s.is_empty(),
        }
    }

    /// Best-effort conversion to a chrono instant, for display.
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        match self {
            Timestamp::Epoch(secs) => chrono::DateTime::from_timestamp(*secs, 0),
            Timestamp::Iso(s) => chrono::DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&chrono::Utc)),
        }
    }
}

/// One row of the index-page summary table. Snapshots are replaced whole on
/// every fetch, never merged field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub price: f64,
    pub change_pct: f64,
    pub market_cap: String, // display string, e.g. "$638B"
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    pub technical_rating: String,
    pub rsi: f64,
    pub volatility: f64,
    #[serde(rename = "52w_high")]
    pub week52_high: f64,
    #[serde(rename = "52w_low")]
    pub week52_low: f64,
}

pub type SummaryMap = HashMap<CompanyKey, SummaryRow>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalRating {
    pub rating: String,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Richer per-company record shown on the company page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub price: f64,
    pub change_pct: f64,
    pub market_cap_display: String,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub roe: Option<f64>,
    pub rsi_14: f64,
    pub macd: f64,
    #[serde(rename = "52w_high")]
    pub week52_high: f64,
    #[serde(rename = "52w_low")]
    pub week52_low: f64,
    pub volatility: f64,
    pub technical_rating: TechnicalRating,
}

/// Whole-dashboard comprehensive snapshot: one timestamp, one detail record
/// per company key (same closed set as the summary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveSnapshot {
    #[serde(default)]
    pub timestamp: Timestamp,
    pub companies: HashMap<CompanyKey, CompanyDetail>,
}

/// News sidecar record; only `last_update` is consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsMetadata {
    #[serde(default)]
    pub last_update: Timestamp,
}

/// Placeholder title assigned when a raw item carries none. Items left with
/// this title never reach the rendered list.
pub const UNTITLED: &str = "Untitled";

/// Canonical news record produced by normalization. Raw producer shapes vary
/// (enveloped or flat, string or object URLs); this one does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedNewsItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: String,
    pub publisher: String,
    #[serde(rename = "providerPublishTime", default)]
    pub provider_publish_time: Timestamp,
    pub sentiment_label: String,
    pub sentiment_score: f64,
}

impl NormalizedNewsItem {
    /// Inclusion rule for rendered lists: a real, non-placeholder title.
    pub fn has_usable_title(&self) -> bool {
        !self.title.is_empty() && self.title != UNTITLED
    }
}

/// Where a fetched payload came from. Callers must not branch on this for
/// anything but diagnostics; the shape contract is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback,
}

/// A payload tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub origin: Origin,
    pub payload: T,
}

impl<T> Fetched<T> {
    pub fn remote(payload: T) -> Self {
        Self {
            origin: Origin::Remote,
            payload,
        }
    }

    pub fn fallback(payload: T) -> Self {
        Self {
            origin: Origin::Fallback,
            payload,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }

    pub fn into_inner(self) -> T {
        self.payload
    }
}
