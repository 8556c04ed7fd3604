// src/normalize.rs
//! Canonicalization of producer-defined news shapes.
//!
//! Upstream feeds disagree on envelope and field layout: some wrap the item
//! in a `content` object, URLs arrive as plain strings or as `{url: ...}`
//! objects, the publisher may live under `publisher` or `provider.displayName`,
//! and publish times come as epoch numbers (`providerPublishTime`) or ISO
//! strings (`pubDate`). All of that probing lives here, in one deterministic
//! pure function, so transport code and tests never touch raw shapes.

use serde_json::Value;

use crate::model::{NormalizedNewsItem, Timestamp, UNTITLED};

/// Resolve one raw item into the canonical record. Deterministic and
/// side-effect-free; idempotent on already-canonical input.
pub fn normalize_news_item(item: &Value) -> NormalizedNewsItem {
    // Unwrap a `content` envelope when present.
    let raw = match item.get("content") {
        Some(inner) if inner.is_object() => inner,
        _ => item,
    };

    let canonical_url = url_field(raw, "canonicalUrl");
    let click_through_url = url_field(raw, "clickThroughUrl");

    let link = str_field(raw, "link")
        .or(click_through_url)
        .or(canonical_url)
        .unwrap_or_default();

    let publisher = str_field(raw, "publisher")
        .or_else(|| {
            raw.get("provider")
                .filter(|p| p.is_object())
                .and_then(|p| p.get("displayName"))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "Unknown".to_owned());

    let provider_publish_time = time_field(raw, "providerPublishTime")
        .or_else(|| time_field(raw, "pubDate"))
        .unwrap_or_default();

    NormalizedNewsItem {
        title: str_field(raw, "title").unwrap_or_else(|| UNTITLED.to_owned()),
        summary: str_field(raw, "summary")
            .or_else(|| str_field(raw, "description"))
            .unwrap_or_default(),
        link,
        publisher,
        provider_publish_time,
        sentiment_label: str_field(raw, "sentiment_label").unwrap_or_else(|| "neutral".to_owned()),
        sentiment_score: raw
            .get("sentiment_score")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
    }
}

/// Normalize a whole feed and drop items without a usable title. Source order
/// is preserved; no sort by publish time is applied.
pub fn normalize_feed(items: &[Value]) -> Vec<NormalizedNewsItem> {
    items
        .iter()
        .map(normalize_news_item)
        .filter(NormalizedNewsItem::has_usable_title)
        .collect()
}

/// Non-empty string field, if present.
fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// URL-ish field: either a plain string or an object carrying `url`.
fn url_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::Object(obj) => obj
            .get("url")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Timestamp-ish field: epoch number or non-empty string. Zero epochs count
/// as absent so the next candidate in the chain gets a chance.
fn time_field(raw: &Value, key: &str) -> Option<Timestamp> {
    let ts = match raw.get(key)? {
        // Some producers emit float epochs; truncate to whole seconds.
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Timestamp::Epoch)?,
        Value::String(s) => Timestamp::Iso(s.clone()),
        _ => return None,
    };
    if ts.is_absent() {
        None
    } else {
        Some(ts)
    }
}
