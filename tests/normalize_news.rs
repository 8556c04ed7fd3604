// tests/normalize_news.rs
use hktech_data::model::{Timestamp, UNTITLED};
use hktech_data::{normalize_feed, normalize_news_item};
use serde_json::{json, Value};

const MIXED_FEED: &str = include_str!("fixtures/raw_news_mixed.json");

#[test]
fn canonical_url_object_resolves_link() {
    let raw = json!({
        "title": "t",
        "canonicalUrl": {"url": "https://x"}
    });
    let n = normalize_news_item(&raw);
    assert_eq!(n.link, "https://x");
}

#[test]
fn link_precedence_is_link_then_clickthrough_then_canonical() {
    let raw = json!({
        "title": "t",
        "link": "https://a",
        "clickThroughUrl": {"url": "https://b"},
        "canonicalUrl": {"url": "https://c"}
    });
    assert_eq!(normalize_news_item(&raw).link, "https://a");

    let raw = json!({
        "title": "t",
        "clickThroughUrl": "https://b",
        "canonicalUrl": {"url": "https://c"}
    });
    assert_eq!(normalize_news_item(&raw).link, "https://b");
}

#[test]
fn provider_display_name_resolves_publisher() {
    let raw = json!({
        "title": "t",
        "provider": {"displayName": "AI News"}
    });
    assert_eq!(normalize_news_item(&raw).publisher, "AI News");

    // An explicit publisher string wins over the provider object.
    let raw = json!({
        "title": "t",
        "publisher": "Reuters",
        "provider": {"displayName": "AI News"}
    });
    assert_eq!(normalize_news_item(&raw).publisher, "Reuters");
}

#[test]
fn content_envelope_is_unwrapped() {
    let raw = json!({
        "content": {
            "title": "Inner",
            "summary": "wrapped",
            "providerPublishTime": 123
        }
    });
    let n = normalize_news_item(&raw);
    assert_eq!(n.title, "Inner");
    assert_eq!(n.summary, "wrapped");
    assert_eq!(n.provider_publish_time, Timestamp::Epoch(123));
}

#[test]
fn pub_date_backs_up_zero_publish_time() {
    let raw = json!({
        "title": "t",
        "providerPublishTime": 0,
        "pubDate": "2026-08-15T08:30:00Z"
    });
    let n = normalize_news_item(&raw);
    assert_eq!(
        n.provider_publish_time,
        Timestamp::Iso("2026-08-15T08:30:00Z".into())
    );
}

#[test]
fn empty_item_gets_all_defaults_and_is_excluded() {
    let n = normalize_news_item(&json!({}));
    assert_eq!(n.title, UNTITLED);
    assert_eq!(n.summary, "");
    assert_eq!(n.link, "");
    assert_eq!(n.publisher, "Unknown");
    assert_eq!(n.provider_publish_time, Timestamp::Epoch(0));
    assert_eq!(n.sentiment_label, "neutral");
    assert_eq!(n.sentiment_score, 0.0);
    assert!(!n.has_usable_title());

    let filtered = normalize_feed(&[json!({})]);
    assert!(filtered.is_empty());
}

#[test]
fn normalization_is_idempotent_on_canonical_input() {
    let feed: Vec<Value> = serde_json::from_str(MIXED_FEED).unwrap();
    for raw in &feed {
        let once = normalize_news_item(raw);
        let reserialized = serde_json::to_value(&once).unwrap();
        let twice = normalize_news_item(&reserialized);
        assert_eq!(once, twice);
    }
}

#[test]
fn feed_filters_placeholders_and_preserves_order() {
    let feed: Vec<Value> = serde_json::from_str(MIXED_FEED).unwrap();
    let out = normalize_feed(&feed);

    // Of the five fixture items, the empty object and the "Untitled" one drop.
    let titles: Vec<&str> = out.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Enveloped Item With Click-Through",
            "Flat Item With Canonical Object",
            "Fully Explicit Item"
        ]
    );
    assert!(out.iter().all(|n| n.has_usable_title()));

    // description backs up summary on the second item.
    assert_eq!(out[1].summary, "Uses description instead of summary.");
}
