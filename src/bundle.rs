// src/bundle.rs
use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::company::CompanyKey;
use crate::model::{ComprehensiveSnapshot, NewsMetadata, SummaryMap};

static BUNDLED: Lazy<StaticBundle> = Lazy::new(|| StaticBundle {
    summary: serde_json::from_str(include_str!("../data/stock_summary.json"))
        .expect("valid bundled summary"),
    comprehensive: serde_json::from_str(include_str!("../data/comprehensive_stock_data.json"))
        .expect("valid bundled comprehensive snapshot"),
    news_metadata: serde_json::from_str(include_str!("../data/news_metadata.json"))
        .expect("valid bundled news metadata"),
    news: {
        let feeds: [(CompanyKey, &str); 6] = [
            (CompanyKey::Tencent, include_str!("../data/news_tencent.json")),
            (CompanyKey::Baidu, include_str!("../data/news_baidu.json")),
            (CompanyKey::Jd, include_str!("../data/news_jd.json")),
            (CompanyKey::Alibaba, include_str!("../data/news_alibaba.json")),
            (CompanyKey::Xiaomi, include_str!("../data/news_xiaomi.json")),
            (CompanyKey::Meituan, include_str!("../data/news_meituan.json")),
        ];
        feeds
            .into_iter()
            .map(|(k, raw)| {
                let items: Vec<Value> =
                    serde_json::from_str(raw).expect("valid bundled news feed");
                (k, items)
            })
            .collect()
    },
});

/// Static fallback datasets, one per remote resource. Injected into the
/// client at construction so tests can substitute fixtures; the compiled-in
/// default mirrors the published data as of the last release.
///
/// News feeds stay raw (`Value`) on purpose: fallback items go through the
/// same normalization pipeline as remote ones.
#[derive(Debug, Clone)]
pub struct StaticBundle {
    pub summary: SummaryMap,
    pub comprehensive: ComprehensiveSnapshot,
    pub news_metadata: NewsMetadata,
    pub news: HashMap<CompanyKey, Vec<Value>>,
}

impl StaticBundle {
    /// The compiled-in default, parsed once from `data/*.json`.
    pub fn bundled() -> &'static StaticBundle {
        &BUNDLED
    }

    /// Raw fallback feed for one company; empty when the bundle carries none.
    pub fn news_for(&self, company: CompanyKey) -> &[Value] {
        self.news.get(&company).map(Vec::as_slice).unwrap_or(&[])
    }
}
