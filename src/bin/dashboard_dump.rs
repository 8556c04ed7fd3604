//! Demo that runs both page loads against the configured remote (falling back
//! to the bundled snapshots when offline) and dumps the results as JSON.

use hktech_data::{CompanyKey, DataClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = DataClient::from_env()?;

    let overview = client.load_overview().await;
    tracing::info!(
        summary_fallback = overview.summary.is_fallback(),
        comprehensive_fallback = overview.comprehensive.is_fallback(),
        "overview loaded"
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&overview.summary.payload)?
    );

    let company = std::env::args()
        .nth(1)
        .map(|s| s.parse::<CompanyKey>())
        .transpose()?
        .unwrap_or(CompanyKey::Tencent);

    let page = client.load_company_page(company).await;
    let news_updated = page
        .news_metadata
        .payload
        .last_update
        .to_datetime()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "unknown".to_string());
    tracing::info!(
        %company,
        news_items = page.news.payload.len(),
        news_fallback = page.news.is_fallback(),
        %news_updated,
        "company page loaded"
    );
    println!("{}", serde_json::to_string_pretty(&page.news.payload)?);

    Ok(())
}
