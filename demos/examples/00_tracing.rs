use tidings::{NewsQuery, Tidings};
use tidings_demos::common::{demo_range, news_provider, price_provider};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,tidings=debug,tidings_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let tidings = Tidings::builder()
        .news_provider(news_provider())
        .price_provider(price_provider())
        .build()?;

    let _ = tidings.correlate_ticker("AAPL", demo_range()).await?;
    // FAIL is reported as a warning, not an error
    let _ = tidings.correlate_tickers(&["MSFT", "FAIL"], demo_range()).await?;
    let _ = tidings.headline_report(&NewsQuery::all()).await?;

    tracing::info!("done");
    Ok(())
}
