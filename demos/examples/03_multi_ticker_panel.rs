use tidings::{Observation, Tidings};
use tidings_core::align_all;
use tidings_demos::common::{demo_range, news_provider, price_provider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tidings = Tidings::builder()
        .news_provider(news_provider())
        .price_provider(price_provider())
        .build()?;

    // 1. Correlate the whole basket; NOPE has no prices and ends up in warnings.
    let report = tidings
        .correlate_tickers(&["AAPL", "MSFT", "TSLA", "NOPE"], demo_range())
        .await?;
    for (ticker, r) in report.coefficients() {
        println!("{ticker:<6} r = {r:+.3}");
    }
    for w in &report.warnings {
        println!("{:<6} skipped: {}", w.ticker, w.error);
    }

    // 2. Join every series on shared dates and compare them pairwise.
    let mut columns: Vec<(String, Vec<Observation>)> = Vec::new();
    for c in &report.results {
        columns.push((format!("{} sentiment", c.ticker), c.sentiment.observations()));
        columns.push((format!("{} return", c.ticker), c.returns.clone()));
    }
    let panel = align_all(columns)?;
    println!("\n{} dates shared by all series", panel.len());
    for pair in panel.correlation_matrix() {
        match pair.result {
            Ok(r) => println!("{:>16} ~ {:<16} {:+.3}", pair.left, pair.right, r.coefficient),
            Err(e) => println!("{:>16} ~ {:<16} {e}", pair.left, pair.right),
        }
    }

    Ok(())
}
