use tidings::{Frequency, Tidings};
use tidings_demos::common::{demo_range, news_provider, price_provider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Wire the providers (fixture data unless TIDINGS_NEWS_CSV is set).
    let daily = Tidings::builder()
        .news_provider(news_provider())
        .price_provider(price_provider())
        .build()?;

    // 2. Correlate daily sentiment with daily returns.
    let aapl = daily.correlate_ticker("AAPL", demo_range()).await?;
    println!(
        "AAPL daily: r = {:.3} over {} days",
        aapl.correlation.coefficient, aapl.correlation.sample_size
    );
    println!("{:>12} {:>10} {:>10}", "date", "sentiment", "return");
    for p in &aapl.aligned {
        println!("{:>12} {:>10.3} {:>9.2}%", p.date, p.left, p.right * 100.0);
    }

    // 3. Same ticker, weekly buckets.
    let weekly = Tidings::builder()
        .news_provider(news_provider())
        .price_provider(price_provider())
        .frequency(Frequency::Week)
        .build()?;
    match weekly.correlate_ticker("AAPL", demo_range()).await {
        Ok(c) => println!(
            "AAPL weekly: r = {:.3} over {} weeks",
            c.correlation.coefficient, c.correlation.sample_size
        ),
        Err(e) => println!("AAPL weekly: {e}"),
    }

    Ok(())
}
