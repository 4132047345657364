use tidings::{NewsQuery, Tidings};
use tidings_demos::common::{news_provider, price_provider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tidings = Tidings::builder()
        .news_provider(news_provider())
        .price_provider(price_provider())
        .build()?;

    let report = tidings.headline_report(&NewsQuery::all()).await?;

    let s = &report.length_summary;
    println!("{} headlines", report.records);
    println!(
        "length: mean {:.1}, min {}, median {}, max {}",
        s.mean, s.min, s.p50, s.max
    );
    for r in &report.length_outliers {
        println!("  unusual length ({}): {}", r.headline.chars().count(), r.headline);
    }

    println!("\nTop publishers:");
    for p in report.publishers.iter().take(5) {
        println!("  {:<24} {}", p.publisher, p.articles);
    }

    let c = report.categories;
    println!(
        "\nSentiment: {} positive, {} neutral, {} negative",
        c.positive, c.neutral, c.negative
    );

    println!("\nBusiest days:");
    for o in &report.publication_peaks {
        println!("  {} {}", o.date, o.value);
    }

    println!("\nKeywords:");
    for k in &report.keywords {
        println!("  {:<20} {}", k.ngram, k.count);
    }

    Ok(())
}
