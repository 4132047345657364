//! Provider-free entry points.
//!
//! Everything here is synchronous and works on data already in memory; the
//! `Tidings` orchestrator fetches the data and calls into this module.

use tidings_core::headlines::{articles_per_publisher, length_outliers, length_summary, publication_peaks};
use tidings_core::{
    AggregatedSeries, AnalysisConfig, Frequency, HeadlineConfig, HeadlineReport, NewsRecord,
    Observation, PolarityScorer, PriceBar, Reducer, ScoredRecord, SentimentScorer, Stopwords,
    TickerCorrelation, TidingsError, aggregate, align, bucket_returns, category_breakdown,
    correlate, top_keywords,
};

/// Aggregate per-article polarities into calendar buckets.
///
/// # Errors
/// Returns `EmptyInput` when `scored` is empty.
pub fn sentiment_series(
    scored: &[ScoredRecord],
    frequency: Frequency,
    reducer: Reducer,
) -> Result<AggregatedSeries, TidingsError> {
    if scored.is_empty() {
        return Err(TidingsError::empty("sentiment_series"));
    }
    let polarity: Vec<Observation> = scored
        .iter()
        .map(|s| Observation::new(s.record.date, s.polarity))
        .collect();
    aggregate(&polarity, frequency, reducer)
}

/// Correlate bucketed sentiment with bucketed price returns for one ticker.
///
/// Sentiment is reduced with `cfg.sentiment_reducer`, returns are one change
/// per bucket between last closes, and only buckets present in both series
/// take part.
///
/// # Errors
/// - `EmptyInput` when there are no scored articles or no price bars.
/// - `InvalidInput` for bad price rows (see [`tidings_core::price_points`]).
/// - `InsufficientData` when fewer than `cfg.min_overlap` buckets align.
/// - `UndefinedCorrelation` when either aligned series is constant.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tidings::analysis",
        skip(scored, bars, cfg),
        fields(articles = scored.len(), bars = bars.len()),
    )
)]
pub fn sentiment_price_correlation(
    ticker: &str,
    scored: &[ScoredRecord],
    bars: &[PriceBar],
    cfg: &AnalysisConfig,
) -> Result<TickerCorrelation, TidingsError> {
    let sentiment = sentiment_series(scored, cfg.frequency, cfg.sentiment_reducer)?;
    let returns = bucket_returns(bars, cfg.frequency, cfg.prefer_adjusted, cfg.returns_policy)?;
    let aligned = align(&sentiment.observations(), &returns)?;

    let needed = cfg.min_overlap.max(2);
    if aligned.len() < needed {
        return Err(TidingsError::insufficient(needed, aligned.len()));
    }
    let correlation = correlate(&aligned)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "tidings::analysis",
        ticker,
        coefficient = correlation.coefficient,
        points = correlation.sample_size,
        "correlated sentiment with returns"
    );

    Ok(TickerCorrelation {
        ticker: ticker.to_string(),
        frequency: cfg.frequency,
        correlation,
        sentiment,
        returns,
        aligned,
    })
}

/// Headline statistics for a set of articles.
///
/// # Errors
/// - `EmptyInput` when `records` is empty.
/// - `InvalidInput` when a headline cannot be scored.
/// - `InvalidArgument` for a bad outlier threshold, peak count or n-gram range.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tidings::analysis",
        skip(records, scorer, stopwords, cfg),
        fields(records = records.len()),
    )
)]
pub fn headline_report<S: PolarityScorer>(
    records: &[NewsRecord],
    scorer: &SentimentScorer<S>,
    stopwords: &Stopwords,
    cfg: &HeadlineConfig,
    outlier_threshold: f64,
) -> Result<HeadlineReport, TidingsError> {
    let length_summary = length_summary(records)?;
    let length_outliers = length_outliers(records, outlier_threshold)?;
    let scored = scorer.score_records(records)?;
    let publication_peaks = publication_peaks(
        records,
        cfg.publication_frequency,
        None,
        Some(cfg.peak_top_n),
    )?;
    let keywords = top_keywords(
        records,
        stopwords,
        (cfg.ngram_min, cfg.ngram_max),
        cfg.keyword_top_n,
    )?;

    Ok(HeadlineReport {
        records: records.len(),
        length_summary,
        length_outliers,
        publishers: articles_per_publisher(records),
        categories: category_breakdown(&scored),
        publication_peaks,
        keywords,
    })
}
