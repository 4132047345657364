use std::sync::Arc;
use std::time::Duration;

use tidings_core::connector::{NewsProvider, PriceProvider};
use tidings_core::{
    AnalysisConfig, Frequency, HeadlineConfig, LexiconScorer, PolarityScorer, Reducer,
    ReturnsPolicy, SentimentScorer, Stopwords, TidingsConfig, TidingsError,
};

/// Orchestrator that feeds provider data through the sentiment/price pipeline.
pub struct Tidings {
    pub(crate) news: Arc<dyn NewsProvider>,
    pub(crate) prices: Option<Arc<dyn PriceProvider>>,
    pub(crate) scorer: SentimentScorer<Arc<dyn PolarityScorer>>,
    pub(crate) stopwords: Stopwords,
    pub(crate) cfg: TidingsConfig,
}

impl std::fmt::Debug for Tidings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tidings")
            .field("news", &self.news.name())
            .field("prices", &self.prices.as_ref().map(|p| p.name()))
            .field("scorer", &self.scorer.inner().name())
            .field("stopwords", &self.stopwords.len())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Tidings` orchestrator with custom configuration.
pub struct TidingsBuilder {
    news: Option<Arc<dyn NewsProvider>>,
    prices: Option<Arc<dyn PriceProvider>>,
    scorer: Option<Arc<dyn PolarityScorer>>,
    stopwords: Option<Stopwords>,
    cfg: TidingsConfig,
}

impl Default for TidingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TidingsBuilder {
    /// Create a new builder with default configuration and no providers.
    ///
    /// A news provider is mandatory. The price provider is only needed for the
    /// correlation operations; the scorer defaults to the built-in financial
    /// lexicon and the stopwords to the built-in English list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            news: None,
            prices: None,
            scorer: None,
            stopwords: None,
            cfg: TidingsConfig::default(),
        }
    }

    /// Register the news provider.
    #[must_use]
    pub fn news_provider(mut self, p: Arc<dyn NewsProvider>) -> Self {
        self.news = Some(p);
        self
    }

    /// Register the price provider.
    #[must_use]
    pub fn price_provider(mut self, p: Arc<dyn PriceProvider>) -> Self {
        self.prices = Some(p);
        self
    }

    /// Replace the polarity scorer.
    #[must_use]
    pub fn scorer(mut self, s: Arc<dyn PolarityScorer>) -> Self {
        self.scorer = Some(s);
        self
    }

    /// Replace the stopwords used for keyword extraction.
    #[must_use]
    pub fn stopwords(mut self, s: Stopwords) -> Self {
        self.stopwords = Some(s);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: TidingsConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the correlation pipeline settings.
    #[must_use]
    pub const fn analysis(mut self, cfg: AnalysisConfig) -> Self {
        self.cfg.analysis = cfg;
        self
    }

    /// Replace the headline report settings.
    #[must_use]
    pub const fn headlines(mut self, cfg: HeadlineConfig) -> Self {
        self.cfg.headlines = cfg;
        self
    }

    /// Bucket width for sentiment and returns.
    #[must_use]
    pub const fn frequency(mut self, f: Frequency) -> Self {
        self.cfg.analysis.frequency = f;
        self
    }

    /// Reduction of article polarities within a bucket.
    #[must_use]
    pub const fn sentiment_reducer(mut self, r: Reducer) -> Self {
        self.cfg.analysis.sentiment_reducer = r;
        self
    }

    /// Use adjusted closes when the feed reports them.
    #[must_use]
    pub const fn prefer_adjusted(mut self, yes: bool) -> Self {
        self.cfg.analysis.prefer_adjusted = yes;
        self
    }

    /// Treatment of the first return bucket.
    #[must_use]
    pub const fn returns_policy(mut self, p: ReturnsPolicy) -> Self {
        self.cfg.analysis.returns_policy = p;
        self
    }

    /// IQR multiplier for headline length outliers.
    #[must_use]
    pub const fn outlier_threshold(mut self, t: f64) -> Self {
        self.cfg.analysis.outlier_threshold = t;
        self
    }

    /// Minimum number of aligned points required for a correlation.
    #[must_use]
    pub const fn min_overlap(mut self, n: usize) -> Self {
        self.cfg.analysis.min_overlap = n;
        self
    }

    /// Timeout applied to each provider call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Deadline for a whole multi-ticker batch.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Validate the configuration and build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if no news provider is registered, the outlier
    /// threshold is negative or not finite, `min_overlap` is below 2, or the
    /// n-gram range is empty.
    pub fn build(self) -> Result<Tidings, TidingsError> {
        let Some(news) = self.news else {
            return Err(TidingsError::invalid_arg(
                "no news provider registered; add one via news_provider(...)",
            ));
        };
        let a = &self.cfg.analysis;
        if !a.outlier_threshold.is_finite() || a.outlier_threshold < 0.0 {
            return Err(TidingsError::invalid_arg(format!(
                "outlier_threshold must be finite and non-negative, got {}",
                a.outlier_threshold
            )));
        }
        if a.min_overlap < 2 {
            return Err(TidingsError::invalid_arg(format!(
                "min_overlap must be at least 2, got {}",
                a.min_overlap
            )));
        }
        let h = &self.cfg.headlines;
        if h.ngram_min == 0 || h.ngram_min > h.ngram_max {
            return Err(TidingsError::invalid_arg(format!(
                "invalid n-gram range ({}, {})",
                h.ngram_min, h.ngram_max
            )));
        }

        let scorer = self
            .scorer
            .unwrap_or_else(|| Arc::new(LexiconScorer::default()) as Arc<dyn PolarityScorer>);
        Ok(Tidings {
            news,
            prices: self.prices,
            scorer: SentimentScorer::new(scorer),
            stopwords: self.stopwords.unwrap_or_else(Stopwords::english),
            cfg: self.cfg,
        })
    }
}

/// Keep provider-originated errors attributable to the provider.
///
/// `DataSource` and caller misuse (`InvalidArgument`) pass through; anything
/// else is rewrapped as `DataSource` tagged with the provider name.
pub(crate) fn tag_err(provider: &str, e: TidingsError) -> TidingsError {
    match e {
        e @ (TidingsError::DataSource { .. } | TidingsError::InvalidArgument(_)) => e,
        other => TidingsError::data_source(provider, other.to_string()),
    }
}

impl Tidings {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tidings::core::provider_call_with_timeout",
            skip(fut),
            fields(
                provider = provider,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        provider: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, TidingsError>
    where
        Fut: std::future::Future<Output = Result<T, TidingsError>>,
    {
        match tokio::time::timeout(timeout, fut).await {
            Ok(res) => res.map_err(|e| tag_err(provider, e)),
            Err(_) => Err(TidingsError::data_source(
                provider,
                format!("{capability} timed out after {}ms", timeout.as_millis()),
            )),
        }
    }

    /// Begin building an orchestrator.
    #[must_use]
    pub fn builder() -> TidingsBuilder {
        TidingsBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &TidingsConfig {
        &self.cfg
    }

    /// Scorer used for headlines.
    #[must_use]
    pub const fn scorer(&self) -> &SentimentScorer<Arc<dyn PolarityScorer>> {
        &self.scorer
    }

    /// Stopwords used for keyword extraction.
    #[must_use]
    pub const fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub(crate) fn price_provider(&self) -> Result<&Arc<dyn PriceProvider>, TidingsError> {
        self.prices.as_ref().ok_or_else(|| {
            TidingsError::invalid_arg(
                "no price provider registered; add one via price_provider(...)",
            )
        })
    }
}
