use std::collections::HashSet;

use tidings_core::{
    CorrelationReport, DateRange, NewsQuery, TickerCorrelation, TickerWarning, TidingsError,
};

use crate::Tidings;
use crate::analysis::sentiment_price_correlation;

impl Tidings {
    /// Correlate news sentiment with price returns for one ticker.
    ///
    /// Behavior:
    /// - Fetches articles and daily bars for `range` concurrently, each call
    ///   bounded by the provider timeout.
    /// - Scores every headline, then runs
    ///   [`sentiment_price_correlation`](crate::analysis::sentiment_price_correlation)
    ///   with the configured analysis settings.
    ///
    /// # Errors
    /// - `InvalidArgument` if no price provider is registered or `ticker` is blank.
    /// - `DataSource` when a provider fails or times out.
    /// - Any error of the scoring and correlation pipeline.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tidings::correlate::correlate_ticker",
            skip(self, ticker),
            fields(ticker = ticker),
        )
    )]
    pub async fn correlate_ticker(
        &self,
        ticker: &str,
        range: DateRange,
    ) -> Result<TickerCorrelation, TidingsError> {
        let prices = self.price_provider()?;
        if ticker.trim().is_empty() {
            return Err(TidingsError::invalid_arg("ticker must not be blank"));
        }

        let timeout = self.cfg.provider_timeout;
        let query = NewsQuery::for_ticker(ticker).within(range);
        let news_fut =
            Self::provider_call_with_timeout(self.news.name(), "news", timeout, self.news.news(&query));
        let price_fut = Self::provider_call_with_timeout(
            prices.name(),
            "prices",
            timeout,
            prices.prices(ticker, range),
        );
        let (articles, bars) = futures::future::try_join(news_fut, price_fut).await?;

        let scored = self.scorer.score_records(&articles)?;
        sentiment_price_correlation(ticker, &scored, &bars, &self.cfg.analysis)
    }

    /// Correlate several tickers concurrently.
    ///
    /// Behavior and trade-offs:
    /// - Tickers are processed concurrently; only the provider I/O overlaps, the
    ///   computations stay synchronous.
    /// - A ticker whose pipeline fails is reported in `warnings` and does not
    ///   abort the batch. Caller misuse (`InvalidArgument`) still aborts.
    /// - With a request timeout configured, the whole batch must finish before
    ///   the deadline.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty or repeated ticker list or a missing
    /// price provider, and `DataSource` when the request deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tidings::correlate::correlate_tickers",
            skip(self, tickers),
            fields(tickers = tickers.len()),
        )
    )]
    pub async fn correlate_tickers(
        &self,
        tickers: &[&str],
        range: DateRange,
    ) -> Result<CorrelationReport, TidingsError> {
        if tickers.is_empty() {
            return Err(TidingsError::invalid_arg("no tickers specified"));
        }
        let mut seen = HashSet::new();
        for t in tickers {
            if !seen.insert(t.to_ascii_uppercase()) {
                return Err(TidingsError::invalid_arg(format!(
                    "duplicate ticker '{t}' in ticker list"
                )));
            }
        }
        self.price_provider()?;

        let tasks = tickers.iter().map(|&ticker| async move {
            (ticker.to_string(), self.correlate_ticker(ticker, range).await)
        });

        let joined = if let Some(deadline) = self.cfg.request_timeout {
            match tokio::time::timeout(deadline, futures::future::join_all(tasks)).await {
                Ok(v) => v,
                Err(_) => {
                    return Err(TidingsError::data_source(
                        "tidings",
                        format!(
                            "correlate_tickers timed out after {}ms",
                            deadline.as_millis()
                        ),
                    ));
                }
            }
        } else {
            futures::future::join_all(tasks).await
        };

        let mut report = CorrelationReport::default();
        for (ticker, result) in joined {
            match result {
                Ok(c) => report.results.push(c),
                Err(e) if e.is_recoverable() => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        target: "tidings::correlate",
                        ticker = %ticker,
                        error = %e,
                        "skipping ticker"
                    );
                    report.warnings.push(TickerWarning { ticker, error: e });
                }
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }
}
