use tidings_core::{HeadlineReport, NewsQuery, TidingsError};

use crate::Tidings;
use crate::analysis;

impl Tidings {
    /// Fetch the articles matching `query` and summarize their headlines.
    ///
    /// The report covers length statistics and outliers, publisher counts,
    /// sentiment categories, the busiest publication buckets and the top
    /// keywords, all with the configured headline settings.
    ///
    /// # Errors
    /// - `DataSource` when the news provider fails or times out.
    /// - `EmptyInput` when the query matches no article.
    /// - See [`analysis::headline_report`] for the remaining cases.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "tidings::headlines::headline_report", skip(self))
    )]
    pub async fn headline_report(&self, query: &NewsQuery) -> Result<HeadlineReport, TidingsError> {
        let articles = Self::provider_call_with_timeout(
            self.news.name(),
            "news",
            self.cfg.provider_timeout,
            self.news.news(query),
        )
        .await?;
        analysis::headline_report(
            &articles,
            &self.scorer,
            &self.stopwords,
            &self.cfg.headlines,
            self.cfg.analysis.outlier_threshold,
        )
    }
}
