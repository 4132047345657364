//! News records, their scored form, and news queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::series::DateRange;

/// A single news article as delivered by a news feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Publication date.
    pub date: NaiveDate,
    /// Headline text.
    pub headline: String,
    /// Publisher name.
    pub publisher: String,
    /// Ticker the article concerns, when the feed provides one.
    pub ticker: Option<String>,
}

impl NewsRecord {
    /// Create a record without a ticker tag.
    pub fn new(date: NaiveDate, headline: impl Into<String>, publisher: impl Into<String>) -> Self {
        Self {
            date,
            headline: headline.into(),
            publisher: publisher.into(),
            ticker: None,
        }
    }

    /// Tag the record with the ticker it concerns.
    #[must_use]
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }
}

/// Three-way sentiment category derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Polarity below the negative threshold.
    Negative,
    /// Polarity within the neutral band.
    Neutral,
    /// Polarity above the positive threshold.
    Positive,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
        };
        f.write_str(s)
    }
}

/// A news record together with its polarity and category.
///
/// Derived data: produced by a scorer, never written back into the source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// Source record.
    pub record: NewsRecord,
    /// Polarity in `[-1, 1]`.
    pub polarity: f64,
    /// Category derived from `polarity`.
    pub category: Category,
}

/// Number of scored records per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Records categorized as positive.
    pub positive: usize,
    /// Records categorized as neutral.
    pub neutral: usize,
    /// Records categorized as negative.
    pub negative: usize,
}

impl CategoryBreakdown {
    /// Total number of records counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Count for a single category.
    #[must_use]
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Positive => self.positive,
            Category::Neutral => self.neutral,
            Category::Negative => self.negative,
        }
    }
}

/// Filter passed to news providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsQuery {
    /// Restrict to articles about this ticker. Articles without a ticker tag match any ticker.
    pub ticker: Option<String>,
    /// Restrict to articles published within this range.
    pub range: Option<DateRange>,
}

impl NewsQuery {
    /// Query every article the provider has.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Query articles about one ticker.
    pub fn for_ticker(ticker: impl Into<String>) -> Self {
        Self {
            ticker: Some(ticker.into()),
            range: None,
        }
    }

    /// Restrict the query to a date range.
    #[must_use]
    pub const fn within(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Returns true if `record` satisfies this query.
    #[must_use]
    pub fn matches(&self, record: &NewsRecord) -> bool {
        if let Some(range) = &self.range {
            if !range.contains(record.date) {
                return false;
            }
        }
        match (&self.ticker, &record.ticker) {
            (Some(want), Some(have)) => want.eq_ignore_ascii_case(have),
            _ => true,
        }
    }
}
