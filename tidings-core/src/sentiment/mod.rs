//! Polarity scoring and three-way sentiment categories.
//!
//! Polarity itself comes from an injected [`PolarityScorer`]; this module
//! validates inputs, bounds the result and applies the category thresholds.

mod lexicon;

use std::sync::Arc;

use crate::TidingsError;
use tidings_types::{Category, CategoryBreakdown, NewsRecord, ScoredRecord};

pub use lexicon::{Lexicon, LexiconScorer};

/// Polarity strictly above this value is `Positive`.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity strictly below this value is `Negative`.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// External NLP capability mapping text to a polarity.
///
/// Implementations are treated as black boxes. Any resource they need
/// (lexicons, models, corpora) is loaded by the caller before construction.
pub trait PolarityScorer: Send + Sync {
    /// Short name used in error messages.
    fn name(&self) -> &'static str;

    /// Polarity of `text`, nominally in `[-1, 1]`.
    ///
    /// # Errors
    /// Implementations may fail with `InvalidInput` for text they cannot score.
    fn polarity(&self, text: &str) -> Result<f64, TidingsError>;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn polarity(&self, text: &str) -> Result<f64, TidingsError> {
        (**self).polarity(text)
    }
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn polarity(&self, text: &str) -> Result<f64, TidingsError> {
        (**self).polarity(text)
    }
}

/// Map a polarity to its category using the fixed thresholds.
///
/// Monotonic: a larger polarity never yields a less positive category.
/// `NaN` falls into the neutral band.
#[must_use]
pub fn categorize(polarity: f64) -> Category {
    if polarity > POSITIVE_THRESHOLD {
        Category::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        Category::Negative
    } else {
        Category::Neutral
    }
}

/// Count scored records per category.
#[must_use]
pub fn category_breakdown(scored: &[ScoredRecord]) -> CategoryBreakdown {
    let mut out = CategoryBreakdown::default();
    for s in scored {
        match s.category {
            Category::Positive => out.positive += 1,
            Category::Neutral => out.neutral += 1,
            Category::Negative => out.negative += 1,
        }
    }
    out
}

/// Validating wrapper around a [`PolarityScorer`].
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer<S> {
    inner: S,
}

impl<S: PolarityScorer> SentimentScorer<S> {
    /// Wrap a polarity capability.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped capability.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Polarity of `text`, guaranteed to lie in `[-1, 1]`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `text` is empty or whitespace only, or if the
    /// wrapped scorer returns a non-finite value. Errors from the wrapped scorer
    /// are passed through.
    pub fn score(&self, text: &str) -> Result<f64, TidingsError> {
        if text.trim().is_empty() {
            return Err(TidingsError::invalid_input("cannot score empty text"));
        }
        let p = self.inner.polarity(text)?;
        if !p.is_finite() {
            return Err(TidingsError::invalid_input(format!(
                "{} returned non-finite polarity {p}",
                self.inner.name()
            )));
        }
        Ok(p.clamp(-1.0, 1.0))
    }

    /// Score raw bytes, which must be valid UTF-8.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `bytes` is not UTF-8, plus everything [`Self::score`] returns.
    pub fn score_bytes(&self, bytes: &[u8]) -> Result<f64, TidingsError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| TidingsError::invalid_input(format!("text is not valid UTF-8: {e}")))?;
        self.score(text)
    }

    /// Score a record's headline.
    ///
    /// # Errors
    /// See [`Self::score`]; the message names the offending record.
    pub fn score_record(&self, record: &NewsRecord) -> Result<ScoredRecord, TidingsError> {
        let polarity = self.score(&record.headline).map_err(|e| match e {
            TidingsError::InvalidInput(msg) => TidingsError::InvalidInput(format!(
                "{msg} (headline from {} on {})",
                record.publisher, record.date
            )),
            other => other,
        })?;
        Ok(ScoredRecord {
            record: record.clone(),
            polarity,
            category: categorize(polarity),
        })
    }

    /// Score every record; the first failure aborts.
    ///
    /// # Errors
    /// See [`Self::score_record`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tidings::sentiment",
            skip(self, records),
            fields(scorer = self.inner.name(), records = records.len()),
        )
    )]
    pub fn score_records(&self, records: &[NewsRecord]) -> Result<Vec<ScoredRecord>, TidingsError> {
        records.iter().map(|r| self.score_record(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl PolarityScorer for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn polarity(&self, _text: &str) -> Result<f64, TidingsError> {
            Ok(self.0)
        }
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(categorize(0.1), Category::Neutral);
        assert_eq!(categorize(-0.1), Category::Neutral);
        assert_eq!(categorize(0.100_001), Category::Positive);
        assert_eq!(categorize(-0.100_001), Category::Negative);
        assert_eq!(categorize(f64::NAN), Category::Neutral);
    }

    #[test]
    fn out_of_range_polarity_is_clamped() {
        let s = SentimentScorer::new(Fixed(3.5));
        assert_eq!(s.score("anything").unwrap(), 1.0);
        let s = SentimentScorer::new(Fixed(-7.0));
        assert_eq!(s.score("anything").unwrap(), -1.0);
    }

    #[test]
    fn non_finite_polarity_is_rejected() {
        let s = SentimentScorer::new(Fixed(f64::NAN));
        assert!(matches!(s.score("x"), Err(TidingsError::InvalidInput(_))));
    }

    #[test]
    fn blank_and_non_utf8_text_are_rejected() {
        let s = SentimentScorer::new(Fixed(0.0));
        assert!(matches!(s.score(""), Err(TidingsError::InvalidInput(_))));
        assert!(matches!(s.score("  \t"), Err(TidingsError::InvalidInput(_))));
        assert!(matches!(
            s.score_bytes(&[0xff, 0xfe, 0x00]),
            Err(TidingsError::InvalidInput(_))
        ));
    }
}
