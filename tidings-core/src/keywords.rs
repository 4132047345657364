use std::collections::{HashMap, HashSet};

use crate::{KeywordCount, NewsRecord, TidingsError};

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Minimum token length kept by [`Stopwords::preprocess`].
const MIN_TOKEN_CHARS: usize = 2;

/// Caller-owned set of words ignored by keyword extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Built-in English stopword list.
    #[must_use]
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// Build from any word list; words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add one word.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Returns true if `word` (case-insensitive) is a stopword.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stopwords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Lowercase `text`, split on anything that is not alphanumeric, and drop
    /// stopwords and single-character tokens.
    #[must_use]
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS && !self.words.contains(*t))
            .map(str::to_string)
            .collect()
    }
}

/// Most frequent n-grams across all headlines.
///
/// N-grams never span two headlines. Results sort by count descending, then
/// n-gram ascending.
///
/// # Errors
/// Returns `InvalidArgument` when `ngram_range` contains zero or its minimum
/// exceeds its maximum.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tidings::keywords",
        skip(records, stopwords),
        fields(records = records.len()),
    )
)]
pub fn top_keywords(
    records: &[NewsRecord],
    stopwords: &Stopwords,
    ngram_range: (usize, usize),
    top_n: usize,
) -> Result<Vec<KeywordCount>, TidingsError> {
    let (min, max) = ngram_range;
    if min == 0 || min > max {
        return Err(TidingsError::invalid_arg(format!(
            "invalid n-gram range ({min}, {max})"
        )));
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for r in records {
        let tokens = stopwords.preprocess(&r.headline);
        for n in min..=max.min(tokens.len()) {
            for gram in tokens.windows(n) {
                *counts.entry(gram.join(" ")).or_default() += 1;
            }
        }
    }

    let mut out: Vec<KeywordCount> = counts
        .into_iter()
        .map(|(ngram, count)| KeywordCount { ngram, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.ngram.cmp(&b.ngram)));
    out.truncate(top_n);
    Ok(out)
}
