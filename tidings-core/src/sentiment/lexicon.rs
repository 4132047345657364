use std::collections::{HashMap, HashSet};

use super::PolarityScorer;
use crate::TidingsError;

/// Multiplier applied to a word's score when it follows a negator.
const NEGATION_FACTOR: f64 = -0.5;

const FINANCIAL_WORDS: &[(&str, f64)] = &[
    ("excellent", 1.0),
    ("best", 1.0),
    ("great", 0.8),
    ("good", 0.7),
    ("bullish", 0.7),
    ("breakthrough", 0.6),
    ("rally", 0.6),
    ("soar", 0.6),
    ("soars", 0.6),
    ("success", 0.6),
    ("successful", 0.6),
    ("surge", 0.6),
    ("surges", 0.6),
    ("beat", 0.5),
    ("beats", 0.5),
    ("outperform", 0.5),
    ("positive", 0.5),
    ("strong", 0.5),
    ("upgrade", 0.5),
    ("upgraded", 0.5),
    ("win", 0.5),
    ("wins", 0.5),
    ("boost", 0.4),
    ("gain", 0.4),
    ("gains", 0.4),
    ("growth", 0.4),
    ("profit", 0.4),
    ("profits", 0.4),
    ("higher", 0.3),
    ("rise", 0.3),
    ("rises", 0.3),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("crash", -0.8),
    ("fraud", -0.8),
    ("bad", -0.7),
    ("bearish", -0.7),
    ("plunge", -0.7),
    ("plunges", -0.7),
    ("slump", -0.6),
    ("backlash", -0.5),
    ("downgrade", -0.5),
    ("downgraded", -0.5),
    ("lawsuit", -0.5),
    ("loss", -0.5),
    ("losses", -0.5),
    ("miss", -0.5),
    ("misses", -0.5),
    ("negative", -0.5),
    ("weak", -0.5),
    ("concern", -0.4),
    ("concerns", -0.4),
    ("decline", -0.4),
    ("declines", -0.4),
    ("drop", -0.4),
    ("drops", -0.4),
    ("fall", -0.4),
    ("falls", -0.4),
    ("worry", -0.4),
    ("worries", -0.4),
    ("cut", -0.3),
    ("cuts", -0.3),
    ("lower", -0.3),
    ("risk", -0.3),
    ("scrutiny", -0.3),
];

const NEGATORS: &[&str] = &["not", "no", "never", "without", "nor"];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("very", 1.3),
    ("highly", 1.3),
    ("really", 1.2),
    ("somewhat", 0.7),
    ("slightly", 0.6),
];

/// Word polarity table with negators and intensifiers.
///
/// Built once by the caller and handed to a [`LexiconScorer`]; nothing is
/// downloaded or initialized behind the caller's back.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    negators: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

impl Lexicon {
    /// A lexicon with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in lexicon tuned for financial headlines.
    #[must_use]
    pub fn financial() -> Self {
        let mut lex = Self::empty();
        for &(w, s) in FINANCIAL_WORDS {
            lex = lex.with_word(w, s);
        }
        for &n in NEGATORS {
            lex = lex.with_negator(n);
        }
        for &(w, m) in INTENSIFIERS {
            lex = lex.with_intensifier(w, m);
        }
        lex
    }

    /// Add or replace a word; the score is clamped to `[-1, 1]`.
    #[must_use]
    pub fn with_word(mut self, word: &str, score: f64) -> Self {
        self.words
            .insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
        self
    }

    /// Add a negator ("not", "never", ...).
    #[must_use]
    pub fn with_negator(mut self, word: &str) -> Self {
        self.negators.insert(word.to_lowercase());
        self
    }

    /// Add an intensifier with its multiplier ("very" => 1.3).
    #[must_use]
    pub fn with_intensifier(mut self, word: &str, multiplier: f64) -> Self {
        self.intensifiers.insert(word.to_lowercase(), multiplier);
        self
    }

    /// Score of a single word, if present.
    #[must_use]
    pub fn score_of(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Number of scored words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the lexicon has no scored words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token) || token.ends_with("n't")
    }
}

/// [`PolarityScorer`] averaging lexicon scores over the words of a text.
///
/// A negator flips and halves the next scored word; intensifiers scale it.
/// Text with no scored words has polarity `0.0`.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    /// Score with a caller-built lexicon.
    #[must_use]
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Borrow the lexicon.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(Lexicon::financial())
    }
}

impl PolarityScorer for LexiconScorer {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> Result<f64, TidingsError> {
        let mut total = 0.0;
        let mut scored = 0usize;
        let mut negated = false;
        let mut multiplier = 1.0;

        let tokens = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        for token in tokens {
            if self.lexicon.is_negator(&token) {
                negated = true;
                continue;
            }
            if let Some(m) = self.lexicon.intensifiers.get(&token) {
                multiplier *= m;
                continue;
            }
            if let Some(&s) = self.lexicon.words.get(&token) {
                let mut v = s * multiplier;
                if negated {
                    v *= NEGATION_FACTOR;
                }
                total += v.clamp(-1.0, 1.0);
                scored += 1;
            }
            negated = false;
            multiplier = 1.0;
        }

        if scored == 0 {
            return Ok(0.0);
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = total / scored as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}
