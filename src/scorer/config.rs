use serde::{Deserialize, Serialize};

use crate::scorer::error::ScorerError;

/// How the per-document term counts used by TF-IDF are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalTf {
    /// Split the raw document on `' '`.
    /// A word glued to punctuation (`"end."`) then has no count of its own
    /// and is left unscored for that document.
    #[default]
    SpaceSplit,
    /// Count the same letter runs the document frequency is built from.
    LetterRuns,
}

/// Scorer settings
///
/// The defaults give the classic results: reciprocal IDF with `1e-100`
/// added to the document count, TF-IDF with `0.01` added to the document
/// count, and log TF-IDF with `0.01` added to the logarithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// local term counting for `tfidf` and `tfidf_tweak1`
    pub local_tf: LocalTf,
    /// added to the document count in `idf`
    pub idf_epsilon: f64,
    /// added to the document count in `tfidf`
    pub tfidf_smoothing: f64,
    /// added to `ln(N / df)` in `tfidf_tweak1`
    pub log_smoothing: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            local_tf: LocalTf::SpaceSplit,
            idf_epsilon: 1e-100,
            tfidf_smoothing: 0.01,
            log_smoothing: 0.01,
        }
    }
}

impl ScorerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn local_tf(mut self, local_tf: LocalTf) -> Self {
        self.local_tf = local_tf;
        self
    }

    pub fn idf_epsilon(mut self, idf_epsilon: f64) -> Self {
        self.idf_epsilon = idf_epsilon;
        self
    }

    pub fn tfidf_smoothing(mut self, tfidf_smoothing: f64) -> Self {
        self.tfidf_smoothing = tfidf_smoothing;
        self
    }

    pub fn log_smoothing(mut self, log_smoothing: f64) -> Self {
        self.log_smoothing = log_smoothing;
        self
    }

    /// Check that every constant is finite and not negative
    pub fn validate(&self) -> Result<(), ScorerError> {
        check_constant("idf_epsilon", self.idf_epsilon)?;
        check_constant("tfidf_smoothing", self.tfidf_smoothing)?;
        check_constant("log_smoothing", self.log_smoothing)?;
        Ok(())
    }
}

fn check_constant(field: &'static str, value: f64) -> Result<(), ScorerError> {
    if !value.is_finite() {
        return Err(ScorerError::InvalidConfig {
            field,
            reason: format!("must be finite, got {value}"),
        });
    }
    if value < 0.0 {
        return Err(ScorerError::InvalidConfig {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}
