/// This crate finds the most important words of a document collection
/// with TF, DF, IDF and TF-IDF scores.
pub mod scorer;

/// TF-IDF Scorer
/// The top-level struct of this crate.
/// It owns an ordered, immutable collection of documents and answers
/// frequency and importance queries over it.
///
/// - `tf()` / `tf_of(doc)`: term frequency over the corpus or one document
/// - `df()` / `df_of(docs)`: document frequency
/// - `idf()`: reciprocal document frequency
/// - `tfidf()` / `tfidf_tweak1()`: importance of each word
///
/// Words are maximal runs of ASCII letters, case-sensitive.
/// Every query builds a fresh result, nothing is cached.
///
/// # Serialization
/// Supported.
/// Deserialization validates the settings through `ScorerData`.
pub use scorer::TfIdfScorer;

/// Scorer settings
/// Local term counting mode and the smoothing constants of each formula.
/// The defaults reproduce the classic scores.
pub use scorer::config::{LocalTf, ScorerConfig};

/// Error returned when a scorer is built with invalid settings
pub use scorer::error::ScorerError;

/// Term Frequency structure
/// Occurrence count of every word, in first-seen order.
pub use scorer::token::TermFrequency;

/// Document Frequency structure
/// Number of documents each word appears in, plus the document count.
pub use scorer::corpus::DocumentFrequency;

/// Scores per word, returned by `idf` and the TF-IDF queries
pub use scorer::score::TermScores;

/// TF IDF Calculation Engine Trait
/// Defines the per-word TF-IDF formula so different formulas can run over
/// the same traversal with `TfIdfScorer::tfidf_with`.
///
/// - `DefaultTfIdfEngine`: `tf / (df + 0.01)`
/// - `LogTfIdfEngine`: `tf * (ln(N / df) + 0.01)`
///
/// Both work with any `num::Float` score type (`f32`, `f64`).
pub use scorer::tfidf::{DefaultTfIdfEngine, LogTfIdfEngine, TfIdfEngine};

/// Serializable scorer data
pub use scorer::serde::ScorerData;
