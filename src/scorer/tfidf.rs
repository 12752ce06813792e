use num::Float;

use crate::scorer::config::ScorerConfig;

/// Per-word TF-IDF formula.
///
/// The scorer walks the documents and hands each word's local term count,
/// its document count and the corpus size to the engine.
/// Returning `None` leaves the word unscored.
pub trait TfIdfEngine<N = f64>
where
    N: Float,
{
    /// # Arguments
    /// * `tf_count` - occurrences of the word in the current document
    /// * `df_count` - number of documents containing the word
    /// * `doc_num` - number of documents in the corpus
    /// * `config` - scorer settings holding the smoothing constants
    fn score(tf_count: u32, df_count: u32, doc_num: u64, config: &ScorerConfig) -> Option<N>;
}

/// `tf / (df + tfidf_smoothing)`
///
/// Very rare words get very high scores with this one,
/// `LogTfIdfEngine` is usually the better ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl<N> TfIdfEngine<N> for DefaultTfIdfEngine
where
    N: Float,
{
    #[inline]
    fn score(tf_count: u32, df_count: u32, _doc_num: u64, config: &ScorerConfig) -> Option<N> {
        let tf: N = num::cast(tf_count)?;
        let df: N = num::cast(df_count)?;
        let smoothing: N = num::cast(config.tfidf_smoothing)?;
        Some(tf / (df + smoothing))
    }
}

/// `tf * (ln(N / df) + log_smoothing)`
///
/// The smoothing keeps a word found in every document (`ln(1) = 0`)
/// above zero.
///
/// `N / df` is a floating point division. Older integer implementations
/// truncate it first (3 / 2 = 1), so words whose document count does not
/// divide `N` score higher here than there.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTfIdfEngine;

impl<N> TfIdfEngine<N> for LogTfIdfEngine
where
    N: Float,
{
    #[inline]
    fn score(tf_count: u32, df_count: u32, doc_num: u64, config: &ScorerConfig) -> Option<N> {
        if doc_num == 0 || df_count == 0 {
            return None;
        }
        let tf: N = num::cast(tf_count)?;
        let df: N = num::cast(df_count)?;
        let n: N = num::cast(doc_num)?;
        let smoothing: N = num::cast(config.log_smoothing)?;
        Some(tf * ((n / df).ln() + smoothing))
    }
}
