pub mod config;
pub mod corpus;
pub mod error;
pub mod score;
pub mod serde;
pub mod tfidf;
pub mod token;
pub mod tokenizer;

use ::serde::{Deserialize, Serialize};
use num::Float;
use tracing::{debug, trace};

use crate::scorer::{
    config::{LocalTf, ScorerConfig},
    corpus::DocumentFrequency,
    error::ScorerError,
    score::TermScores,
    serde::ScorerData,
    tfidf::{DefaultTfIdfEngine, LogTfIdfEngine, TfIdfEngine},
    token::TermFrequency,
    tokenizer::{letter_runs, space_split},
};

/// Scores the words of a fixed collection of documents.
///
/// The documents are owned by the scorer and never change after
/// construction. Every query walks them again and returns a fresh map,
/// so a shared `&TfIdfScorer` can be queried from any number of threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScorerData")]
pub struct TfIdfScorer {
    documents: Vec<String>,
    config: ScorerConfig,
}

impl TfIdfScorer {
    /// Create a scorer with the default settings
    ///
    /// # Arguments
    /// * `documents` - the corpus, in order; duplicates are kept
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            documents: documents.into_iter().map(Into::into).collect(),
            config: ScorerConfig::default(),
        }
    }

    /// Create a scorer with custom settings
    ///
    /// # Errors
    /// `ScorerError::InvalidConfig` when a constant in `config` is negative or not finite.
    pub fn with_config<I, S>(documents: I, config: ScorerConfig) -> Result<Self, ScorerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        Ok(Self {
            documents: documents.into_iter().map(Into::into).collect(),
            config,
        })
    }

    /// The corpus, in construction order
    #[inline]
    pub fn get_documents(&self) -> &[String] {
        &self.documents
    }

    #[inline]
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }
}

/// TF / DF
impl TfIdfScorer {
    /// Occurrences of every word over the whole corpus
    pub fn tf(&self) -> TermFrequency {
        let mut tf = TermFrequency::new();
        for document in &self.documents {
            tf.add_terms(letter_runs(document));
        }
        trace!(doc_num = self.documents.len(), term_num = tf.term_num(), "tf");
        tf
    }

    /// Occurrences of every word in a single document
    ///
    /// The document is split on `' '` only, so punctuation stays part of
    /// the word: `"one, one"` counts `"one,"` and `"one"` separately.
    /// Repeated, leading and trailing spaces never produce an empty word,
    /// unlike a plain `split(' ')` which would count `""`.
    pub fn tf_of(&self, document: &str) -> TermFrequency {
        space_split(document).collect()
    }

    /// Number of corpus documents each word appears in
    pub fn df(&self) -> DocumentFrequency {
        self.df_of(self.documents.as_slice())
    }

    /// Number of the given documents each word appears in
    pub fn df_of<S>(&self, documents: &[S]) -> DocumentFrequency
    where
        S: AsRef<str>,
    {
        let df = DocumentFrequency::from_documents(documents);
        trace!(doc_num = df.get_doc_num(), vocab_size = df.vocab_size(), "df");
        df
    }

    fn local_tf(&self, document: &str) -> TermFrequency {
        match self.config.local_tf {
            LocalTf::SpaceSplit => self.tf_of(document),
            LocalTf::LetterRuns => letter_runs(document).collect(),
        }
    }
}

/// IDF / TF-IDF
impl TfIdfScorer {
    /// `1 / (df + idf_epsilon)` for every word of the corpus
    pub fn idf(&self) -> TermScores<f64> {
        let df = self.df();
        let mut idf = TermScores::new();
        for (term, doc_count) in df.iter() {
            idf.insert(term, DocumentFrequency::idf_calc(doc_count, self.config.idf_epsilon));
        }
        debug!(doc_num = df.get_doc_num(), term_num = idf.len(), "idf computed");
        idf
    }

    /// `tf / (df + 0.01)` per word, using the first document the word appears in
    pub fn tfidf(&self) -> TermScores<f64> {
        self.tfidf_with::<DefaultTfIdfEngine, f64>()
    }

    /// `tf * (ln(N / df) + 0.01)` per word, using the first document the word appears in
    pub fn tfidf_tweak1(&self) -> TermScores<f64> {
        self.tfidf_with::<LogTfIdfEngine, f64>()
    }

    /// Score every word with the given engine
    ///
    /// Documents are visited in order and a word is scored from the first
    /// document that yields a score for it; later documents never replace it.
    /// The local term count comes from `ScorerConfig::local_tf`, the
    /// document count from the letter-run `df`.
    pub fn tfidf_with<E, N>(&self) -> TermScores<N>
    where
        E: TfIdfEngine<N>,
        N: Float,
    {
        let mut scores = TermScores::new();
        let doc_num = self.documents.len() as u64;
        if doc_num == 0 {
            debug!("tfidf on empty corpus");
            return scores;
        }
        let df = self.df();
        for (doc_idx, document) in self.documents.iter().enumerate() {
            let local_tf = self.local_tf(document);
            for term in letter_runs(document) {
                if scores.contains_term(term) {
                    continue;
                }
                let Some(df_count) = df.get_term_count(term) else {
                    debug!(term, doc_idx, "no document frequency, skipped");
                    continue;
                };
                let Some(tf_count) = local_tf.get(term) else {
                    debug!(term, doc_idx, "no local term count, skipped");
                    continue;
                };
                match E::score(tf_count, df_count, doc_num, &self.config) {
                    Some(score) => scores.insert(term, score),
                    None => debug!(term, doc_idx, "engine gave no score, skipped"),
                }
            }
        }
        debug!(doc_num, term_num = scores.len(), "tfidf computed");
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer_of(docs: &[&str]) -> TfIdfScorer {
        TfIdfScorer::new(docs.iter().copied())
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn scorer_is_shareable_across_threads() {
        assert_send_sync::<TfIdfScorer>();
        assert_send_sync::<TermScores<f64>>();

        let scorer = scorer_of(&["one two", "two three"]);
        let expected = scorer.tfidf();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| scorer.tfidf())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn tf_of_never_counts_empty_words() {
        let tf = scorer_of(&[]).tf_of("  a  b ");
        assert_eq!(tf.get(""), None);
        assert_eq!(tf.term_sum(), 2);
    }

    #[test]
    fn keeps_documents_in_order() {
        let scorer = scorer_of(&["one two", "three four", "one two"]);
        assert_eq!(scorer.get_documents(), &["one two", "three four", "one two"]);
        assert_eq!(scorer.doc_num(), 3);
    }

    #[test]
    fn tf_counts_whole_corpus() {
        let scorer = scorer_of(&["one one two", "three three three four five five"]);
        let tf = scorer.tf();
        assert_eq!(tf.get("one"), Some(2));
        assert_eq!(tf.get("two"), Some(1));
        assert_eq!(tf.get("three"), Some(3));
        assert_eq!(tf.get("four"), Some(1));
        assert_eq!(tf.get("five"), Some(2));
        assert_eq!(tf.term_sum(), 9);
    }

    #[test]
    fn tf_of_splits_on_space_only() {
        let scorer = scorer_of(&[]);
        let tf = scorer.tf_of("one, one two2 one");
        assert_eq!(tf.get("one,"), Some(1));
        assert_eq!(tf.get("one"), Some(2));
        assert_eq!(tf.get("two2"), Some(1));
        assert_eq!(tf.get("two"), None);
    }

    #[test]
    fn df_of_other_documents() {
        let scorer = scorer_of(&["unrelated"]);
        let df = scorer.df_of(&["one two one", "one four five two"]);
        assert_eq!(df.get_term_count("one"), Some(2));
        assert_eq!(df.get_term_count("two"), Some(2));
        assert_eq!(df.get_term_count("four"), Some(1));
        assert_eq!(df.get_term_count("unrelated"), None);
    }

    #[test]
    fn idf_is_reciprocal_document_count() {
        let scorer = scorer_of(&["one two one", "one four five", "one six seven two"]);
        let idf = scorer.idf();
        assert!((idf.get("one").unwrap() - 0.3333333333333333).abs() < 1e-15);
        assert_eq!(idf.get("two"), Some(0.5));
        assert_eq!(idf.get("four"), Some(1.0));
        assert_eq!(idf.len(), 6);
    }

    #[test]
    fn tfidf_first_document_wins() {
        // "one" is scored from the first document (tf 2), not the second (tf 3)
        let scorer = scorer_of(&["one one two", "one one one"]);
        let tfidf = scorer.tfidf();
        assert!((tfidf.get("one").unwrap() - 2.0 / 2.01).abs() < 1e-12);
        assert!((tfidf.get("two").unwrap() - 1.0 / 1.01).abs() < 1e-12);
    }

    #[test]
    fn tfidf_skips_words_glued_to_punctuation() {
        let scorer = scorer_of(&["end. start", "end here"]);
        let tfidf = scorer.tfidf();
        // "end" has no space-split count in the first document but does in the second
        assert!((tfidf.get("end").unwrap() - 1.0 / 2.01).abs() < 1e-12);
        assert!((tfidf.get("start").unwrap() - 1.0 / 1.01).abs() < 1e-12);

        let scorer = scorer_of(&["only, once"]);
        assert_eq!(scorer.tfidf().get("only"), None);
        assert!(scorer.tfidf().get("once").is_some());
    }

    #[test]
    fn tfidf_with_letter_run_local_tf() {
        let config = ScorerConfig::new().local_tf(LocalTf::LetterRuns);
        let scorer = TfIdfScorer::with_config(["end. end start"], config).unwrap();
        let tfidf = scorer.tfidf();
        assert!((tfidf.get("end").unwrap() - 2.0 / 1.01).abs() < 1e-12);
    }

    #[test]
    fn tfidf_tweak1_scores() {
        let scorer = scorer_of(&["one two one", "one four five", "one six seven two"]);
        let scores = scorer.tfidf_tweak1();
        // in every document: only the smoothing remains
        assert!((scores.get("one").unwrap() - 2.0 * 0.01).abs() < 1e-12);
        assert!((scores.get("two").unwrap() - (1.5f64.ln() + 0.01)).abs() < 1e-12);
        assert!((scores.get("four").unwrap() - (3.0f64.ln() + 0.01)).abs() < 1e-12);
        let top = scores.top_n(1);
        assert_eq!(top[0].0, "four");
    }

    #[test]
    fn tfidf_with_f32() {
        let scorer = scorer_of(&["a b", "a"]);
        let scores: TermScores<f32> = scorer.tfidf_with::<DefaultTfIdfEngine, f32>();
        assert!((scores.get("b").unwrap() - 1.0 / 1.01).abs() < 1e-6);
    }

    #[test]
    fn empty_corpus_gives_empty_maps() {
        let scorer = TfIdfScorer::new(Vec::<String>::new());
        assert!(scorer.tf().is_empty());
        assert!(scorer.df().is_empty());
        assert!(scorer.idf().is_empty());
        assert!(scorer.tfidf().is_empty());
        assert!(scorer.tfidf_tweak1().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ScorerConfig::new().log_smoothing(-1.0);
        let err = TfIdfScorer::with_config(["a"], config).unwrap_err();
        assert!(matches!(err, ScorerError::InvalidConfig { field: "log_smoothing", .. }));
    }
}
