use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::scorer::tokenizer::letter_runs;

/// keep document count and per-term document counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFrequency {
    /// number of documents added
    doc_num: u64,
    /// number of documents each term appears in
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<String, u32>,
}

impl DocumentFrequency {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Build from documents, tokenizing each one into letter runs
    pub fn from_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut df = Self::new();
        for document in documents {
            df.add_doc(document.as_ref());
        }
        df
    }

    /// Tokenize one document and count each of its distinct terms once
    pub fn add_doc(&mut self, document: &str) {
        self.add_set(letter_runs(document));
    }

    /// Add one document given as its terms
    /// A term repeated within the document is counted once.
    pub fn add_set<I, T>(&mut self, terms: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str> + Hash + Eq,
    {
        let terms: IndexSet<T> = terms.into_iter().collect();
        self.doc_num += 1;
        for term in &terms {
            let term = term.as_ref();
            match self.term_counts.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    self.term_counts.insert(term.to_string(), 1);
                }
            }
        }
    }

    /// Get the number of documents
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing the term
    #[inline]
    pub fn get_term_count(&self, term: &str) -> Option<u32> {
        self.term_counts.get(term).copied()
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_counts.is_empty()
    }

    /// Iterate `(term, document count)` in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_counts.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// IDF of a term
    ///
    /// # Arguments
    /// * `doc_count` - number of documents containing the term
    /// * `epsilon` - added to the count so it is never divided by zero
    ///
    /// # Returns
    /// * `f64` - `1 / (doc_count + epsilon)`
    #[inline]
    pub fn idf_calc(doc_count: u32, epsilon: f64) -> f64 {
        1.0 / (doc_count as f64 + epsilon)
    }
}
