use std::fmt;

use indexmap::IndexMap;
use num::Float;
use serde::{Deserialize, Serialize};

/// Score of every word, in the order the words were first scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "N: Serialize", deserialize = "N: Deserialize<'de>"))]
pub struct TermScores<N = f64>
where
    N: Float,
{
    #[serde(with = "indexmap::map::serde_seq")]
    scores: IndexMap<String, N>,
}

impl<N> TermScores<N>
where
    N: Float,
{
    pub fn new() -> Self {
        Self {
            scores: IndexMap::new(),
        }
    }

    /// Insert a score, replacing any earlier one
    #[inline]
    pub fn insert(&mut self, term: &str, score: N) {
        self.scores.insert(term.to_string(), score);
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.scores.get(term).copied()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.scores.contains_key(term)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> {
        self.scores.iter().map(|(term, &score)| (term.as_str(), score))
    }

    /// The `n` highest scored words, highest first
    /// Equal scores keep their first-seen order.
    ///
    /// # Arguments
    /// * `n` - how many words to return, fewer when there are not enough
    ///
    /// # Returns
    /// * `Vec<(String, N)>` - words and their scores
    pub fn top_n(&self, n: usize) -> Vec<(String, N)> {
        let mut ranked: Vec<(&String, N)> = self.scores
            .iter()
            .map(|(term, &score)| (term, score))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
            .into_iter()
            .take(n)
            .map(|(term, score)| (term.clone(), score))
            .collect()
    }

    #[inline]
    pub fn as_map(&self) -> &IndexMap<String, N> {
        &self.scores
    }

    #[inline]
    pub fn into_map(self) -> IndexMap<String, N> {
        self.scores
    }
}

impl<N> Default for TermScores<N>
where
    N: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Display for TermScores<N>
where
    N: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (term, score) in self.iter() {
            writeln!(f, "{}: {}", term, score)?;
        }
        Ok(())
    }
}
