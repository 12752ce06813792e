use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Counts how many times each word occurs in a text or a whole corpus.
/// Words keep the order in which they were first seen.
///
/// A word is inserted with count 1 the first time it is added and
/// incremented afterwards, so no stored count is ever 0.
///
/// # Examples
/// ```
/// use tfidf_scorer::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("one");
/// term_freq.add_term("two");
/// term_freq.add_term("one");
///
/// assert_eq!(term_freq.term_count("one"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

/// Adding terms
impl TermFrequency {
    /// Create an empty TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add one occurrence of a term
    ///
    /// # Arguments
    /// * `term` - the term to count
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        match self.term_count.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.term_count.insert(term.to_string(), 1);
            }
        }
        self.total_term_count += 1;
        self
    }

    /// Add one occurrence of every term
    ///
    /// # Arguments
    /// * `terms` - the terms to count, duplicates included
    #[inline]
    pub fn add_terms<I, T>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Reading counts
impl TermFrequency {
    /// Occurrence count of a term, 0 when it was never added
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Occurrence count of a term, `None` when it was never added
    #[inline]
    pub fn get(&self, term: &str) -> Option<u32> {
        self.term_count.get(term).copied()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Number of unique terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// Total number of occurrences over all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Iterate `(term, count)` in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Terms in first-seen order
    #[inline]
    pub fn term_set(&self) -> Vec<String> {
        self.term_count.keys().cloned().collect()
    }

    /// Terms sorted by count, highest first
    /// Terms with the same count keep their first-seen order.
    ///
    /// # Returns
    /// * `Vec<(String, u32)>` - terms and their counts
    #[inline]
    pub fn sorted_frequency_vector(&self) -> Vec<(String, u32)> {
        let mut term_list: Vec<(String, u32)> = self.term_count
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();

        term_list.sort_by(|a, b| b.1.cmp(&a.1));
        term_list
    }

    /// Borrow the underlying map
    #[inline]
    pub fn as_map(&self) -> &IndexMap<String, u32> {
        &self.term_count
    }

    #[inline]
    pub fn into_map(self) -> IndexMap<String, u32> {
        self.term_count
    }
}

impl<T> FromIterator<T> for TermFrequency
where
    T: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut term_freq = TermFrequency::new();
        term_freq.add_terms(iter);
        term_freq
    }
}

impl fmt::Display for TermFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (term, count) in self.iter() {
            writeln!(f, "{}: {}", term, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_term_inserts_one_then_increments() {
        let mut tf = TermFrequency::new();
        tf.add_term("a");
        assert_eq!(tf.get("a"), Some(1));
        tf.add_term("a").add_term("b");
        assert_eq!(tf.get("a"), Some(2));
        assert_eq!(tf.get("b"), Some(1));
        assert_eq!(tf.get("c"), None);
        assert_eq!(tf.term_count("c"), 0);
        assert_eq!(tf.term_num(), 2);
        assert_eq!(tf.term_sum(), 3);
    }

    #[test]
    fn keeps_first_seen_order() {
        let tf: TermFrequency = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(tf.term_set(), vec!["b", "a", "c"]);
    }

    #[test]
    fn sorted_frequency_vector_is_descending_and_stable() {
        let tf: TermFrequency = ["x", "y", "y", "z", "z", "w"].into_iter().collect();
        let sorted = tf.sorted_frequency_vector();
        assert_eq!(
            sorted,
            vec![
                ("y".to_string(), 2),
                ("z".to_string(), 2),
                ("x".to_string(), 1),
                ("w".to_string(), 1),
            ]
        );
    }

    #[test]
    fn display_lists_counts() {
        let tf: TermFrequency = ["one", "two", "one"].into_iter().collect();
        assert_eq!(tf.to_string(), "one: 2\ntwo: 1\n");
    }
}
