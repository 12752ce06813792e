/// Iterator over the maximal ASCII letter runs (`[a-zA-Z]+`) of a text.
///
/// Every other character, digits and `_` included, only separates words.
/// Case is preserved, so `One` and `one` are different words.
///
/// # Examples
/// ```
/// use tfidf_scorer::scorer::tokenizer::letter_runs;
/// let words: Vec<&str> = letter_runs("foo2 bar-baz").collect();
/// assert_eq!(words, vec!["foo", "bar", "baz"]);
/// ```
#[derive(Debug, Clone)]
pub struct LetterRuns<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for LetterRuns<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        // ASCII letters never occur inside a multi-byte UTF-8 sequence,
        // so byte offsets found here are always char boundaries.
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        Some(&self.text[start..self.pos])
    }
}

/// Split a text into its letter-run words.
#[inline]
pub fn letter_runs(text: &str) -> LetterRuns<'_> {
    LetterRuns { text, pos: 0 }
}

/// Split a text on the literal space character.
///
/// Punctuation stays attached to the word (`"end."` is one word), and the
/// empty pieces left by repeated, leading or trailing spaces are dropped.
#[inline]
pub fn space_split(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}
