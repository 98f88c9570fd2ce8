//! Term extraction: word-splitting plus stop-word filtering.
//!
//! The stop-word set is carried by the [`Analyzer`] value rather than a
//! module-level constant, so a build can swap it without touching global
//! state. [`Analyzer::default`] carries the standard set.

use regex::Regex;
use std::collections::HashSet;

/// Stop words excluded from indexing by default.
pub const DEFAULT_STOP_WORDS: [&str; 15] = [
    "a", "and", "around", "every", "for", "from", "in", "is", "it", "not", "on", "one", "the",
    "to", "under",
];

/// Splits text into index terms.
///
/// Terms are maximal runs of word characters (letters, digits, underscore);
/// everything else is a separator. Stop words never become terms.
#[derive(Debug, Clone)]
pub struct Analyzer {
    stop_words: HashSet<String>,
    word_break: Regex,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()))
    }
}

impl Analyzer {
    /// Create an analyzer with an explicit stop-word set.
    pub fn with_stop_words<I: IntoIterator<Item = String>>(stop_words: I) -> Self {
        Self {
            stop_words: stop_words.into_iter().collect(),
            word_break: Regex::new(r"\W+").unwrap(),
        }
    }

    /// Whether `word` is filtered out of the index.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Extract index terms from (already lowercased) text, in document order.
    ///
    /// Repeated occurrences are kept; callers wanting set semantics collect
    /// into a set.
    pub fn terms<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.word_break
            .split(text)
            .map(str::trim)
            .filter(move |t| !t.is_empty() && !self.is_stop_word(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_non_word_runs() {
        let a = Analyzer::with_stop_words(std::iter::empty::<String>());
        let terms: Vec<&str> = a.terms("cat, dog!! bird...fish").collect();
        assert_eq!(terms, vec!["cat", "dog", "bird", "fish"]);
    }

    #[test]
    fn digits_and_underscore_are_word_characters() {
        let a = Analyzer::with_stop_words(std::iter::empty::<String>());
        let terms: Vec<&str> = a.terms("foo_bar 42 v2-final").collect();
        assert_eq!(terms, vec!["foo_bar", "42", "v2", "final"]);
    }

    #[test]
    fn default_stop_words_are_dropped() {
        let a = Analyzer::default();
        let terms: Vec<&str> = a.terms("the cat sat on one mat").collect();
        assert_eq!(terms, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn stop_word_set_is_swappable() {
        let a = Analyzer::with_stop_words(["cat".to_string()]);
        let terms: Vec<&str> = a.terms("the cat sat").collect();
        assert_eq!(terms, vec!["the", "sat"]);
    }

    #[test]
    fn punctuation_only_text_yields_no_terms() {
        let a = Analyzer::default();
        assert_eq!(a.terms("... --- !!!").count(), 0);
    }
}
