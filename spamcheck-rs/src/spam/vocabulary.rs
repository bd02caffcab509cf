//! Vocabulary store
//!
//! Keeps one [`WordStat`] per distinct word in first-seen order, with a hash
//! index for lookups. Storage is reserved up front and doubled when full;
//! growth is fallible and reported instead of aborting.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::types::{Label, WordStat};
use crate::config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_WORD_LENGTH};
use crate::error::Result;

/// Additive smoothing constant
pub const LAPLACE_ALPHA: f64 = 1.0;

/// Cut `word` to at most `max_len` bytes without splitting a character.
///
/// Distinct words sharing the same prefix map to the same key.
pub fn truncate_word(word: &str, max_len: usize) -> &str {
    if word.len() <= max_len {
        return word;
    }

    let mut end = max_len;
    while !word.is_char_boundary(end) {
        end -= 1;
    }
    &word[..end]
}

/// Insertion-ordered word statistics
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<WordStat>,
    index: HashMap<String, usize>,
    capacity: usize,
    max_word_length: usize,
}

impl Vocabulary {
    /// Create an empty vocabulary with default sizing
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_WORD_LENGTH)
    }

    /// Create an empty vocabulary reserving `initial_capacity` entries
    pub fn with_capacity(initial_capacity: usize, max_word_length: usize) -> Result<Self> {
        let capacity = initial_capacity.max(1);

        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity)?;
        let mut index = HashMap::new();
        index.try_reserve(capacity)?;

        Ok(Self {
            entries,
            index,
            capacity,
            max_word_length: max_word_length.max(1),
        })
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no words are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reserved slots; doubles each time the store fills up
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Key length bound in bytes
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &WordStat> {
        self.entries.iter()
    }

    /// Look up a word (exact, case-sensitive, after truncation)
    pub fn find(&self, word: &str) -> Option<&WordStat> {
        let key = truncate_word(word, self.max_word_length);
        self.index.get(key).and_then(|&i| self.entries.get(i))
    }

    /// Number of distinct keys in `words` that are not stored yet
    pub fn count_new_words<'a, I>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .map(|word| truncate_word(word, self.max_word_length))
            .filter(|key| !self.index.contains_key(*key))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Make room for `additional` more words.
    ///
    /// Capacity doubles until it fits. On failure nothing changes.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self.entries.len().saturating_add(additional);
        if required <= self.capacity {
            return Ok(());
        }

        let mut new_capacity = self.capacity;
        while new_capacity < required {
            new_capacity = new_capacity.saturating_mul(2);
        }

        let extra = new_capacity - self.entries.len();
        self.entries.try_reserve_exact(extra)?;
        self.index.try_reserve(extra)?;

        debug!(
            "Vocabulary capacity grown from {} to {}",
            self.capacity, new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Count one occurrence of `word` under `label`.
    ///
    /// New words are appended with both probabilities at 0.0 until the next
    /// call to [`Vocabulary::recompute_probabilities`].
    pub fn add_or_increment(&mut self, word: &str, label: Label) -> Result<()> {
        let key = truncate_word(word, self.max_word_length);

        if let Some(entry) = self
            .index
            .get(key)
            .copied()
            .and_then(|i| self.entries.get_mut(i))
        {
            entry.increment(label);
            return Ok(());
        }

        self.reserve(1)?;

        let position = self.entries.len();
        self.entries.push(WordStat::new(key.to_string(), label));
        self.index.insert(key.to_string(), position);
        Ok(())
    }

    /// Recompute P(word | class) for every entry with Laplace smoothing.
    ///
    /// Both classes share the same denominator term: the current number of
    /// distinct words.
    pub fn recompute_probabilities(&mut self, total_spam_emails: u32, total_not_spam_emails: u32) {
        let vocab_size = self.entries.len() as f64;
        let spam_denominator = total_spam_emails as f64 + LAPLACE_ALPHA * vocab_size;
        let not_spam_denominator = total_not_spam_emails as f64 + LAPLACE_ALPHA * vocab_size;

        for entry in &mut self.entries {
            entry.prob_spam = (entry.spam_count as f64 + LAPLACE_ALPHA) / spam_denominator;
            entry.prob_not_spam =
                (entry.not_spam_count as f64 + LAPLACE_ALPHA) / not_spam_denominator;
        }
    }
}
