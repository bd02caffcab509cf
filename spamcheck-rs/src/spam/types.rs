//! Spam types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class assigned to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Legitimate message (raw label 0)
    NotSpam,
    /// Spam message (raw label 1)
    Spam,
}

impl Label {
    /// Check whether this is the spam class
    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }

    /// Integer form used by the tokenizer: 1 = spam, 0 = not-spam
    pub fn as_raw(self) -> i32 {
        match self {
            Label::Spam => 1,
            Label::NotSpam => 0,
        }
    }
}

/// Only `1` means spam; every other raw value counts as not-spam.
impl From<i32> for Label {
    fn from(raw: i32) -> Self {
        if raw == 1 {
            Label::Spam
        } else {
            Label::NotSpam
        }
    }
}

impl From<bool> for Label {
    fn from(is_spam: bool) -> Self {
        if is_spam {
            Label::Spam
        } else {
            Label::NotSpam
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Spam => write!(f, "SPAM"),
            Label::NotSpam => write!(f, "NOT-SPAM"),
        }
    }
}

/// Per-word statistics learned during training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    /// Vocabulary key (already truncated)
    pub word: String,
    /// Occurrences in spam emails, one per token instance
    pub spam_count: u32,
    /// Occurrences in not-spam emails, one per token instance
    pub not_spam_count: u32,
    /// P(word | spam), 0.0 until the next training pass
    pub prob_spam: f64,
    /// P(word | not-spam), 0.0 until the next training pass
    pub prob_not_spam: f64,
}

impl WordStat {
    /// Create an entry for a word seen once under `label`
    pub fn new(word: String, label: Label) -> Self {
        let (spam_count, not_spam_count) = match label {
            Label::Spam => (1, 0),
            Label::NotSpam => (0, 1),
        };

        Self {
            word,
            spam_count,
            not_spam_count,
            prob_spam: 0.0,
            prob_not_spam: 0.0,
        }
    }

    /// Bump the count matching `label`
    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Spam => self.spam_count = self.spam_count.saturating_add(1),
            Label::NotSpam => self.not_spam_count = self.not_spam_count.saturating_add(1),
        }
    }

    /// Total occurrences across both classes
    pub fn total_count(&self) -> u32 {
        self.spam_count.saturating_add(self.not_spam_count)
    }

    /// Fraction of occurrences that came from spam
    pub fn spam_ratio(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        self.spam_count as f64 / total as f64
    }
}

/// Outcome of a training call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrainingSummary {
    /// Emails actually processed
    pub emails_processed: usize,
    /// Tokens fed into the vocabulary
    pub tokens_processed: usize,
    /// Vocabulary size after training
    pub vocabulary_size: usize,
    /// Spam emails counted in this call
    pub spam_emails: u32,
    /// Not-spam emails counted in this call
    pub not_spam_emails: u32,
}

/// Snapshot of what a model has learned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelStats {
    /// Unique words known
    pub vocabulary_size: usize,
    /// Reserved vocabulary slots
    pub vocabulary_capacity: usize,
    /// Spam emails in the last training call
    pub total_spam_emails: u32,
    /// Not-spam emails in the last training call
    pub total_not_spam_emails: u32,
    /// P(spam)
    pub prior_spam: f64,
    /// P(not-spam)
    pub prior_not_spam: f64,
}

impl fmt::Display for ModelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== MODEL STATISTICS ===")?;
        writeln!(f, "Vocabulary size: {} words", self.vocabulary_size)?;
        writeln!(
            f,
            "Training data: {} spam, {} not-spam emails",
            self.total_spam_emails, self.total_not_spam_emails
        )?;
        write!(
            f,
            "Prior probabilities: P(spam)={:.3}, P(not_spam)={:.3}",
            self.prior_spam, self.prior_not_spam
        )
    }
}

/// Prediction bookkeeping of a classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierStats {
    /// Decision boundary in use
    pub threshold: f64,
    /// Classification attempts
    pub total_predictions: u64,
    /// Attempts whose outcome was confirmed correct
    pub correct_predictions: u64,
    /// correct / total, 0.0 before any prediction
    pub accuracy: f64,
}
