//! Naive Bayes spam model
//!
//! Trains per-word conditional probabilities from labeled token sequences and
//! scores new sequences in log space:
//!
//! `P(spam | tokens) ∝ P(spam) × Π P(token | spam)`

use tracing::{debug, info, warn};

use super::probability::{normalize_log_scores, safe_log};
use super::types::{Label, ModelStats, TrainingSummary, WordStat};
use super::vocabulary::Vocabulary;
use crate::config::VocabularyConfig;
use crate::error::Result;

/// A word must appear in spam more than this many times to be reported
pub const TOP_WORD_MIN_SPAM_COUNT: u32 = 2;

/// A word's spam ratio must exceed this to be reported
pub const TOP_WORD_MIN_SPAM_RATIO: f64 = 0.7;

/// Bayesian spam model
#[derive(Debug, Clone)]
pub struct SpamModel {
    vocabulary: Vocabulary,
    total_spam_emails: u32,
    total_not_spam_emails: u32,
    prior_spam: f64,
    prior_not_spam: f64,
}

impl SpamModel {
    /// Create an empty model with default vocabulary sizing
    pub fn new() -> Result<Self> {
        Ok(Self::from_vocabulary(Vocabulary::new()?))
    }

    /// Create an empty model sized from configuration
    pub fn with_config(config: &VocabularyConfig) -> Result<Self> {
        let vocabulary =
            Vocabulary::with_capacity(config.initial_capacity, config.max_word_length)?;
        Ok(Self::from_vocabulary(vocabulary))
    }

    fn from_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            total_spam_emails: 0,
            total_not_spam_emails: 0,
            prior_spam: 0.0,
            prior_not_spam: 0.0,
        }
    }

    /// Train on pre-tokenized emails.
    ///
    /// `emails[i]` is labeled by `labels[i]`; only the first `email_count`
    /// pairs are used. A zero count or empty input leaves the model untouched.
    ///
    /// Class email counters restart from zero on every call, but word counts
    /// keep accumulating across calls, and probabilities are recomputed for
    /// every word known so far.
    ///
    /// Storage for every new word is reserved before anything is counted, so
    /// an allocation failure returns an error and leaves the model unchanged.
    pub fn train<E, S>(
        &mut self,
        emails: &[E],
        labels: &[Label],
        email_count: usize,
    ) -> Result<TrainingSummary>
    where
        E: AsRef<[S]>,
        S: AsRef<str>,
    {
        let available = email_count.min(emails.len()).min(labels.len());
        if available == 0 {
            debug!("Training skipped: no emails to process");
            return Ok(TrainingSummary {
                vocabulary_size: self.vocabulary.len(),
                ..TrainingSummary::default()
            });
        }

        if available < email_count {
            warn!(
                "Requested {} emails but only {} email/label pairs supplied",
                email_count, available
            );
        }

        info!("Training on {} tokenized emails", available);

        let new_words = self.vocabulary.count_new_words(
            emails
                .iter()
                .take(available)
                .flat_map(|tokens| tokens.as_ref().iter().map(|token| token.as_ref())),
        );
        self.vocabulary.reserve(new_words)?;

        self.total_spam_emails = 0;
        self.total_not_spam_emails = 0;

        let mut tokens_processed = 0;
        for (tokens, &label) in emails.iter().zip(labels).take(available) {
            match label {
                Label::Spam => self.total_spam_emails += 1,
                Label::NotSpam => self.total_not_spam_emails += 1,
            }

            for token in tokens.as_ref() {
                self.vocabulary.add_or_increment(token.as_ref(), label)?;
                tokens_processed += 1;
            }
        }

        info!(
            "Learned {} unique words (spam emails: {}, not-spam emails: {})",
            self.vocabulary.len(),
            self.total_spam_emails,
            self.total_not_spam_emails
        );

        let total_emails = self.total_spam_emails + self.total_not_spam_emails;
        if total_emails > 0 {
            self.prior_spam = self.total_spam_emails as f64 / total_emails as f64;
            self.prior_not_spam = self.total_not_spam_emails as f64 / total_emails as f64;
        }

        debug!(
            "Prior probabilities: P(spam)={:.3}, P(not_spam)={:.3}",
            self.prior_spam, self.prior_not_spam
        );

        self.vocabulary
            .recompute_probabilities(self.total_spam_emails, self.total_not_spam_emails);

        Ok(TrainingSummary {
            emails_processed: available,
            tokens_processed,
            vocabulary_size: self.vocabulary.len(),
            spam_emails: self.total_spam_emails,
            not_spam_emails: self.total_not_spam_emails,
        })
    }

    /// Probability in [0, 1] that `tokens` are spam.
    ///
    /// Reads at most `token_count` tokens. An untrained model returns exactly
    /// 0.0. Unknown words add the same penalty to both classes.
    pub fn score_probability<S: AsRef<str>>(&self, tokens: &[S], token_count: usize) -> f64 {
        if self.vocabulary.is_empty() {
            return 0.0;
        }

        let mut spam_score = safe_log(self.prior_spam);
        let mut not_spam_score = safe_log(self.prior_not_spam);
        let unknown_log = safe_log(1.0 / (self.vocabulary.len() as f64 + 1.0));

        for token in tokens.iter().take(token_count) {
            match self.vocabulary.find(token.as_ref()) {
                Some(stat) => {
                    spam_score += safe_log(stat.prob_spam);
                    not_spam_score += safe_log(stat.prob_not_spam);
                }
                None => {
                    spam_score += unknown_log;
                    not_spam_score += unknown_log;
                }
            }
        }

        let probability = normalize_log_scores(spam_score, not_spam_score);
        debug!(
            "Scored tokens: log P(spam)={:.4}, log P(not_spam)={:.4}, P(spam)={:.4}",
            spam_score, not_spam_score, probability
        );
        probability
    }

    /// Spam iff the score reaches `threshold` (inclusive)
    pub fn classify<S: AsRef<str>>(
        &self,
        tokens: &[S],
        token_count: usize,
        threshold: f64,
    ) -> Label {
        if self.score_probability(tokens, token_count) >= threshold {
            Label::Spam
        } else {
            Label::NotSpam
        }
    }

    /// Strong spam indicators, in first-seen order.
    ///
    /// Keeps words seen in spam more than [`TOP_WORD_MIN_SPAM_COUNT`] times with
    /// a spam ratio above [`TOP_WORD_MIN_SPAM_RATIO`], stopping after `count`.
    pub fn top_spam_words(&self, count: usize) -> Vec<&WordStat> {
        self.vocabulary
            .iter()
            .filter(|stat| {
                stat.spam_count > TOP_WORD_MIN_SPAM_COUNT
                    && stat.spam_ratio() > TOP_WORD_MIN_SPAM_RATIO
            })
            .take(count)
            .collect()
    }

    /// Snapshot of vocabulary size, email counts and priors
    pub fn stats(&self) -> ModelStats {
        ModelStats {
            vocabulary_size: self.vocabulary.len(),
            vocabulary_capacity: self.vocabulary.capacity(),
            total_spam_emails: self.total_spam_emails,
            total_not_spam_emails: self.total_not_spam_emails,
            prior_spam: self.prior_spam,
            prior_not_spam: self.prior_not_spam,
        }
    }

    /// Get the vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of distinct words learned
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Spam emails seen in the last training call
    pub fn total_spam_emails(&self) -> u32 {
        self.total_spam_emails
    }

    /// Not-spam emails seen in the last training call
    pub fn total_not_spam_emails(&self) -> u32 {
        self.total_not_spam_emails
    }

    /// Get P(spam)
    pub fn prior_spam(&self) -> f64 {
        self.prior_spam
    }

    /// Get P(not spam)
    pub fn prior_not_spam(&self) -> f64 {
        self.prior_not_spam
    }
}
