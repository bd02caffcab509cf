//! Classifier wrapper
//!
//! Combines a [`SpamModel`] with a decision threshold and keeps running
//! prediction counters.

use tracing::debug;

use super::model::SpamModel;
use super::types::{ClassifierStats, Label, TrainingSummary};
use crate::config::Config;
use crate::error::{Result, SpamError};

/// Spam classifier with prediction bookkeeping
#[derive(Debug, Clone)]
pub struct Classifier {
    model: SpamModel,
    threshold: f64,
    total_predictions: u64,
    correct_predictions: u64,
}

impl Classifier {
    /// Create a classifier with an empty model.
    ///
    /// Fails if `threshold` is not in [0, 1] or the model cannot be allocated.
    pub fn new(threshold: f64) -> Result<Self> {
        Self::with_model(SpamModel::new()?, threshold)
    }

    /// Create a classifier from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let model = SpamModel::with_config(&config.vocabulary)?;
        Self::with_model(model, config.classifier.threshold)
    }

    fn with_model(model: SpamModel, threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SpamError::InvalidThreshold(threshold));
        }

        Ok(Self {
            model,
            threshold,
            total_predictions: 0,
            correct_predictions: 0,
        })
    }

    /// Train the underlying model
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
        self.model.train(emails, labels, email_count)
    }

    /// Classify `tokens` against the configured threshold.
    ///
    /// Every call counts as a prediction, including calls on an untrained
    /// model.
    pub fn predict<S: AsRef<str>>(&mut self, tokens: &[S], token_count: usize) -> Label {
        let prediction = self.model.classify(tokens, token_count, self.threshold);
        self.total_predictions += 1;
        prediction
    }

    /// Classify `tokens` and record whether the result matched `actual`
    pub fn predict_labeled<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        token_count: usize,
        actual: Label,
    ) -> Label {
        let prediction = self.predict(tokens, token_count);
        self.record_outcome(prediction, actual);
        prediction
    }

    /// Feed back the true label of an earlier prediction.
    ///
    /// Counts a correct prediction when the labels match. Never lets the
    /// correct count exceed the number of predictions made.
    pub fn record_outcome(&mut self, predicted: Label, actual: Label) {
        if predicted != actual {
            return;
        }

        if self.correct_predictions < self.total_predictions {
            self.correct_predictions += 1;
        } else {
            debug!("Ignoring outcome with no matching prediction");
        }
    }

    /// Fraction of predictions confirmed correct, 0.0 before any prediction
    pub fn accuracy(&self) -> f64 {
        if self.total_predictions == 0 {
            return 0.0;
        }
        self.correct_predictions as f64 / self.total_predictions as f64
    }

    /// Zero the prediction counters; the model is kept
    pub fn reset_stats(&mut self) {
        self.total_predictions = 0;
        self.correct_predictions = 0;
    }

    /// Snapshot of the threshold and prediction counters
    pub fn stats(&self) -> ClassifierStats {
        ClassifierStats {
            threshold: self.threshold,
            total_predictions: self.total_predictions,
            correct_predictions: self.correct_predictions,
            accuracy: self.accuracy(),
        }
    }

    /// Get the underlying model
    pub fn model(&self) -> &SpamModel {
        &self.model
    }

    /// Get the classification threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Predictions made since creation or the last reset
    pub fn total_predictions(&self) -> u64 {
        self.total_predictions
    }

    /// Predictions confirmed correct through outcome feedback
    pub fn correct_predictions(&self) -> u64 {
        self.correct_predictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{sample_labels, SAMPLE_EMAILS};

    fn trained_classifier() -> Classifier {
        let mut classifier = Classifier::new(0.5).unwrap();
        classifier
            .train(&SAMPLE_EMAILS, &sample_labels(), SAMPLE_EMAILS.len())
            .unwrap();
        classifier
    }

    #[test]
    fn test_new_classifier() {
        let classifier = Classifier::new(0.5).unwrap();
        assert_eq!(classifier.threshold(), 0.5);
        assert_eq!(classifier.total_predictions(), 0);
        assert_eq!(classifier.correct_predictions(), 0);
        assert_eq!(classifier.model().vocabulary_size(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_threshold() {
        assert!(matches!(
            Classifier::new(-0.1),
            Err(SpamError::InvalidThreshold(_))
        ));
        assert!(Classifier::new(1.01).is_err());
        assert!(Classifier::new(f64::NAN).is_err());
        assert!(Classifier::new(0.0).is_ok());
        assert!(Classifier::new(1.0).is_ok());
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.classifier.threshold = 0.7;
        config.vocabulary.initial_capacity = 8;

        let classifier = Classifier::from_config(&config).unwrap();
        assert_eq!(classifier.threshold(), 0.7);
        assert_eq!(classifier.model().stats().vocabulary_capacity, 8);

        config.classifier.threshold = 2.0;
        assert!(Classifier::from_config(&config).is_err());
    }

    #[test]
    fn test_train_delegates_to_model() {
        let classifier = trained_classifier();
        assert_eq!(classifier.model().vocabulary_size(), 24);
        assert_eq!(classifier.model().prior_spam(), 0.5);
        assert_eq!(classifier.total_predictions(), 0);
    }

    #[test]
    fn test_predict_counts_every_attempt() {
        let mut classifier = trained_classifier();

        assert_eq!(classifier.predict(&["free", "money", "winner"], 3), Label::Spam);
        assert_eq!(
            classifier.predict(&["meeting", "project", "update"], 3),
            Label::NotSpam
        );
        assert_eq!(classifier.predict(&["unknown", "words", "test"], 3), Label::Spam);

        assert_eq!(classifier.total_predictions(), 3);
        assert_eq!(classifier.correct_predictions(), 0);
        assert_eq!(classifier.accuracy(), 0.0);
    }

    #[test]
    fn test_predict_untrained_still_counts() {
        let mut classifier = Classifier::new(0.5).unwrap();
        assert_eq!(classifier.predict(&["free"], 1), Label::NotSpam);
        assert_eq!(classifier.total_predictions(), 1);
    }

    #[test]
    fn test_zero_threshold_untrained_predicts_spam() {
        // Untrained score is 0.0, and 0.0 >= 0.0
        let mut classifier = Classifier::new(0.0).unwrap();
        assert_eq!(classifier.predict(&["free"], 1), Label::Spam);
    }

    #[test]
    fn test_accuracy_without_predictions() {
        let classifier = Classifier::new(0.5).unwrap();
        assert_eq!(classifier.accuracy(), 0.0);
    }

    #[test]
    fn test_predict_labeled_tracks_accuracy() {
        let mut classifier = trained_classifier();

        classifier.predict_labeled(&["free", "money", "winner"], 3, Label::Spam);
        classifier.predict_labeled(&["lunch", "noon"], 2, Label::NotSpam);
        classifier.predict_labeled(&["urgent", "verify"], 2, Label::NotSpam);
        classifier.predict_labeled(&["homework", "due"], 2, Label::NotSpam);

        assert_eq!(classifier.total_predictions(), 4);
        assert_eq!(classifier.correct_predictions(), 3);
        assert!((classifier.accuracy() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_record_outcome_never_exceeds_predictions() {
        let mut classifier = trained_classifier();
        classifier.record_outcome(Label::Spam, Label::Spam);
        assert_eq!(classifier.correct_predictions(), 0);

        let predicted = classifier.predict(&["free"], 1);
        classifier.record_outcome(predicted, Label::Spam);
        classifier.record_outcome(predicted, Label::Spam);
        assert_eq!(classifier.correct_predictions(), 1);
        assert_eq!(classifier.accuracy(), 1.0);
    }

    #[test]
    fn test_reset_stats_keeps_model() {
        let mut classifier = trained_classifier();
        classifier.predict_labeled(&["free"], 1, Label::Spam);
        classifier.predict(&["noon"], 1);

        classifier.reset_stats();
        assert_eq!(classifier.total_predictions(), 0);
        assert_eq!(classifier.correct_predictions(), 0);
        assert_eq!(classifier.accuracy(), 0.0);
        assert_eq!(classifier.model().vocabulary_size(), 24);
    }

    #[test]
    fn test_stats_snapshot() {
        let mut classifier = trained_classifier();
        classifier.predict_labeled(&["free"], 1, Label::Spam);
        classifier.predict(&["noon"], 1);

        let stats = classifier.stats();
        assert_eq!(stats.threshold, 0.5);
        assert_eq!(stats.total_predictions, 2);
        assert_eq!(stats.correct_predictions, 1);
        assert!((stats.accuracy - 0.5).abs() < 1e-12);
    }
}
