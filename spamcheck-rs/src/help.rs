//! Usage text printed by the `spamcheck` binary

/// Quick reference (`--help`, `-h`)
pub const ML_HELP: &str = "\
=== SPAM DETECTION ML MODULE ===
Quick usage: Classifier::train() + Classifier::predict()

ESSENTIAL CALLS:
  let mut classifier = Classifier::new(0.5)?;
  classifier.train(&emails, &labels, emails.len())?;
  let label = classifier.predict(&tokens, tokens.len());

DATA FORMAT:
  Input: one token slice per email, produced by the tokenizer
  Labels: 1 = SPAM, 0 = NOT-SPAM (Label::from(raw))
  Output: Label::Spam or Label::NotSpam

OPTIONS:
  -h, --help            Show this quick reference
  --naive-bayes-help    Training and scoring details
  --classifier-help     Classifier wrapper details
  --probability-help    Numeric safety helpers
  (no arguments)        Run the built-in demo

ENVIRONMENT:
  SPAMCHECK_CONFIG      Path to a TOML configuration file
  RUST_LOG              Log filter, overrides logging.level";

/// Model details (`--naive-bayes-help`)
pub const NAIVE_BAYES_HELP: &str = "\
=== NAIVE BAYES CORE MODULE HELP ===
Naive Bayes classification of pre-tokenized emails

MATHEMATICAL BASIS:
  P(spam|email) ∝ P(spam) × Π P(word|spam)
  Word probabilities use Laplace smoothing (alpha = 1):
    P(word|spam) = (spam_count + 1) / (spam_emails + vocabulary_size)

CORE CALLS:
  SpamModel::new() -> Result<SpamModel>
    Empty model; fails only if vocabulary storage cannot be reserved

  SpamModel::train(&emails, &labels, email_count) -> Result<TrainingSummary>
    Email counters restart on every call, word counts accumulate
    A zero email_count leaves the model untouched

  SpamModel::score_probability(&tokens, token_count) -> f64
    Spam probability in [0, 1]; reads at most token_count tokens
    Returns 0.0 while the vocabulary is empty

  SpamModel::classify(&tokens, token_count, threshold) -> Label
    Spam when the probability is >= threshold

FEATURES:
  Log-space scoring for numerical stability
  Equal penalty for unknown words in both classes
  Vocabulary capacity doubles as new words arrive
  Words longer than 99 bytes are truncated (and may share an entry)";

/// Classifier wrapper details (`--classifier-help`)
pub const CLASSIFIER_HELP: &str = "\
=== CLASSIFIER CORE MODULE HELP ===
Threshold and prediction bookkeeping around a SpamModel

CORE CALLS:
  Classifier::new(threshold) -> Result<Classifier>
    threshold must be in [0, 1]; 0.5 is balanced

  Classifier::train(&emails, &labels, email_count)
    Delegates to SpamModel::train

  Classifier::predict(&tokens, token_count) -> Label
    Classifies with the configured threshold; counts every attempt

  Classifier::predict_labeled(&tokens, token_count, actual) -> Label
  Classifier::record_outcome(predicted, actual)
    Feed back the true label so accuracy can be tracked

  Classifier::accuracy() -> f64
    correct / total predictions, 0.0 before any prediction

  Classifier::reset_stats()
    Zeroes the counters, keeps the model

TYPICAL THRESHOLDS:
  0.5 - Balanced (default)
  0.7 - Conservative (fewer false positives)
  0.3 - Aggressive (catch more spam)";

/// Numeric helper details (`--probability-help`)
pub const PROBABILITY_HELP: &str = "\
=== PROBABILITY CALCULATION MODULE HELP ===
Helpers for stable probability arithmetic

FUNCTIONS:
  safe_log(x) -> f64
    ln(x) for x > 0, otherwise -1000.0 instead of -infinity

  normalize_log_scores(spam, not_spam) -> f64
    exp(spam) / (exp(spam) + exp(not_spam)), computed after
    subtracting the larger score from both

PURPOSE:
  Naive Bayes multiplies many small P(word|class) values.
  Summing logarithms instead, log(a×b) = log(a) + log(b),
  avoids underflow to zero.";
