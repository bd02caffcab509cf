//! Spam classification module
//!
//! Naive Bayes classification of pre-tokenized emails:
//! - [`probability`]: guarded logarithm and log-score normalization
//! - [`vocabulary`]: insertion-ordered word statistics
//! - [`model`]: training and scoring
//! - [`classifier`]: threshold and prediction bookkeeping

pub mod classifier;
pub mod model;
pub mod probability;
pub mod types;
pub mod vocabulary;

pub use classifier::Classifier;
pub use model::SpamModel;
pub use probability::safe_log;
pub use types::*;
pub use vocabulary::Vocabulary;
