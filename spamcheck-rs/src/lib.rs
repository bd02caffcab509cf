//! spamcheck-rs: Naive Bayes spam classifier
//!
//! Learns per-word spam statistics from pre-tokenized, labeled emails and
//! scores new token sequences as spam or not-spam.
//!
//! # Features
//!
//! - **Training**: Laplace-smoothed word probabilities and class priors
//! - **Scoring**: Log-space accumulation with a guarded logarithm and a
//!   numerically stable two-way normalization
//! - **Classifier**: Decision threshold plus prediction and accuracy counters
//! - **Vocabulary**: Hash-indexed, insertion-ordered, doubling capacity
//!
//! # Example
//!
//! ```
//! use spamcheck_rs::spam::{Classifier, Label};
//!
//! # fn main() -> spamcheck_rs::Result<()> {
//! let emails: [&[&str]; 2] = [
//!     &["free", "money", "now"],
//!     &["meeting", "at", "noon"],
//! ];
//! let labels = [Label::Spam, Label::NotSpam];
//!
//! let mut classifier = Classifier::new(0.5)?;
//! classifier.train(&emails, &labels, emails.len())?;
//!
//! assert_eq!(classifier.predict(&["free", "money"], 2), Label::Spam);
//! assert_eq!(classifier.total_predictions(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`spam`]: Model, vocabulary and classifier
//! - [`demo`]: Built-in sample data and demo run
//! - [`help`]: Usage text for the binary

pub mod config;
pub mod demo;
pub mod error;
pub mod help;
pub mod spam;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
pub use spam::{Classifier, Label, SpamModel};
