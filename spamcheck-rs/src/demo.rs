//! Built-in demo
//!
//! Trains a classifier on a small fixed sample and prints what it learned
//! together with a handful of predictions.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::help::ML_HELP;
use crate::spam::{Classifier, Label};

/// Six pre-tokenized training emails, alternating spam / not-spam
pub const SAMPLE_EMAILS: [&[&str]; 6] = [
    &["congratulations", "you", "won", "free", "lottery"],
    &["meeting", "tomorrow", "10am", "conference"],
    &["urgent", "account", "suspended", "verify"],
    &["lunch", "restaurant", "noon"],
    &["winner", "claim", "prize", "money", "now"],
    &["homework", "assignment", "due"],
];

/// Raw labels for [`SAMPLE_EMAILS`]: 1 = spam, 0 = not-spam
pub const SAMPLE_LABELS: [i32; 6] = [1, 0, 1, 0, 1, 0];

/// Queries scored after training
pub const DEMO_QUERIES: [&[&str]; 5] = [
    &["free", "money", "winner"],
    &["meeting", "project", "update"],
    &["urgent", "verify", "account"],
    &["unknown", "words", "test"],
    &["free"],
];

/// Number of entries shown in the top spam words listing
pub const TOP_WORDS_SHOWN: usize = 5;

/// [`SAMPLE_LABELS`] as [`Label`]s
pub fn sample_labels() -> Vec<Label> {
    SAMPLE_LABELS.iter().map(|&raw| Label::from(raw)).collect()
}

/// Run the demo, writing its report to `out`
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Classifier> {
    writeln!(out, "Testing SpamCheck ML with Tokenized Data...")?;
    writeln!(out)?;

    let mut classifier = Classifier::from_config(config)?;
    let summary = classifier.train(&SAMPLE_EMAILS, &sample_labels(), SAMPLE_EMAILS.len())?;
    writeln!(
        out,
        "Trained on {} tokenized emails ({} tokens)",
        summary.emails_processed, summary.tokens_processed
    )?;
    writeln!(out)?;

    writeln!(out, "{}", classifier.model().stats())?;

    writeln!(out)?;
    writeln!(out, "Top {} spam words:", TOP_WORDS_SHOWN)?;
    let top_words = classifier.model().top_spam_words(TOP_WORDS_SHOWN);
    if top_words.is_empty() {
        writeln!(out, "   (No strong spam indicators found)")?;
    }
    for stat in top_words {
        writeln!(
            out,
            "   '{}': {:.0}% spam ({} spam, {} not-spam)",
            stat.word,
            stat.spam_ratio() * 100.0,
            stat.spam_count,
            stat.not_spam_count
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Testing predictions with tokenized data:")?;
    for tokens in DEMO_QUERIES {
        let prediction = classifier.predict(tokens, tokens.len());
        let probability = classifier.model().score_probability(tokens, tokens.len());
        writeln!(out, "Tokens: '{}'", tokens.join(" "))?;
        writeln!(
            out,
            "  Prediction: {} (confidence: {:.1}%)",
            prediction,
            probability * 100.0
        )?;
        writeln!(out)?;
    }

    writeln!(out, "{}", ML_HELP)?;
    writeln!(out)?;
    writeln!(out, "Demo completed: {} predictions made", classifier.total_predictions())?;

    Ok(classifier)
}
