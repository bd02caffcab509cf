//! Integration tests for the spamcheck binary

use std::process::{Command, Output};

fn spamcheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spamcheck"))
        .args(args)
        .env_remove("SPAMCHECK_CONFIG")
        .env("RUST_LOG", "off")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to run spamcheck")
}

#[test]
fn test_help_flags_exit_zero() {
    let cases = [
        ("--help", "SPAM DETECTION ML MODULE"),
        ("-h", "SPAM DETECTION ML MODULE"),
        ("--naive-bayes-help", "NAIVE BAYES CORE MODULE HELP"),
        ("--classifier-help", "CLASSIFIER CORE MODULE HELP"),
        ("--probability-help", "PROBABILITY CALCULATION MODULE HELP"),
    ];

    for (flag, header) in cases {
        let output = spamcheck(&[flag]);
        assert_eq!(output.status.code(), Some(0), "{}", flag);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(header), "{} printed: {}", flag, stdout);
    }
}

#[test]
fn test_unknown_option_exits_one() {
    let output = spamcheck(&["--bogus"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unknown option: --bogus"));
    assert!(stdout.contains("Use --help for available options"));
}

#[test]
fn test_positional_argument_is_unknown() {
    let output = spamcheck(&["train.csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Unknown option: train.csv"));
}

#[test]
fn test_demo_runs_without_arguments() {
    let output = spamcheck(&[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Vocabulary size: 24 words"));
    assert!(stdout.contains("Tokens: 'free money winner'"));
    assert!(stdout.contains("Demo completed: 5 predictions made"));
}

#[test]
fn test_arguments_after_first_are_ignored() {
    let output = spamcheck(&["-h", "extra"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("SPAM DETECTION ML MODULE"));
}

#[test]
fn test_first_help_flag_wins() {
    let output = spamcheck(&["--probability-help", "--help"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PROBABILITY CALCULATION MODULE HELP"));
    assert!(!stdout.contains("SPAM DETECTION ML MODULE"));
}

#[test]
fn test_repeated_help_flag() {
    let output = spamcheck(&["--help", "--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("SPAM DETECTION ML MODULE"));
}

#[test]
fn test_unknown_first_argument_is_reported() {
    let output = spamcheck(&["--verbose", "--help"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Unknown option: --verbose"));
}
