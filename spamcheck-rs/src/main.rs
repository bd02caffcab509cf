//! spamcheck: Naive Bayes spam classifier demo
//!
//! Prints module help for the `--*-help` flags, or trains a classifier on a
//! built-in sample and reports a few predictions.
//!
//! # Usage
//!
//! ```bash
//! # Run the demo
//! spamcheck
//!
//! # Show help
//! spamcheck --help
//! spamcheck --naive-bayes-help
//!
//! # Use a configuration file
//! SPAMCHECK_CONFIG=spamcheck.toml spamcheck
//! ```

use clap::Parser;
use spamcheck_rs::config::LoggingConfig;
use spamcheck_rs::help::{CLASSIFIER_HELP, ML_HELP, NAIVE_BAYES_HELP, PROBABILITY_HELP};
use spamcheck_rs::{demo, Config};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_CONFIG_FILE: &str = "spamcheck.toml";

#[derive(Parser)]
#[command(name = "spamcheck")]
#[command(about = "Naive Bayes spam classifier", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Show the quick reference
    #[arg(short = 'h', long = "help")]
    help: bool,

    /// Show training and scoring details
    #[arg(long)]
    naive_bayes_help: bool,

    /// Show classifier wrapper details
    #[arg(long)]
    classifier_help: bool,

    /// Show numeric helper details
    #[arg(long)]
    probability_help: bool,
}

fn main() -> anyhow::Result<()> {
    // Only the first argument selects what to do; anything after it is ignored
    let args: Vec<String> = std::env::args().take(2).collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(_) => {
            let option = args.get(1).map(String::as_str).unwrap_or_default();
            println!("Unknown option: {}", option);
            println!("Use --help for available options");
            std::process::exit(1);
        }
    };

    if cli.help {
        println!("{}", ML_HELP);
        return Ok(());
    }
    if cli.naive_bayes_help {
        println!("{}", NAIVE_BAYES_HELP);
        return Ok(());
    }
    if cli.classifier_help {
        println!("{}", CLASSIFIER_HELP);
        return Ok(());
    }
    if cli.probability_help {
        println!("{}", PROBABILITY_HELP);
        return Ok(());
    }

    let config = load_config()?;
    init_logging(&config.logging);

    info!("Starting spamcheck v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    let classifier = demo::run(&config, &mut stdout)?;

    info!(
        "Demo finished after {} predictions",
        classifier.total_predictions()
    );

    Ok(())
}

/// Load configuration from `SPAMCHECK_CONFIG`, `spamcheck.toml`, or defaults
fn load_config() -> anyhow::Result<Config> {
    if let Ok(path) = std::env::var("SPAMCHECK_CONFIG") {
        return Ok(Config::from_file(&path)?);
    }

    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        return Ok(Config::from_file(DEFAULT_CONFIG_FILE)?);
    }

    Ok(Config::default())
}

/// Install the global subscriber; logs go to stderr so the report stays clean
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
    }
}
