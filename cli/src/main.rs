//! Body Metrics Calculator
//!
//! Computes BMI, ideal body weight and an estimated body-fat percentage from
//! age, height, weight, gender and unit system.

use anyhow::Result;
use body_metrics_cli::{config::AppConfig, run, Args};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = AppConfig::load()?;

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting body metrics calculator"
    );

    match run(&args, &config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "No results: input declined");
            std::process::exit(1);
        }
    }
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout only carries results.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "body_metrics_cli=info,body_metrics_shared=warn".into()
        } else {
            "body_metrics_cli=debug,body_metrics_shared=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
