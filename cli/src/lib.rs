//! Body Metrics CLI Library
//!
//! Terminal front end for the metrics engine. Exposed as a library so the
//! argument handling and rendering can be tested without spawning the binary.

pub mod config;
pub mod render;

use anyhow::Result;
use body_metrics_shared::{FormState, Gender, UnitSystem};
use clap::Parser;
use tracing::info;

use crate::config::{AppConfig, OutputFormat};

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "body-metrics", version)]
#[command(about = "Calculate BMI, ideal weight and estimated body fat")]
pub struct Args {
    /// male or female (default from config)
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Age in years
    #[arg(long, allow_hyphen_values = true)]
    pub age: String,

    /// Height in cm (metric) or feet (imperial)
    #[arg(long, allow_hyphen_values = true)]
    pub height: String,

    /// Weight in kg (metric) or lbs (imperial)
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,

    /// metric or imperial (default from config)
    #[arg(long = "units")]
    pub unit_system: Option<UnitSystem>,

    /// Output format (default from config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Run one calculation and return the text to print
///
/// Invalid entries are returned as an error carrying the reason.
pub fn run(args: &Args, config: &AppConfig) -> Result<String> {
    let mut form = FormState::with_defaults(
        args.gender.unwrap_or(config.defaults.gender),
        args.unit_system.unwrap_or(config.defaults.unit_system),
    );
    form.age = args.age.clone();
    form.height = args.height.clone();
    form.weight = args.weight.clone();

    let result = form.try_submit()?;
    info!(bmi = result.bmi, category = %result.category, "Calculation complete");

    let output = match args.format.unwrap_or(config.output.format) {
        OutputFormat::Text => render::results_card(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    };
    Ok(output)
}
