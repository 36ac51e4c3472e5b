//! Body Metrics Shared Library
//!
//! The metrics engine behind the calculator: unit normalization, the BMI,
//! ideal-weight and body-fat formulas, BMI classification, input validation
//! and the form state that holds the latest result. Used by the WASM
//! bindings and the CLI.

pub mod engine;
pub mod errors;
pub mod form;
pub mod health_metrics;
pub mod models;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use engine::{calculate, compute, try_calculate};
pub use errors::*;
pub use form::FormState;
pub use health_metrics::*;
pub use models::{MeasurementInput, MetricsResult};
pub use units::*;
pub use validation::{Field, MIN_MEASUREMENT};
