//! Input validation
//!
//! Turns the raw strings of the form into a [`MeasurementInput`]. Parsing is
//! done here; the range rule (every number at least 1) lives on the
//! `MeasurementInput` derive and is checked with the `validator` crate.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::InputError;
use crate::health_metrics::Gender;
use crate::models::MeasurementInput;
use crate::units::UnitSystem;

/// Smallest accepted value for age, height and weight
pub const MIN_MEASUREMENT: f64 = 1.0;

/// Numeric fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    Height,
    Weight,
}

impl Field {
    /// Fields in the order the form lists them
    pub const ALL: [Field; 3] = [Field::Age, Field::Height, Field::Weight];

    /// Name of the matching `MeasurementInput` field
    pub fn name(&self) -> &'static str {
        match self {
            Field::Age => "age_years",
            Field::Height => "height",
            Field::Weight => "weight",
        }
    }

    /// User-friendly label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Height => "Height",
            Field::Weight => "Weight",
        }
    }

    fn value_of(&self, input: &MeasurementInput) -> f64 {
        match self {
            Field::Age => input.age_years,
            Field::Height => input.height,
            Field::Weight => input.weight,
        }
    }
}

/// Parse one numeric entry
///
/// Surrounding whitespace is ignored. Empty strings are `Missing`; anything
/// that is not a finite number is `NotANumber`.
pub fn parse_number(field: Field, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing { field });
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Parse a gender selection
pub fn parse_gender(raw: &str) -> Result<Gender, InputError> {
    raw.parse().map_err(|_| InputError::UnknownOption {
        kind: "gender",
        value: raw.to_string(),
    })
}

/// Parse a unit system selection
pub fn parse_unit_system(raw: &str) -> Result<UnitSystem, InputError> {
    raw.parse().map_err(|_| InputError::UnknownOption {
        kind: "unit system",
        value: raw.to_string(),
    })
}

/// Check the range rule on an already parsed input
///
/// Reports the first offending field in form order.
pub fn validate_measurements(input: &MeasurementInput) -> Result<(), InputError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };
    let field_errors = errors.field_errors();
    let field = Field::ALL
        .into_iter()
        .find(|f| field_errors.contains_key(f.name()))
        .unwrap_or(Field::Age);

    Err(InputError::OutOfRange {
        field,
        value: field.value_of(input),
        min: MIN_MEASUREMENT,
    })
}

/// Parse and validate the raw form entries
pub fn validate_input(
    gender: Gender,
    age: &str,
    height: &str,
    weight: &str,
    unit_system: UnitSystem,
) -> Result<MeasurementInput, InputError> {
    let input = MeasurementInput {
        gender,
        age_years: parse_number(Field::Age, age)?,
        height: parse_number(Field::Height, height)?,
        weight: parse_number(Field::Weight, weight)?,
        unit_system,
    };
    validate_measurements(&input)?;
    Ok(input)
}
