//! Input and result records of a calculation

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::health_metrics::{BmiCategory, Gender};
use crate::units::{UnitSystem, WeightUnit};

/// A parsed calculation request
///
/// Height and weight are in the units of `unit_system`. Every numeric field
/// must be at least 1 before the engine will look at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct MeasurementInput {
    pub gender: Gender,
    #[validate(range(min = 1.0))]
    pub age_years: f64,
    #[validate(range(min = 1.0))]
    pub height: f64,
    #[validate(range(min = 1.0))]
    pub weight: f64,
    pub unit_system: UnitSystem,
}

/// Outcome of one successful calculation
///
/// Numeric values are rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    pub bmi: f64,
    /// Ideal weight in the weight unit of `unit_system`
    pub ideal_weight: f64,
    pub body_fat_percent: f64,
    pub category: BmiCategory,
    pub advisory: String,
    pub unit_system: UnitSystem,
}

impl MetricsResult {
    /// Unit `ideal_weight` is expressed in
    pub fn ideal_weight_unit(&self) -> WeightUnit {
        self.unit_system.weight_unit()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for MetricsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BMI {:.1} ({}), ideal weight {:.1} {}, body fat {:.1}%",
            self.bmi,
            self.category,
            self.ideal_weight,
            self.ideal_weight_unit(),
            self.body_fat_percent
        )
    }
}
