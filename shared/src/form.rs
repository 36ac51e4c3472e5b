//! Calculator form state
//!
//! Holds what the user has typed and the latest result. The engine itself is
//! stateless; this is the one place a result outlives a calculation.

use serde::{Deserialize, Serialize};

use crate::engine::try_calculate;
use crate::errors::InputError;
use crate::health_metrics::Gender;
use crate::models::MetricsResult;
use crate::units::UnitSystem;

/// Entries and latest result of the calculator form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub gender: Gender,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub unit_system: UnitSystem,
    result: Option<MetricsResult>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a chosen gender and unit system
    pub fn with_defaults(gender: Gender, unit_system: UnitSystem) -> Self {
        Self {
            gender,
            unit_system,
            ..Self::default()
        }
    }

    pub fn result(&self) -> Option<&MetricsResult> {
        self.result.as_ref()
    }

    /// Calculate from the current entries
    ///
    /// A successful calculation replaces the previous result. Invalid entries
    /// leave the previous result in place and return the reason.
    pub fn try_submit(&mut self) -> Result<&MetricsResult, InputError> {
        let result = try_calculate(
            self.gender,
            &self.age,
            &self.height,
            &self.weight,
            self.unit_system,
        )?;
        Ok(&*self.result.insert(result))
    }

    /// Calculate from the current entries, returning whether a result was produced
    pub fn submit(&mut self) -> bool {
        match self.try_submit() {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Form submission ignored");
                false
            }
        }
    }

    /// Clear the numeric entries and the result
    ///
    /// Gender and unit system stay as selected.
    pub fn reset(&mut self) {
        self.age.clear();
        self.height.clear();
        self.weight.clear();
        self.result = None;
    }

    /// Label for the height entry, e.g. "Height (cm)"
    pub fn height_label(&self) -> String {
        format!("Height ({})", self.unit_system.height_unit())
    }

    /// Label for the weight entry, e.g. "Weight (lbs)"
    pub fn weight_label(&self) -> String {
        format!("Weight ({})", self.unit_system.weight_unit())
    }
}
