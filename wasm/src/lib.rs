//! Body Metrics WASM Module
//!
//! WebAssembly bindings the browser form calls into. Results cross the
//! boundary as JSON strings.

use body_metrics_shared::{calculate, validation, FormState, Gender, UnitSystem};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Calculate BMI, ideal weight and body fat from raw form entries
///
/// Returns the result as JSON, or `undefined` when any entry is invalid.
#[wasm_bindgen]
pub fn calculate_metrics(
    gender: &str,
    age: &str,
    height: &str,
    weight: &str,
    unit_system: &str,
) -> Option<String> {
    let gender = validation::parse_gender(gender).ok()?;
    let unit_system = validation::parse_unit_system(unit_system).ok()?;
    calculate(gender, age, height, weight, unit_system)?.to_json().ok()
}

/// Field labels for the current unit system
#[derive(Serialize)]
struct FormLabels {
    height: String,
    weight: String,
    ideal_weight: String,
}

/// Stateful calculator form
///
/// Keeps the last result across invalid submissions, like the page does.
#[wasm_bindgen]
#[derive(Default)]
pub struct CalculatorForm {
    state: FormState,
}

#[wasm_bindgen]
impl CalculatorForm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select gender; unknown values are ignored and return false
    pub fn set_gender(&mut self, value: &str) -> bool {
        match value.parse::<Gender>() {
            Ok(gender) => {
                self.state.gender = gender;
                true
            }
            Err(_) => false,
        }
    }

    /// Select unit system; unknown values are ignored and return false
    pub fn set_unit_system(&mut self, value: &str) -> bool {
        match value.parse::<UnitSystem>() {
            Ok(unit_system) => {
                self.state.unit_system = unit_system;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_age(&mut self, value: String) {
        self.state.age = value;
    }

    pub fn set_height(&mut self, value: String) {
        self.state.height = value;
    }

    pub fn set_weight(&mut self, value: String) {
        self.state.weight = value;
    }

    /// Calculate from the current entries; false leaves the old result shown
    pub fn calculate(&mut self) -> bool {
        self.state.submit()
    }

    /// Why the current entries would be declined, if they would be
    pub fn validation_message(&self) -> Option<String> {
        validation::validate_input(
            self.state.gender,
            &self.state.age,
            &self.state.height,
            &self.state.weight,
            self.state.unit_system,
        )
        .err()
        .map(|e| e.to_string())
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Latest result as JSON
    pub fn result_json(&self) -> Option<String> {
        self.state.result().and_then(|r| r.to_json().ok())
    }

    /// Input and result labels as JSON
    pub fn labels_json(&self) -> String {
        let labels = FormLabels {
            height: self.state.height_label(),
            weight: self.state.weight_label(),
            ideal_weight: format!("Ideal Weight ({})", self.state.unit_system.weight_unit()),
        };
        serde_json::to_string(&labels).unwrap_or_default()
    }
}
