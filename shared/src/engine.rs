//! Metrics engine
//!
//! Runs the full pipeline: validation, unit normalization, the formula
//! stage and classification. `calculate` keeps the form's contract of
//! silently declining bad input; `try_calculate` reports why.

use tracing::debug;

use crate::errors::InputError;
use crate::health_metrics::{classify_bmi, evaluate, round_to_tenth, Gender};
use crate::models::{MeasurementInput, MetricsResult};
use crate::units::{normalize, UnitSystem};
use crate::validation::validate_input;

/// Run the pipeline on an input that has already passed validation
pub fn compute(input: &MeasurementInput) -> MetricsResult {
    let measurements = normalize(input.height, input.weight, input.unit_system);
    let outputs = evaluate(&measurements, input.age_years, input.gender, input.unit_system);
    // Classification uses the unrounded BMI.
    let category = classify_bmi(outputs.bmi);

    let result = MetricsResult {
        bmi: round_to_tenth(outputs.bmi),
        ideal_weight: round_to_tenth(outputs.ideal_weight),
        body_fat_percent: round_to_tenth(outputs.body_fat_percent),
        category,
        advisory: category.advisory().to_string(),
        unit_system: input.unit_system,
    };

    debug!(
        bmi = result.bmi,
        category = %result.category,
        unit_system = %result.unit_system,
        "Computed body metrics"
    );
    result
}

/// Validate the raw entries and compute, reporting why input was declined
pub fn try_calculate(
    gender: Gender,
    age: &str,
    height: &str,
    weight: &str,
    unit_system: UnitSystem,
) -> Result<MetricsResult, InputError> {
    let input = validate_input(gender, age, height, weight, unit_system)?;
    Ok(compute(&input))
}

/// Validate the raw entries and compute
///
/// Returns `None` when any numeric field is missing, not a number, or below 1.
pub fn calculate(
    gender: Gender,
    age: &str,
    height: &str,
    weight: &str,
    unit_system: UnitSystem,
) -> Option<MetricsResult> {
    match try_calculate(gender, age, height, weight, unit_system) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!(error = %e, "Declined calculation");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::BmiCategory;
    use proptest::prelude::*;

    #[test]
    fn test_metric_male() {
        let result = calculate(Gender::Male, "30", "180", "75", UnitSystem::Metric).unwrap();
        assert_eq!(result.bmi, 23.1);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.ideal_weight, 95.1);
        assert_eq!(result.body_fat_percent, 18.5);
        assert_eq!(result.advisory, BmiCategory::Normal.advisory());
    }

    #[test]
    fn test_imperial_male() {
        let result = calculate(Gender::Male, "40", "6", "180", UnitSystem::Imperial).unwrap();
        assert_eq!(result.bmi, 24.4);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.ideal_weight, 218.6);
        assert_eq!(result.ideal_weight_unit().abbreviation(), "lbs");
    }

    #[test]
    fn test_declines_invalid_input() {
        assert!(calculate(Gender::Male, "", "180", "75", UnitSystem::Metric).is_none());
        assert!(calculate(Gender::Male, "30", "tall", "75", UnitSystem::Metric).is_none());
        assert!(calculate(Gender::Male, "30", "180", "0", UnitSystem::Metric).is_none());
    }

    #[test]
    fn test_try_calculate_reports_reason() {
        let err = try_calculate(Gender::Female, "25", "160", "0.9", UnitSystem::Metric).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { .. }));
    }

    #[test]
    fn test_category_from_unrounded_bmi() {
        // 24.96 rounds to 25.0 for display but is still Normal
        let input = MeasurementInput {
            gender: Gender::Female,
            age_years: 30.0,
            height: 100.0,
            weight: 24.96,
            unit_system: UnitSystem::Metric,
        };
        let result = compute(&input);
        assert_eq!(result.bmi, 25.0);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: identical inputs give identical results
        #[test]
        fn prop_deterministic(
            age in 1.0f64..120.0,
            height in 1.0f64..300.0,
            weight in 1.0f64..500.0,
            imperial in any::<bool>()
        ) {
            let system = if imperial { UnitSystem::Imperial } else { UnitSystem::Metric };
            let (a, h, w) = (age.to_string(), height.to_string(), weight.to_string());
            let first = calculate(Gender::Female, &a, &h, &w, system);
            let second = calculate(Gender::Female, &a, &h, &w, system);
            prop_assert!(first.is_some());
            prop_assert_eq!(first, second);
        }
    }
}
