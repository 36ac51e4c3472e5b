//! Health metrics formulas
//!
//! BMI, ideal body weight (D.R. Miller), body-fat estimate (Deurenberg) and
//! the four-bucket BMI classification. All functions work on the normalized
//! metric values produced by [`crate::units::normalize`].
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Full Precision**: Rounding happens once, when a result is built

use rust_decimal::prelude::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::{NormalizedMeasurements, UnitSystem};

// ============================================================================
// Gender
// ============================================================================

/// Gender as used by the ideal-weight and body-fat formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Sex term of the Deurenberg equation: 1 for male, 0 for female
    pub fn deurenberg_factor(&self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Lower bound of the Normal band
    pub const NORMAL_MIN: f64 = 18.5;
    /// Lower bound of the Overweight band
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Lower bound of the Obese band
    pub const OBESE_MIN: f64 = 30.0;

    /// BMI range for this category, inclusive lower bound and exclusive upper bound
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (f64::NEG_INFINITY, Self::NORMAL_MIN),
            BmiCategory::Normal => (Self::NORMAL_MIN, Self::OVERWEIGHT_MIN),
            BmiCategory::Overweight => (Self::OVERWEIGHT_MIN, Self::OBESE_MIN),
            BmiCategory::Obese => (Self::OBESE_MIN, f64::INFINITY),
        }
    }

    /// Category label as shown on the results badge
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Health tip shown with the result
    pub fn advisory(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Consider consulting a healthcare provider about healthy weight gain strategies."
            }
            BmiCategory::Normal => {
                "Great! Maintain your healthy lifestyle with balanced nutrition and regular exercise."
            }
            BmiCategory::Overweight => {
                "Consider a balanced diet and regular physical activity to reach a healthier weight."
            }
            BmiCategory::Obese => {
                "Consult with a healthcare provider for a personalized weight management plan."
            }
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BmiCategory::NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BmiCategory::OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BmiCategory::OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// Ideal Weight
// ============================================================================

/// Height (cm) the Miller formula is anchored at: five feet
const MILLER_BASE_HEIGHT_CM: f64 = 152.4;

/// Ideal body weight in kilograms using D.R. Miller's formula
///
/// Men: 56.2 + 1.41 × (height(cm) - 152.4)
/// Women: 53.1 + 1.36 × (height(cm) - 152.4)
///
/// Heights under five feet are not clamped; the result shrinks linearly.
pub fn ideal_weight_miller_kg(height_cm: f64, gender: Gender) -> f64 {
    let over_base = height_cm - MILLER_BASE_HEIGHT_CM;
    match gender {
        Gender::Male => 56.2 + 1.41 * over_base,
        Gender::Female => 53.1 + 1.36 * over_base,
    }
}

/// Express an ideal weight (kg) in the weight unit of `unit_system`
pub fn ideal_weight_for_display(ideal_kg: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => ideal_kg,
        UnitSystem::Imperial => ideal_kg * crate::units::LBS_PER_KG,
    }
}

// ============================================================================
// Body Fat Estimation
// ============================================================================

/// Estimate body fat percentage from BMI (Deurenberg)
///
/// Formula: BF% = 1.20 × BMI + 0.23 × Age - 10.8 × sex - 5.4
/// where sex = 1 for male, 0 for female.
/// Floored at zero, no upper cap.
pub fn estimate_body_fat_deurenberg(bmi: f64, age_years: f64, gender: Gender) -> f64 {
    let bf = 1.20 * bmi + 0.23 * age_years - 10.8 * gender.deurenberg_factor() - 5.4;
    bf.max(0.0)
}

// ============================================================================
// Evaluation
// ============================================================================

/// Unrounded output of the formula stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormulaOutputs {
    pub bmi: f64,
    /// Ideal weight in the display unit of the input's unit system
    pub ideal_weight: f64,
    pub body_fat_percent: f64,
}

/// Apply all three formulas to normalized measurements
pub fn evaluate(
    measurements: &NormalizedMeasurements,
    age_years: f64,
    gender: Gender,
    unit_system: UnitSystem,
) -> FormulaOutputs {
    let bmi = calculate_bmi(measurements.weight_kg, measurements.height_m);
    let ideal_kg = ideal_weight_miller_kg(measurements.height_cm, gender);

    FormulaOutputs {
        bmi,
        ideal_weight: ideal_weight_for_display(ideal_kg, unit_system),
        body_fat_percent: estimate_body_fat_deurenberg(bmi, age_years, gender),
    }
}

/// Round to one decimal place for display
///
/// Rounds the exact binary value, with exact midpoints going away from zero,
/// so 13.549999999999999 becomes 13.5 and 0.25 becomes 0.3. Values too large
/// for a `Decimal` are returned unchanged.
pub fn round_to_tenth(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::normalize;
    use proptest::prelude::*;

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        // 75kg, 1.8m -> BMI ~23.15
        let bmi = calculate_bmi(75.0, 1.8);
        assert!((bmi - 23.148).abs() < 0.001);
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(classify_bmi(15.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(22.0), BmiCategory::Normal);
        assert_eq!(classify_bmi(27.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(42.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(classify_bmi(18.499_999), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(24.999_999), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(29.999_999), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_advisory_text() {
        assert!(BmiCategory::Underweight.advisory().contains("weight gain"));
        assert!(BmiCategory::Normal.advisory().starts_with("Great!"));
        assert!(BmiCategory::Overweight.advisory().contains("physical activity"));
        assert!(BmiCategory::Obese.advisory().contains("weight management"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: exactly one category's range contains any BMI
        #[test]
        fn prop_categories_partition(bmi in -10.0f64..100.0) {
            let all = [
                BmiCategory::Underweight,
                BmiCategory::Normal,
                BmiCategory::Overweight,
                BmiCategory::Obese,
            ];
            let containing: Vec<_> = all
                .iter()
                .filter(|c| {
                    let (lo, hi) = c.range();
                    bmi >= lo && bmi < hi
                })
                .collect();
            prop_assert_eq!(containing.len(), 1);
            prop_assert_eq!(*containing[0], classify_bmi(bmi));
        }

        /// Property: heavier weight = higher BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 1.0f64..100.0,
            weight2 in 100.0f64..300.0,
            height in 1.0f64..2.5
        ) {
            prop_assert!(calculate_bmi(weight2, height) > calculate_bmi(weight1, height));
        }
    }

    // =========================================================================
    // Ideal Weight Tests
    // =========================================================================

    #[test]
    fn test_ideal_weight_miller() {
        let male = ideal_weight_miller_kg(180.0, Gender::Male);
        assert!((male - 95.116).abs() < 1e-9);

        let female = ideal_weight_miller_kg(160.0, Gender::Female);
        assert!((female - 63.436).abs() < 1e-9);
    }

    #[test]
    fn test_ideal_weight_at_five_feet() {
        assert!((ideal_weight_miller_kg(152.4, Gender::Male) - 56.2).abs() < 1e-9);
        assert!((ideal_weight_miller_kg(152.4, Gender::Female) - 53.1).abs() < 1e-9);
    }

    #[test]
    fn test_ideal_weight_display_conversion() {
        assert_eq!(ideal_weight_for_display(70.0, UnitSystem::Metric), 70.0);
        let lbs = ideal_weight_for_display(70.0, UnitSystem::Imperial);
        assert!((lbs - 154.3234).abs() < 1e-4);
    }

    // =========================================================================
    // Body Fat Tests
    // =========================================================================

    #[test]
    fn test_body_fat_estimate() {
        let bf = estimate_body_fat_deurenberg(calculate_bmi(75.0, 1.8), 30.0, Gender::Male);
        assert!((bf - 18.478).abs() < 0.001);
    }

    #[test]
    fn test_body_fat_floored_at_zero() {
        assert_eq!(estimate_body_fat_deurenberg(1.0, 1.0, Gender::Male), 0.0);
    }

    #[test]
    fn test_body_fat_not_capped() {
        let bf = estimate_body_fat_deurenberg(80.0, 90.0, Gender::Female);
        assert!(bf > 100.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: body fat is never negative for any valid entry
        #[test]
        fn prop_body_fat_non_negative(
            age in 1.0f64..120.0,
            height in 1.0f64..300.0,
            weight in 1.0f64..500.0,
            male in any::<bool>(),
            imperial in any::<bool>()
        ) {
            let gender = if male { Gender::Male } else { Gender::Female };
            let system = if imperial { UnitSystem::Imperial } else { UnitSystem::Metric };
            let out = evaluate(&normalize(height, weight, system), age, gender, system);
            prop_assert!(out.body_fat_percent >= 0.0);
        }

        /// Property: at equal inputs, the male estimate never exceeds the female one
        #[test]
        fn prop_male_body_fat_not_higher(bmi in 10.0f64..50.0, age in 18.0f64..80.0) {
            let male = estimate_body_fat_deurenberg(bmi, age, Gender::Male);
            let female = estimate_body_fat_deurenberg(bmi, age, Gender::Female);
            prop_assert!(male <= female);
        }
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(23.148), 23.1);
        assert_eq!(round_to_tenth(18.478), 18.5);
        assert_eq!(round_to_tenth(63.436), 63.4);
        assert_eq!(round_to_tenth(95.116), 95.1);
    }

    #[test]
    fn test_round_to_tenth_uses_exact_value() {
        // Stored just below the midpoint: must not round up
        assert_eq!(round_to_tenth(13.549999999999999), 13.5);
        assert_eq!(round_to_tenth(19.65), 19.6);
        // Exactly representable midpoints go up
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(2.75), 2.8);
        assert_eq!(round_to_tenth(1.05), 1.1);
        assert_eq!(round_to_tenth(0.0), 0.0);
        assert_eq!(round_to_tenth(1e300), 1e300);
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert!("other".parse::<Gender>().is_err());
    }
}
