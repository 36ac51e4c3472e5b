//! Text rendering of a calculation result

use body_metrics_shared::MetricsResult;

pub const DISCLAIMER: &str =
    "* Results are estimates. Consult healthcare professionals for medical advice.";

/// Render the results card shown after a successful calculation
pub fn results_card(result: &MetricsResult) -> String {
    format!(
        "Your Results\n\
         \x20 Body Mass Index:  {bmi:.1} ({category})\n\
         \x20 Ideal Weight:     {ideal:.1} {unit}\n\
         \x20 Est. Body Fat:    {fat:.1}%\n\
         \n\
         Health Tip: {tip}\n\
         \n\
         {DISCLAIMER}",
        bmi = result.bmi,
        category = result.category,
        ideal = result.ideal_weight,
        unit = result.ideal_weight_unit(),
        fat = result.body_fat_percent,
        tip = result.advisory,
    )
}
