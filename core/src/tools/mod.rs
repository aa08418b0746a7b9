use serde_json::Value;

pub mod meal_plan;
pub mod medical_advice;
pub mod mental_support;

pub use meal_plan::{MealPlanTool, plan_meal};
pub use medical_advice::{MedicalAdviceTool, give_medical_advice};
pub use mental_support::{MentalSupportTool, provide_mental_support};

pub fn extract_string_arg(args: &Value, key: &str) -> anyhow::Result<String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' parameter", key))
        .map(|s| s.to_string())
}

/// Returns the reply of the first keyword found in `input`, checked in order.
pub(crate) fn match_first(
    input: &str,
    rules: &[(&str, &'static str)],
    fallback: &'static str,
) -> String {
    let lowered = input.to_lowercase();
    rules
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(fallback, |(_, reply)| *reply)
        .to_string()
}
