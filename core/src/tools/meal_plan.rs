use crate::tools::match_first;
use crate::traits::Tool;

pub const WEIGHT_GAIN_MEAL: &str =
    "🍽️ Meal Plan: Chicken curry, brown rice, boiled eggs, banana shake.";
pub const WEIGHT_LOSS_MEAL: &str = "🥗 Meal Plan: Grilled fish, steamed veggies, green tea, apple.";
pub const BALANCED_DIET: &str = "🥘 Balanced Diet: Daal, roti, yogurt, seasonal fruits.";

pub fn plan_meal(goal: &str) -> String {
    match_first(
        goal,
        &[
            ("weight gain", WEIGHT_GAIN_MEAL),
            ("weight loss", WEIGHT_LOSS_MEAL),
        ],
        BALANCED_DIET,
    )
}

pub struct MealPlanTool;

impl Tool for MealPlanTool {
    fn name(&self) -> &str {
        "plan_meal"
    }

    fn description(&self) -> &str {
        "Suggests meal based on goal"
    }

    fn parameter_name(&self) -> &str {
        "goal"
    }

    fn advise(&self, input: &str) -> String {
        plan_meal(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_goals() {
        assert_eq!(plan_meal("I want weight loss"), WEIGHT_LOSS_MEAL);
        assert_eq!(plan_meal("Weight Gain please"), WEIGHT_GAIN_MEAL);
        assert_eq!(plan_meal("weight gain or weight loss"), WEIGHT_GAIN_MEAL);
    }

    #[test]
    fn no_partial_phrase_match() {
        assert_eq!(plan_meal("lose weight"), BALANCED_DIET);
        assert_eq!(plan_meal(""), BALANCED_DIET);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = plan_meal("steady weight gain");
        let second = plan_meal("steady weight gain");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
