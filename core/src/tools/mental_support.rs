use crate::tools::match_first;
use crate::traits::Tool;

pub const SAD_SUPPORT: &str =
    "💙 I'm here for you. Try journaling or reaching out to a loved one.";
pub const ANXIOUS_SUPPORT: &str = "🧘‍♂️ Take a deep breath. Grounding exercises can help.";
pub const NOT_ALONE: &str = "🫶 You are not alone. Would you like a motivational quote?";

pub fn provide_mental_support(feeling: &str) -> String {
    match_first(
        feeling,
        &[("sad", SAD_SUPPORT), ("anxious", ANXIOUS_SUPPORT)],
        NOT_ALONE,
    )
}

pub struct MentalSupportTool;

impl Tool for MentalSupportTool {
    fn name(&self) -> &str {
        "provide_mental_support"
    }

    fn description(&self) -> &str {
        "Responds supportively to mental health keywords"
    }

    fn parameter_name(&self) -> &str {
        "feeling"
    }

    fn advise(&self, input: &str) -> String {
        provide_mental_support(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sad_wins_over_anxious() {
        assert_eq!(provide_mental_support("I'm sad and anxious"), SAD_SUPPORT);
    }

    #[test]
    fn anxious_is_case_insensitive() {
        assert_eq!(provide_mental_support("Feeling ANXIOUS today"), ANXIOUS_SUPPORT);
    }

    #[test]
    fn anything_else_gets_reassurance() {
        assert_eq!(provide_mental_support("tired"), NOT_ALONE);
        assert_eq!(provide_mental_support(""), NOT_ALONE);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = provide_mental_support("so anxious about exams");
        let second = provide_mental_support("so anxious about exams");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
