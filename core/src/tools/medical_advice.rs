use crate::tools::match_first;
use crate::traits::Tool;

pub const FEVER_ADVICE: &str = "🩺 For fever: Stay hydrated, rest, and consider paracetamol.";
pub const HEADACHE_ADVICE: &str = "💊 For headache: Try rest, drink water, and avoid screen time.";
pub const SEE_A_DOCTOR: &str = "⚠️ Please consult a doctor for specific advice.";

pub fn give_medical_advice(symptom: &str) -> String {
    match_first(
        symptom,
        &[("fever", FEVER_ADVICE), ("headache", HEADACHE_ADVICE)],
        SEE_A_DOCTOR,
    )
}

pub struct MedicalAdviceTool;

impl Tool for MedicalAdviceTool {
    fn name(&self) -> &str {
        "give_medical_advice"
    }

    fn description(&self) -> &str {
        "Provides basic medical advice based on symptom"
    }

    fn parameter_name(&self) -> &str {
        "symptom"
    }

    fn advise(&self, input: &str) -> String {
        give_medical_advice(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fever_wins_over_headache() {
        assert_eq!(give_medical_advice("Fever and a HEADACHE since monday"), FEVER_ADVICE);
        assert_eq!(give_medical_advice("headache, maybe a fever?"), FEVER_ADVICE);
    }

    #[test]
    fn headache_and_fallback() {
        assert_eq!(give_medical_advice("I have a headache"), HEADACHE_ADVICE);
        assert_eq!(give_medical_advice("I feel fine"), SEE_A_DOCTOR);
        assert_eq!(give_medical_advice(""), SEE_A_DOCTOR);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = give_medical_advice("slight fever");
        let second = give_medical_advice("slight fever");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn execute_reads_symptom_argument() {
        let tool = MedicalAdviceTool;
        let reply = tool.execute(r#"{"symptom": "headache"}"#).unwrap();
        assert_eq!(reply, HEADACHE_ADVICE);
    }

    #[test]
    fn execute_rejects_wrong_parameter() {
        let err = MedicalAdviceTool.execute(r#"{"feeling": "fever"}"#).unwrap_err();
        assert!(err.is_backend());
        assert!(err.to_string().contains("symptom"));
    }

    #[test]
    fn spec_declares_single_required_string() {
        let spec = MedicalAdviceTool.spec();
        assert_eq!(spec.name, "give_medical_advice");
        assert_eq!(spec.parameters_schema["required"][0], "symptom");
        assert_eq!(
            spec.parameters_schema["properties"]["symptom"]["type"],
            "string"
        );
    }
}
