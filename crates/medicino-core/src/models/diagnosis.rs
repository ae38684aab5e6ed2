//! Diagnosis result models.

use serde::{Deserialize, Serialize};

use super::condition::{Condition, Severity};

/// Fallback text returned when no condition clears the score threshold.
pub const FALLBACK_CONDITION: &str = "Unable to determine condition";
const FALLBACK_AYURVEDIC: &str =
    "Please consult an Ayurvedic practitioner for personalized treatment.";
const FALLBACK_MEDICINE: &str =
    "Please consult a healthcare professional for proper diagnosis.";
const FALLBACK_DESCRIPTION: &str =
    "Your symptoms do not strongly match any known conditions in our database.";
const FALLBACK_PRECAUTIONS: &str =
    "Always seek professional medical advice for an accurate diagnosis.";

/// The outcome of a diagnosis request.
///
/// Either the best-matching condition's fields with the overlap score
/// expressed as a percentage, or the fixed fallback payload advising
/// professional consultation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisResult {
    /// Matched condition name, or the fallback text
    pub condition: String,
    /// Ayurvedic remedy guidance
    pub ayurvedic_remedy: String,
    /// Medicine suggestion
    pub medicine_suggestion: String,
    /// Overlap score as a percentage (0-100, 2 decimals)
    pub confidence: f64,
    /// Severity of the matched condition, `Unknown` for the fallback
    pub severity: Severity,
    /// Condition description
    pub description: String,
    /// Precaution guidance
    pub precautions: String,
}

impl DiagnosisResult {
    /// Build a result from a matched condition and its raw overlap score.
    /// The confidence is the score as a percentage rounded to two decimals.
    ///
    /// The raw score can exceed 1.0 when several whitespace-split input
    /// tokens each land inside one multi-word condition token; the reported
    /// confidence is capped at 100.
    pub fn from_match(condition: &Condition, score: f64) -> Self {
        let score = score.min(1.0);
        Self {
            condition: condition.condition_name.clone(),
            ayurvedic_remedy: condition.ayurvedic_remedy.clone(),
            medicine_suggestion: condition.medicine_suggestion.clone(),
            confidence: (score * 100.0 * 100.0).round() / 100.0,
            severity: condition.severity,
            description: condition.description.clone(),
            precautions: condition.precautions.clone(),
        }
    }

    /// The fixed no-confident-match payload.
    pub fn fallback() -> Self {
        Self {
            condition: FALLBACK_CONDITION.into(),
            ayurvedic_remedy: FALLBACK_AYURVEDIC.into(),
            medicine_suggestion: FALLBACK_MEDICINE.into(),
            confidence: 0.0,
            severity: Severity::Unknown,
            description: FALLBACK_DESCRIPTION.into(),
            precautions: FALLBACK_PRECAUTIONS.into(),
        }
    }

    /// Whether this is the fallback payload rather than a condition match.
    pub fn is_fallback(&self) -> bool {
        self.condition == FALLBACK_CONDITION
    }

    /// Serialize to JSON for transport layers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_match_rounds_confidence() {
        let condition = Condition::new(
            "Common Cold".into(),
            "runny nose,sneezing,cough".into(),
            "Tulsi tea".into(),
            "Paracetamol".into(),
            Severity::Mild,
            "Viral infection".into(),
            "Rest".into(),
        );

        // 1/3 -> 33.33
        let result = DiagnosisResult::from_match(&condition, 1.0 / 3.0);
        assert_eq!(result.confidence, 33.33);
        assert_eq!(result.condition, "Common Cold");
        assert_eq!(result.severity, Severity::Mild);
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_fallback_payload() {
        let result = DiagnosisResult::fallback();
        assert!(result.is_fallback());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.severity, Severity::Unknown);
    }

    #[test]
    fn test_json_round_trip() {
        let result = DiagnosisResult::fallback();
        let json = result.to_json().unwrap();
        assert!(json.contains("\"severity\":\"unknown\""));

        let parsed: DiagnosisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
