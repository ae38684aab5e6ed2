//! Diagnosis history models.

use serde::{Deserialize, Serialize};

use super::diagnosis::DiagnosisResult;

/// One append-only record of a diagnosis request and its outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// Unique entry id
    pub entry_id: String,
    /// Optional requesting user identity
    pub user_id: Option<String>,
    /// Raw symptom text as submitted
    pub symptoms: String,
    /// Condition name returned (or the fallback text)
    pub diagnosed_condition: String,
    /// Remedy returned
    pub ayurvedic_remedy: String,
    /// Medicine suggestion returned
    pub medicine_suggestion: String,
    /// Confidence percentage returned (0-100)
    pub confidence: f64,
    /// Feedback later attached by the user, if any
    pub user_feedback: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl HistoryEntry {
    /// Build a history entry from a diagnosis request and its result.
    pub fn from_result(
        symptoms: String,
        user_id: Option<String>,
        result: &DiagnosisResult,
    ) -> Self {
        Self {
            entry_id: uuid::Uuid::new_v4().to_string(),
            user_id,
            symptoms,
            diagnosed_condition: result.condition.clone(),
            ayurvedic_remedy: result.ayurvedic_remedy.clone(),
            medicine_suggestion: result.medicine_suggestion.clone(),
            confidence: result.confidence,
            user_feedback: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let result = DiagnosisResult::fallback();
        let entry = HistoryEntry::from_result("xyz123".into(), Some("user-1".into()), &result);

        assert_eq!(entry.symptoms, "xyz123");
        assert_eq!(entry.user_id.as_deref(), Some("user-1"));
        assert_eq!(entry.diagnosed_condition, result.condition);
        assert_eq!(entry.confidence, 0.0);
        assert_eq!(entry.entry_id.len(), 36); // UUID format
        assert!(entry.user_feedback.is_none());
    }
}
