//! Condition reference models.

use serde::{Deserialize, Serialize};

/// Coarse severity label attached to a condition record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    /// Used only by the fallback diagnosis payload.
    Unknown,
}

impl Severity {
    /// Canonical storage string for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Unknown => "unknown",
        }
    }

    /// Parse a storage string back into a severity.
    pub fn parse(s: &str) -> Option<Severity> {
        match s {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "severe" => Some(Severity::Severe),
            "unknown" => Some(Severity::Unknown),
            _ => None,
        }
    }
}

/// A named medical condition with its symptom profile and recommended
/// remedies. Immutable reference data, loaded at setup time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    /// Table-order id. Ties between equally scored conditions resolve to
    /// the lower id.
    pub id: i64,
    /// Condition name - unique within the reference table
    pub condition_name: String,
    /// Comma-separated symptom list as stored (e.g., "fever,cough,fatigue")
    pub symptoms: String,
    /// Recommended Ayurvedic remedy text
    pub ayurvedic_remedy: String,
    /// Recommended medicine suggestion text
    pub medicine_suggestion: String,
    /// Severity label
    pub severity: Severity,
    /// Short description of the condition
    pub description: String,
    /// Precaution guidance
    pub precautions: String,
}

impl Condition {
    /// Create a condition record with an unassigned id (0). The database
    /// layer assigns the real id on insert.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        condition_name: String,
        symptoms: String,
        ayurvedic_remedy: String,
        medicine_suggestion: String,
        severity: Severity,
        description: String,
        precautions: String,
    ) -> Self {
        Self {
            id: 0,
            condition_name,
            symptoms,
            ayurvedic_remedy,
            medicine_suggestion,
            severity,
            description,
            precautions,
        }
    }

    /// Split the stored symptom string into scoring tokens: comma-separated,
    /// trimmed, lower-cased. Empty pieces are kept on purpose - they count
    /// toward the score denominator exactly as stored.
    pub fn symptom_tokens(&self) -> Vec<String> {
        self.symptoms
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect()
    }
}
