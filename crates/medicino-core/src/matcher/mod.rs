//! Symptom matcher.
//!
//! Pipeline: Tokenization → Per-condition overlap scoring → Best-match selection
//!
//! The matcher is pure: it holds a read-only snapshot of the condition table
//! and performs no I/O. Persisting the query and outcome is the caller's job.

mod scoring;
mod tokenize;

pub use scoring::*;
pub use tokenize::*;

use crate::models::{Condition, DiagnosisResult};

/// A condition's overlap score must strictly exceed this to be returned as
/// a match. Exactly 0.3 is not a match.
pub const SCORE_THRESHOLD: f64 = 0.3;

/// Matcher over a fixed condition table snapshot.
pub struct SymptomMatcher<'a> {
    conditions: &'a [Condition],
}

impl<'a> SymptomMatcher<'a> {
    /// Create a matcher over the given condition records. Slice order is the
    /// table order used for tie-breaking.
    pub fn new(conditions: &'a [Condition]) -> Self {
        Self { conditions }
    }

    /// Map free-text symptom input to the best-matching condition, or the
    /// fallback payload when nothing clears the threshold.
    ///
    /// Total for any input string. Callers reject empty/whitespace-only text
    /// before invoking; if such text does reach the matcher it tokenizes to
    /// nothing and falls through to the fallback.
    pub fn diagnose(&self, symptoms_text: &str) -> DiagnosisResult {
        let input_tokens = tokenize_input(symptoms_text);

        let mut best: Option<&Condition> = None;
        let mut best_score = 0.0_f64;

        for condition in self.conditions {
            let score = overlap_score(&input_tokens, &condition.symptom_tokens());
            // Strict comparison: ties keep the first-seen condition.
            if score > best_score {
                best_score = score;
                best = Some(condition);
            }
        }

        match best {
            Some(condition) if best_score > SCORE_THRESHOLD => {
                tracing::debug!(
                    condition = %condition.condition_name,
                    score = best_score,
                    "matched condition"
                );
                DiagnosisResult::from_match(condition, best_score)
            }
            _ => {
                tracing::debug!(score = best_score, "no condition cleared the threshold");
                DiagnosisResult::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use proptest::prelude::*;

    fn make_condition(name: &str, symptoms: &str) -> Condition {
        Condition::new(
            name.into(),
            symptoms.into(),
            format!("{} remedy", name),
            format!("{} medicine", name),
            Severity::Mild,
            format!("{} description", name),
            format!("{} precautions", name),
        )
    }

    fn ten_token_condition(name: &str) -> Condition {
        make_condition(
            name,
            "alpha,bravo,charlie,delta,echo,foxtrot,golf,hotel,india,juliet",
        )
    }

    #[test]
    fn test_full_symptom_list_is_full_confidence() {
        let conditions = vec![make_condition(
            "Viral Fever",
            "fever,sore throat,body ache,headache,fatigue",
        )];
        let matcher = SymptomMatcher::new(&conditions);

        let result = matcher.diagnose("fever, sore throat, body ache, headache, fatigue");
        assert!(!result.is_fallback());
        assert_eq!(result.condition, "Viral Fever");
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_no_overlap_is_fallback() {
        let conditions = vec![
            make_condition("Common Cold", "runny nose,sneezing,cough"),
            make_condition("Migraine", "severe headache,nausea,aura"),
        ];
        let matcher = SymptomMatcher::new(&conditions);

        let result = matcher.diagnose("xyz123");
        assert!(result.is_fallback());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.severity, Severity::Unknown);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // 3 of 10 tokens match: score is exactly 0.3, which must NOT match.
        let conditions = vec![ten_token_condition("Threshold")];
        let matcher = SymptomMatcher::new(&conditions);

        let result = matcher.diagnose("alpha bravo charlie");
        assert!(result.is_fallback());

        // 4 of 10: score 0.4 clears the threshold.
        let result = matcher.diagnose("alpha bravo charlie delta");
        assert!(!result.is_fallback());
        assert_eq!(result.condition, "Threshold");
        assert_eq!(result.confidence, 40.0);
    }

    #[test]
    fn test_tie_keeps_first_in_table_order() {
        // Both conditions score 1.0 against "fever".
        let conditions = vec![
            make_condition("First", "fever"),
            make_condition("Second", "fevers"),
        ];
        let matcher = SymptomMatcher::new(&conditions);

        let result = matcher.diagnose("fever");
        assert_eq!(result.condition, "First");

        // Reversed table order flips the winner.
        let reversed: Vec<_> = conditions.into_iter().rev().collect();
        let matcher = SymptomMatcher::new(&reversed);
        let result = matcher.diagnose("fever");
        assert_eq!(result.condition, "Second");
    }

    #[test]
    fn test_strictly_better_score_wins_regardless_of_order() {
        let conditions = vec![
            make_condition("Weak", "fever,chills,sweating,shivering"),
            make_condition("Strong", "fever,chills"),
        ];
        let matcher = SymptomMatcher::new(&conditions);

        // 2/4 = 0.5 for Weak, 2/2 = 1.0 for Strong.
        let result = matcher.diagnose("fever chills");
        assert_eq!(result.condition, "Strong");
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_partial_word_matches() {
        let conditions = vec![make_condition("Tension Headache", "headache,neck pain")];
        let matcher = SymptomMatcher::new(&conditions);

        // "head" is a substring of "headache"; intentional fuzzy behavior.
        let result = matcher.diagnose("head pain");
        assert_eq!(result.condition, "Tension Headache");
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_separator_only_input_is_fallback() {
        let conditions = vec![make_condition("Common Cold", "runny nose,sneezing,cough")];
        let matcher = SymptomMatcher::new(&conditions);

        let result = matcher.diagnose(", ,, ");
        assert!(result.is_fallback());
    }

    #[test]
    fn test_empty_table_is_fallback() {
        let matcher = SymptomMatcher::new(&[]);
        let result = matcher.diagnose("fever");
        assert!(result.is_fallback());
    }

    #[test]
    fn test_confidence_rounded_to_two_decimals() {
        let conditions = vec![make_condition("Thirds", "alpha,bravo,charlie")];
        let matcher = SymptomMatcher::new(&conditions);

        // 2/3 -> 66.67 after rounding.
        let result = matcher.diagnose("alpha bravo");
        assert_eq!(result.confidence, 66.67);
    }

    #[test]
    fn test_confidence_capped_at_100() {
        // 3 input tokens land in 2 condition tokens: raw score 1.5.
        let conditions = vec![make_condition("Capped", "sore throat,body ache")];
        let matcher = SymptomMatcher::new(&conditions);

        let result = matcher.diagnose("sore throat ache");
        assert_eq!(result.condition, "Capped");
        assert_eq!(result.confidence, 100.0);
    }

    proptest! {
        #[test]
        fn prop_confidence_in_range(input in "[a-z ,]{0,40}") {
            let conditions = vec![
                make_condition("Common Cold", "runny nose,sneezing,cough"),
                make_condition("Gastritis", "stomach pain,nausea,bloating"),
                ten_token_condition("Wide"),
            ];
            let matcher = SymptomMatcher::new(&conditions);

            let result = matcher.diagnose(&input);
            prop_assert!(result.confidence >= 0.0);
            prop_assert!(result.confidence <= 100.0);
            // Two decimals: scaling by 100 yields an integer.
            let scaled = result.confidence * 100.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }

        #[test]
        fn prop_diagnose_is_idempotent(input in "[a-z ,]{0,40}") {
            let conditions = vec![
                make_condition("Common Cold", "runny nose,sneezing,cough"),
                make_condition("Gastritis", "stomach pain,nausea,bloating"),
            ];
            let matcher = SymptomMatcher::new(&conditions);

            prop_assert_eq!(matcher.diagnose(&input), matcher.diagnose(&input));
        }
    }
}
