//! Closest-name suggestion for medicine lookups.
//!
//! Used only when a catalog lookup misses, to offer a "did you mean"
//! candidate. Never used by the symptom matcher, whose substring semantics
//! are fixed.

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::Medicine;

/// Minimum similarity for a name to be offered as a suggestion.
const MIN_SIMILARITY: f64 = 0.75;

/// Find the catalog medicine whose name is closest to the query, if any is
/// close enough to be worth suggesting.
pub fn closest_medicine<'a>(query: &str, medicines: &'a [Medicine]) -> Option<&'a Medicine> {
    let query_lower = query.to_lowercase();

    medicines
        .iter()
        .map(|m| (m, name_similarity(&query_lower, &m.name.to_lowercase())))
        .filter(|(_, similarity)| *similarity >= MIN_SIMILARITY)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(m, _)| m)
}

/// Compute fuzzy string similarity using combined metrics.
fn name_similarity(a: &str, b: &str) -> f64 {
    // Combine Jaro-Winkler (good for typos) and Levenshtein (good for overall similarity)
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    // Weight Jaro-Winkler more heavily as it's better for prefix matching
    jw * 0.6 + lev * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Medicine> {
        vec![
            Medicine::new("Paracetamol".into(), "".into(), "Pain Relief".into()),
            Medicine::new("Ibuprofen".into(), "".into(), "Pain Relief".into()),
            Medicine::new("Amoxicillin".into(), "".into(), "Antibiotics".into()),
        ]
    }

    #[test]
    fn test_suggests_on_typo() {
        let medicines = catalog();
        let suggestion = closest_medicine("paracetamol", &medicines).unwrap();
        assert_eq!(suggestion.name, "Paracetamol");

        let suggestion = closest_medicine("paracetmol", &medicines).unwrap();
        assert_eq!(suggestion.name, "Paracetamol");

        let suggestion = closest_medicine("ibuprofin", &medicines).unwrap();
        assert_eq!(suggestion.name, "Ibuprofen");
    }

    #[test]
    fn test_no_suggestion_for_unrelated_query() {
        let medicines = catalog();
        assert!(closest_medicine("xyz123", &medicines).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(closest_medicine("paracetamol", &[]).is_none());
    }

    #[test]
    fn test_name_similarity() {
        assert!(name_similarity("paracetamol", "paracetamol") > 0.99);
        assert!(name_similarity("paracetamol", "paracetmol") > 0.9);
        assert!(name_similarity("paracetamol", "ibuprofen") < 0.6);
    }
}
