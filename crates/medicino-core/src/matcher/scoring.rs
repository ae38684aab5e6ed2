//! Overlap scoring between input tokens and a condition's symptom tokens.

/// Count input tokens that overlap the condition's token list and normalize
/// by the condition token count.
///
/// The overlap test is symmetric substring containment, not token equality:
/// "head" matches "headache" and vice versa. This is intentional fuzzy
/// matching; it also means very short tokens can spuriously match many
/// unrelated condition tokens. An input token contributes at most 1 to the
/// match count no matter how many condition tokens it touches.
///
/// The result can exceed 1.0: input tokens are whitespace-split while
/// condition tokens are comma-split, so several input tokens can land inside
/// one multi-word condition token.
pub fn overlap_score(input_tokens: &[String], condition_tokens: &[String]) -> f64 {
    if condition_tokens.is_empty() {
        return 0.0;
    }

    let matches = input_tokens
        .iter()
        .filter(|token| {
            condition_tokens
                .iter()
                .any(|ct| token.contains(ct.as_str()) || ct.contains(token.as_str()))
        })
        .count();

    matches as f64 / condition_tokens.len() as f64
}
