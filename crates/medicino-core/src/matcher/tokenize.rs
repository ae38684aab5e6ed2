//! Symptom text tokenization.

/// Tokenize free-text symptom input: lower-case, split on any run of commas
/// or whitespace, discard empty tokens. Duplicates are kept; order does not
/// affect scoring.
pub fn tokenize_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
