//! Key normalization and query tokenization.

/// Normalizes a title or raw key into index key form.
///
/// Lowercases the input and rejoins words with `_`: every run of whitespace
/// collapses to a single underscore, leading and trailing whitespace is
/// dropped, and digits and punctuation pass through untouched. Idempotent,
/// so keys that arrive already normalized from a shard are unchanged.
///
/// - `"Eigen Tensors"` → `"eigen_tensors"`
/// - `"The template  and typename"` → `"the_template_and_typename"`
/// - `"eigen_tensors"` → `"eigen_tensors"`
pub fn normalize_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut pending_join = false;

    for c in raw.trim().chars() {
        if c.is_whitespace() {
            pending_join = true;
            continue;
        }
        if pending_join {
            key.push('_');
            pending_join = false;
        }
        for lower in c.to_lowercase() {
            key.push(lower);
        }
    }

    key
}

/// Splits a query into lowercase tokens on non-alphanumeric boundaries.
///
/// An empty result means the query carries no searchable content (empty, or
/// punctuation/whitespace only) and the matcher reports no results for it.
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
