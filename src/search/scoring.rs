//! Search relevance and ranking tiers.
//!
//! Relevance is a coarse tier, not a similarity score: within a tier the
//! matcher keeps key insertion order, which is what makes result ordering
//! reproducible across identical builds.

/// The query equals the key.
pub const EXACT_MATCH: u32 = 100;
/// The key starts with the query.
pub const PREFIX_MATCH: u32 = 50;
/// The query (or each of its tokens) occurs somewhere inside the key.
pub const SUBSTRING_MATCH: u32 = 10;

/// Scores a key against a normalized query and its tokens.
///
/// `needle` must already be trimmed and lowercased; `tokens` must be the
/// tokenization of the same query. Returns the relevance tier, or `None`
/// when the key does not match:
/// - [`EXACT_MATCH`]: key equals the query
/// - [`PREFIX_MATCH`]: key starts with the query
/// - [`SUBSTRING_MATCH`]: key contains the query, or contains every token
///   of a multi-word query
pub(crate) fn key_relevance(key: &str, needle: &str, tokens: &[String]) -> Option<u32> {
    if key == needle {
        Some(EXACT_MATCH)
    } else if key.starts_with(needle) {
        Some(PREFIX_MATCH)
    } else if key.contains(needle) {
        Some(SUBSTRING_MATCH)
    } else if !tokens.is_empty() && tokens.iter().all(|token| key.contains(token.as_str())) {
        Some(SUBSTRING_MATCH)
    } else {
        None
    }
}
