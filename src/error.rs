//! Error handling types and utilities.

/// A specialized Result type for pagesearch operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods at the host-facing edges.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when index construction rejects its input.
///
/// Only raised under [`MalformedPolicy::Abort`](crate::search::MalformedPolicy);
/// the default policy skips malformed entries with a warning instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// An entry arrived with no variants, so a match against it could never
    /// resolve to a destination.
    #[error("entry '{key}' has no variants")]
    MalformedEntry { key: String },
}

/// Error returned when a shard table cannot be decoded.
///
/// A shard either parses completely or not at all; no partial entry list is
/// ever produced from a half-read table.
#[derive(Debug, thiserror::Error)]
pub enum ShardError {
    /// The table text is not valid JSON.
    #[error("shard is not a valid JSON table: {0}")]
    Json(#[from] serde_json::Error),
    /// The decoded document is not an array of rows.
    #[error("shard does not contain a table of rows")]
    NotATable,
    /// The script form stopped scanning at an unexpected character.
    #[error("unexpected character '{found}' at byte {offset} in shard script")]
    Script { found: char, offset: usize },
    /// The script form ended mid-value.
    #[error("shard script ended unexpectedly at byte {offset}")]
    UnexpectedEnd { offset: usize },
    /// A string literal in the script form never closed.
    #[error("unterminated string starting at byte {offset} in shard script")]
    UnterminatedString { offset: usize },
    /// A row is not shaped like `[key, [label, link, ...]]`.
    #[error("shard row {row} is not `[key, [label, links...]]`")]
    MalformedRow { row: usize },
    /// A link array carries no target reference.
    #[error("link without a target in shard row {row}")]
    MissingTarget { row: usize },
}
