//! Incremental search over documentation page index shards.
//!
//! The crate ingests the static key → page-reference tables a documentation
//! build emits alongside its HTML (one table per leading-letter shard), merges
//! them into an immutable [`SearchIndex`], and answers per-keystroke queries
//! with ranked, groupable results. See [`search::match_query`] for the
//! matching and ranking rules and [`shard`] for the wire format.

pub mod error;
pub mod search;
pub mod shard;
pub mod tracing;
pub mod types;

pub use error::{BuildError, Result, ShardError};
pub use search::{
    IndexBuilder, MalformedPolicy, QueryState, SearchIndex, group_view, match_query,
};
pub use types::{Entry, GroupedMatches, MatchRecord, Variant};
