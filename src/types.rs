//! Shared data model for the index and its query results.

use serde::{Deserialize, Serialize};

/// Group name of pages hanging directly off the documentation root.
///
/// The generator leaves the classification blank for such pages; hosts
/// typically render them under the top-level index.
pub const ROOT_GROUP: &str = "";

/// One resolvable destination for a search key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Human-readable text shown for this result.
    pub label: String,
    /// Opaque reference to a documentation location (e.g. a relative URL).
    pub target: String,
    /// Category the page is classified under; [`ROOT_GROUP`] when none.
    pub group: String,
}

impl Variant {
    pub fn new(
        label: impl Into<String>,
        target: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            group: group.into(),
        }
    }
}

/// One indexable unit: a normalized search key plus its destinations.
///
/// Keys are not globally unique; the index merges entries that share a key by
/// appending variants in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub variants: Vec<Variant>,
}

/// One ranked result emitted by a query.
///
/// An entry with several variants expands to one record per variant; all of
/// them share the entry's key and relevance but keep their own destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub key: String,
    pub label: String,
    pub target: String,
    pub group: String,
    pub relevance: u32,
}

/// One group's slice of a ranked result list, in original rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedMatches {
    pub group: String,
    pub records: Vec<MatchRecord>,
}
