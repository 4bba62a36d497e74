//! Per-keystroke query matching with incremental narrowing.

use crate::types::{Entry, MatchRecord};

use super::index::SearchIndex;
use super::scoring::key_relevance;
use super::tokenize::query_tokens;

/// Ephemeral state for one search session.
///
/// Created by the first [`match_query`] call, threaded through every
/// subsequent call, and dropped when the session ends. State belongs to
/// exactly one session and to the index that produced it; it is never
/// shared across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// The query exactly as typed.
    query: String,
    /// Lowercased tokens of `query`; empty when the query has no
    /// searchable content and therefore filtered nothing.
    tokens: Vec<String>,
    /// Slots of entries matching `query`, in insertion order.
    candidates: Vec<usize>,
}

impl QueryState {
    /// The query string this state was computed for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of entries still matching.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Whether this state can seed the scan for `query`.
    ///
    /// True only when the user typed forward: the old query is a strict
    /// prefix of the new one. A longer query can never match an entry the
    /// shorter one excluded, so scanning the old candidates is lossless.
    /// The token guard matters: a punctuation-only query matched nothing by
    /// policy rather than by narrowing, so its empty candidate set proves
    /// nothing about extensions of it.
    fn narrows(&self, query: &str) -> bool {
        !self.tokens.is_empty() && query.len() > self.query.len() && query.starts_with(&self.query)
    }

    fn unfiltered(query: &str) -> Self {
        Self {
            query: query.to_string(),
            tokens: Vec::new(),
            candidates: Vec::new(),
        }
    }
}

/// Matches `query` against the index and returns ranked records plus the
/// state that accelerates the next keystroke.
///
/// Matching is case-insensitive and total: every query yields a (possibly
/// empty) result list, never an error. An entry matches when its key
/// contains the query as a substring, or when every token of a multi-word
/// query occurs somewhere in the key. The empty query matches nothing, and
/// so does any query that is only punctuation or whitespace.
///
/// Ranking: exact key equality, then key prefix, then substring/token
/// matches; ties keep key insertion order (stable sort), so identical
/// inputs always produce byte-identical output. Each matching entry
/// expands to one [`MatchRecord`] per variant.
///
/// When `previous` comes from a strict prefix of `query` (the common
/// typed-forward case) only its candidates are rescanned; any other edit
/// falls back to a full scan. Both paths return identical results, only
/// the work differs.
pub fn match_query(
    index: &SearchIndex,
    query: &str,
    previous: Option<QueryState>,
) -> (Vec<MatchRecord>, QueryState) {
    let needle = query.trim().to_lowercase();
    let tokens = query_tokens(query);

    if tokens.is_empty() {
        return (Vec::new(), QueryState::unfiltered(query));
    }

    let mut hits: Vec<(usize, u32)> = Vec::new();
    let mut consider = |slot: usize, entry: &Entry| {
        if let Some(relevance) = key_relevance(&entry.key, &needle, &tokens) {
            hits.push((slot, relevance));
        }
    };

    let narrowed = previous.as_ref().filter(|state| state.narrows(query));
    match narrowed {
        Some(state) => {
            for &slot in &state.candidates {
                // Stale slots from a foreign index are skipped, not a panic.
                if let Some(entry) = index.entries().get(slot) {
                    consider(slot, entry);
                }
            }
        }
        None => {
            for (slot, entry) in index.entries().iter().enumerate() {
                consider(slot, entry);
            }
        }
    }

    tracing::trace!(
        "Query '{}' matched {} of {} entries ({})",
        query,
        hits.len(),
        index.entry_count(),
        if narrowed.is_some() {
            "incremental"
        } else {
            "full scan"
        }
    );

    let candidates: Vec<usize> = hits.iter().map(|&(slot, _)| slot).collect();

    // Stable by construction: hits are in insertion order going in.
    hits.sort_by_key(|&(_, relevance)| std::cmp::Reverse(relevance));

    let mut records = Vec::new();
    for (slot, relevance) in hits {
        let entry = &index.entries()[slot];
        for variant in &entry.variants {
            records.push(MatchRecord {
                key: entry.key.clone(),
                label: variant.label.clone(),
                target: variant.target.clone(),
                group: variant.group.clone(),
                relevance,
            });
        }
    }

    let state = QueryState {
        query: query.to_string(),
        tokens,
        candidates,
    };

    (records, state)
}
