//! Index construction from merged shard entries.

use ahash::AHashMap;

use crate::error::BuildError;
use crate::types::Entry;

use super::tokenize::normalize_key;

/// How the builder treats an entry with no variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Drop the entry with a warning and keep building. The default:
    /// a partially malformed shard still yields a usable index.
    #[default]
    Skip,
    /// Fail the whole build; no partial index is returned.
    Abort,
}

/// The aggregate searchable structure.
///
/// Immutable after construction and shared read-only across any number of
/// concurrent queries; changing the underlying tables means rebuilding.
/// Entries keep first-insertion key order, which the matcher relies on for
/// reproducible tie-breaking.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    /// Entries in first-insertion key order.
    entries: Vec<Entry>,
    /// Key → slot in `entries`. Lookup only; never iterated for output.
    slots: AHashMap<String, usize>,
}

impl SearchIndex {
    /// Number of distinct keys in the index.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of resolvable destinations across all keys.
    pub fn variant_count(&self) -> usize {
        self.entries.iter().map(|e| e.variants.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up one entry by key. The key is normalized before lookup, so
    /// `"Eigen Tensors"` and `"eigen_tensors"` resolve identically.
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.slots
            .get(normalize_key(key).as_str())
            .map(|&slot| &self.entries[slot])
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Builds a [`SearchIndex`] from any number of shard entry sequences.
///
/// Entries may arrive unsorted and may repeat keys; a repeated key appends
/// its variants under the existing entry in arrival order. Construction is
/// deterministic: the same input sequence always produces an index that
/// answers every query identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexBuilder {
    malformed: MalformedPolicy,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for entries with no variants.
    pub fn malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Consumes entries from any number of merged tables into an index.
    pub fn build<I>(&self, entries: I) -> Result<SearchIndex, BuildError>
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut index = SearchIndex {
            entries: Vec::new(),
            slots: AHashMap::new(),
        };

        for entry in entries {
            let key = normalize_key(&entry.key);

            if entry.variants.is_empty() {
                match self.malformed {
                    MalformedPolicy::Skip => {
                        tracing::warn!("Skipping malformed entry '{}' (no variants)", key);
                        continue;
                    }
                    MalformedPolicy::Abort => {
                        return Err(BuildError::MalformedEntry { key });
                    }
                }
            }

            match index.slots.get(&key).copied() {
                Some(slot) => {
                    index.entries[slot].variants.extend(entry.variants);
                }
                None => {
                    let slot = index.entries.len();
                    index.entries.push(Entry {
                        key: key.clone(),
                        variants: entry.variants,
                    });
                    index.slots.insert(key, slot);
                }
            }
        }

        tracing::debug!(
            "Built search index: {} keys, {} variants",
            index.entry_count(),
            index.variant_count()
        );

        Ok(index)
    }
}
