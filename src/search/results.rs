//! Grouped presentation view over ranked results.

use ahash::AHashMap;

use crate::types::{GroupedMatches, MatchRecord};

/// Partitions ranked records by group for presentation.
///
/// A secondary view, not a ranking pass: groups appear in order of their
/// first record, and every group's records keep the relative order they had
/// in `records`. Flattening the view in group order therefore never
/// reorders records within a group.
pub fn group_view(records: &[MatchRecord]) -> Vec<GroupedMatches> {
    let mut groups: Vec<GroupedMatches> = Vec::new();
    let mut positions: AHashMap<&str, usize> = AHashMap::new();

    for record in records {
        let position = *positions.entry(record.group.as_str()).or_insert_with(|| {
            groups.push(GroupedMatches {
                group: record.group.clone(),
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].records.push(record.clone());
    }

    groups
}
