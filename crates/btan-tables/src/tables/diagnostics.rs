//! Structural checks over a decoded table.
//!
//! Nothing here is an error: the scan only collects notes and counts for the
//! report, and never touches the table.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::model::SparseTable;

/// Two states declaring the same action base offset.
///
/// Legal as long as their live cells never share a tag, but usually a sign
/// of generator-level row sharing worth a look.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OffsetCollision {
    /// Lower state index.
    pub first: usize,
    /// Higher state index.
    pub second: usize,
    pub offset: i32,
}

impl fmt::Display for OffsetCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "two actions use the same offset: {} (states {} and {})",
            self.offset, self.first, self.second
        )
    }
}

/// Notes and density counts for one table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableDiagnostics {
    /// Ordered by `(second, first)`.
    pub collisions: Vec<OffsetCollision>,
    /// Live shift/reduce cells over all states.
    pub live_actions: usize,
    /// Live goto/accept cells over all states.
    pub live_gotos: usize,
    pub table_size: usize,
}

impl TableDiagnostics {
    pub fn scan(table: &SparseTable) -> Self {
        let collisions = offset_collisions(table);
        for collision in &collisions {
            tracing::info!(%collision, "offset collision");
        }

        let live_actions = (0..table.num_states())
            .map(|state| table.actions_of(state).count())
            .sum();
        let live_gotos = (0..table.num_states())
            .map(|state| table.gotos_of(state).count())
            .sum();

        Self {
            collisions,
            live_actions,
            live_gotos,
            table_size: table.table_size(),
        }
    }

    /// All live cells, actions and gotos together.
    pub fn live_entries(&self) -> usize {
        self.live_actions + self.live_gotos
    }
}

/// Every pair of states sharing a used action offset.
///
/// States are bucketed by offset, then each bucket emits all its pairs.
fn offset_collisions(table: &SparseTable) -> Vec<OffsetCollision> {
    let mut buckets: IndexMap<i32, Vec<usize>> = IndexMap::new();
    for state in 0..table.num_states() {
        if let Some(offset) = table.action_offset(state) {
            buckets.entry(offset).or_default().push(state);
        }
    }

    let mut collisions = Vec::new();
    for (&offset, states) in buckets.iter().filter(|(_, s)| s.len() > 1) {
        for (i, &second) in states.iter().enumerate() {
            for &first in &states[..i] {
                collisions.push(OffsetCollision {
                    first,
                    second,
                    offset,
                });
            }
        }
    }
    collisions.sort_by_key(|c| (c.second, c.first));
    collisions
}
