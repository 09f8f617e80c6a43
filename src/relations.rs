//! Per-kind relation storage for a single service.

use std::collections::BTreeSet;

use crate::kind::RelationKind;

/// The eight relation sets attached to one service, stored as a fixed-size
/// array indexed by [`RelationKind::index`] rather than a `HashMap<RelationKind, _>`.
/// The kind space is closed and small, so the array avoids hashing entirely.
#[derive(Debug, Clone, Default)]
pub struct RelationTable {
    sets: [BTreeSet<String>; 8],
}

impl RelationTable {
    /// An empty table, all eight sets empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// The peer set for `kind`, in sorted order.
    #[inline]
    pub fn get(&self, kind: RelationKind) -> &BTreeSet<String> {
        &self.sets[kind.index()]
    }

    /// Mutable access to the peer set for `kind`.
    #[inline]
    pub fn get_mut(&mut self, kind: RelationKind) -> &mut BTreeSet<String> {
        &mut self.sets[kind.index()]
    }

    /// Inserts `peer` into `kind`'s set. Returns `true` if it was newly added.
    pub fn insert(&mut self, kind: RelationKind, peer: impl Into<String>) -> bool {
        self.sets[kind.index()].insert(peer.into())
    }

    /// Removes `peer` from `kind`'s set. Returns `true` if it was present.
    pub fn remove(&mut self, kind: RelationKind, peer: &str) -> bool {
        self.sets[kind.index()].remove(peer)
    }

    /// Whether `peer` is present in `kind`'s set.
    pub fn contains(&self, kind: RelationKind, peer: &str) -> bool {
        self.sets[kind.index()].contains(peer)
    }

    /// A snapshot of the current members of `kind`'s set, cloned so that the
    /// caller may mutate the table while iterating the snapshot. This is how
    /// the resolver satisfies the contract that removing the current element
    /// mid-sweep is safe.
    pub fn snapshot(&self, kind: RelationKind) -> Vec<String> {
        self.sets[kind.index()].iter().cloned().collect()
    }

    /// Iterates over every non-empty `(kind, peers)` pair.
    pub fn iter_nonempty(&self) -> impl Iterator<Item = (RelationKind, &BTreeSet<String>)> {
        RelationKind::ALL
            .into_iter()
            .filter_map(move |k| {
                let set = &self.sets[k.index()];
                if set.is_empty() {
                    None
                } else {
                    Some((k, set))
                }
            })
    }
}
