//! The per-service record held by the registry.

use crate::error::{DepError, DepResult};
use crate::kind::RelationKind;
use crate::relations::RelationTable;

/// Everything the engine tracks about one declared service.
///
/// `mtime` is set by the input adapter and left untouched by the resolver
/// (§3); it is a passthrough timestamp, not a cache-invalidation counter.
#[derive(Debug, Clone)]
pub struct ServiceRecord {
    name: String,
    relations: RelationTable,
    mtime: u64,
}

impl ServiceRecord {
    /// A fresh record for `name` with no relations yet and `mtime` 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: RelationTable::new(),
            mtime: 0,
        }
    }

    /// The service's declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only access to this service's relation sets.
    pub fn relations(&self) -> &RelationTable {
        &self.relations
    }

    /// Mutable access to this service's relation sets.
    pub fn relations_mut(&mut self) -> &mut RelationTable {
        &mut self.relations
    }

    /// Removes `peer` from this service's `kind` set.
    ///
    /// # Errors
    ///
    /// Returns [`DepError::NotPresent`] if `peer` was not in the set. Every
    /// call site in this crate removes an edge it has just confirmed is
    /// present (via `contains` or by iterating a snapshot of the set), so a
    /// `NotPresent` here indicates a resolver bug rather than a reachable
    /// domain condition (§7).
    pub fn remove_relation(&mut self, kind: RelationKind, peer: &str) -> DepResult<()> {
        if self.relations.remove(kind, peer) {
            Ok(())
        } else {
            Err(DepError::NotPresent {
                service: self.name.clone(),
                peer: peer.to_string(),
                kind,
            })
        }
    }

    /// The mtime stamp set by the input adapter.
    pub fn mtime(&self) -> u64 {
        self.mtime
    }

    /// Sets the mtime stamp. Called by the input adapter only; the resolver
    /// never calls this.
    pub fn set_mtime(&mut self, mtime: u64) {
        self.mtime = mtime;
    }
}
