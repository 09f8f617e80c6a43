//! Read-only service descriptors for diagnostics and tooling.

use std::collections::BTreeMap;

use crate::kind::RelationKind;
use crate::record::ServiceRecord;
use crate::virtual_index::VirtualIndex;

/// A summary of one registered service, independent of the live record it
/// was built from. Used by tooling that wants to inspect the graph without
/// holding a borrow of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// The service's name.
    pub name: String,
    /// The virtual name this service provides, if it is the bound provider
    /// for one in the registry's virtual index.
    pub provides: Option<String>,
    /// The adapter-supplied mtime stamp.
    pub mtime: u64,
    /// Number of peers currently recorded under each relation kind, keyed
    /// by the kind's display name (`"NEED"`, `"NEED_ME"`, ...).
    pub edge_counts: BTreeMap<String, usize>,
}

impl ServiceDescriptor {
    /// Builds a descriptor from a live record and the registry's virtual
    /// index, which is consulted to fill in `provides`.
    pub fn from_record(record: &ServiceRecord, virtuals: &VirtualIndex) -> Self {
        let mut edge_counts = BTreeMap::new();
        for kind in RelationKind::ALL {
            edge_counts.insert(kind.to_string(), record.relations().get(kind).len());
        }

        Self {
            name: record.name().to_string(),
            provides: virtuals.virtual_provided_by(record.name()).map(str::to_string),
            mtime: record.mtime(),
            edge_counts,
        }
    }

    /// The number of peers recorded under `kind`.
    pub fn edge_count(&self, kind: RelationKind) -> usize {
        self.edge_counts.get(&kind.to_string()).copied().unwrap_or(0)
    }

    /// Total edges across every relation kind.
    pub fn total_edges(&self) -> usize {
        self.edge_counts.values().sum()
    }
}
