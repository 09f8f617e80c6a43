//! Service registry (C1): canonical, name-keyed store of service records.

use std::collections::BTreeMap;

use crate::descriptors::ServiceDescriptor;
use crate::error::{DepError, DepResult};
use crate::kind::RelationKind;
use crate::record::ServiceRecord;
use crate::virtual_index::VirtualIndex;

/// Owns every [`ServiceRecord`] and the [`VirtualIndex`] derived from their
/// `PROVIDE` declarations.
///
/// Records are held in a [`BTreeMap`], which keeps enumeration in ascending
/// lexicographic order "for free" rather than requiring an explicit sort
/// step after every insertion (see §4.1's sorted-insertion requirement).
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, ServiceRecord>,
    virtuals: VirtualIndex,
}

impl ServiceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new, empty service record under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DepError::InvalidInput`] for an empty name, or
    /// [`DepError::DuplicateName`] if `name` is already registered.
    pub fn add(&mut self, name: &str) -> DepResult<()> {
        if name.is_empty() {
            return Err(DepError::InvalidInput("service name must not be empty"));
        }
        if self.services.contains_key(name) {
            return Err(DepError::DuplicateName(name.to_string()));
        }
        self.services.insert(name.to_string(), ServiceRecord::new(name));
        Ok(())
    }

    /// Registers `name` if it is not already present; otherwise a no-op.
    /// Used internally to materialize synthetic services and to create
    /// placeholder records for peers mentioned before they are declared.
    pub fn ensure(&mut self, name: &str) -> &mut ServiceRecord {
        self.services
            .entry(name.to_string())
            .or_insert_with(|| ServiceRecord::new(name))
    }

    /// Records a relation from `name` to `peer` under `kind`. Duplicate
    /// insertions are accepted silently, matching the adapter contract in §6.
    ///
    /// `name` must already be registered; `peer` need not be — unknown peers
    /// are a resolution-time concern (§4.4), not a registration-time one.
    pub fn add_dependency(&mut self, name: &str, peer: &str, kind: RelationKind) -> DepResult<()> {
        let record = self
            .services
            .get_mut(name)
            .ok_or_else(|| DepError::NotFound(name.to_string()))?;
        record.relations_mut().insert(kind, peer);
        Ok(())
    }

    /// Sets the mtime stamp on an existing record.
    pub fn set_mtime(&mut self, name: &str, mtime: u64) -> DepResult<()> {
        let record = self
            .services
            .get_mut(name)
            .ok_or_else(|| DepError::NotFound(name.to_string()))?;
        record.set_mtime(mtime);
        Ok(())
    }

    /// The record named `name`, if registered.
    pub fn get(&self, name: &str) -> Option<&ServiceRecord> {
        self.services.get(name)
    }

    /// Mutable access to the record named `name`, if registered.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ServiceRecord> {
        self.services.get_mut(name)
    }

    /// Looks a service up by the virtual name it provides.
    pub fn get_by_virtual(&self, virtual_name: &str) -> Option<&ServiceRecord> {
        self.virtuals.provider_of(virtual_name).and_then(|provider| self.get(provider))
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry has no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// A restartable, lazy sequence of records in ascending name order.
    pub fn enumerate(&self) -> impl Iterator<Item = &ServiceRecord> {
        self.services.values()
    }

    /// Names of every registered service, in ascending order. Used by the
    /// resolver to build a stable outer-loop snapshot before mutating
    /// records in place.
    pub fn names(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }

    /// Read-only access to the virtual index.
    pub fn virtuals(&self) -> &VirtualIndex {
        &self.virtuals
    }

    /// Mutable access to the virtual index.
    pub fn virtuals_mut(&mut self) -> &mut VirtualIndex {
        &mut self.virtuals
    }

    /// A read-only summary of every registered service, in sorted order.
    pub fn describe_all(&self) -> Vec<ServiceDescriptor> {
        self.services
            .values()
            .map(|record| ServiceDescriptor::from_record(record, &self.virtuals))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicates() {
        let mut registry = ServiceRegistry::new();
        registry.add("sshd").unwrap();
        assert_eq!(registry.add("sshd"), Err(DepError::DuplicateName("sshd".to_string())));
    }

    #[test]
    fn add_rejects_empty_name() {
        let mut registry = ServiceRegistry::new();
        assert_eq!(registry.add(""), Err(DepError::InvalidInput("service name must not be empty")));
    }

    #[test]
    fn enumeration_is_sorted() {
        let mut registry = ServiceRegistry::new();
        registry.add("sshd").unwrap();
        registry.add("dbus").unwrap();
        registry.add("net").unwrap();
        let names: Vec<_> = registry.enumerate().map(ServiceRecord::name).collect();
        assert_eq!(names, vec!["dbus", "net", "sshd"]);
    }

    #[test]
    fn add_dependency_requires_existing_source() {
        let mut registry = ServiceRegistry::new();
        let err = registry.add_dependency("sshd", "net", RelationKind::Need);
        assert_eq!(err, Err(DepError::NotFound("sshd".to_string())));
    }

    #[test]
    fn add_dependency_does_not_require_existing_peer() {
        let mut registry = ServiceRegistry::new();
        registry.add("sshd").unwrap();
        registry.add_dependency("sshd", "missing", RelationKind::Need).unwrap();
        assert!(registry.get("sshd").unwrap().relations().contains(RelationKind::Need, "missing"));
    }

    #[test]
    fn get_by_virtual_resolves_through_index() {
        let mut registry = ServiceRegistry::new();
        registry.add("dhcpcd").unwrap();
        registry.virtuals_mut().add("dhcpcd", "net");
        assert_eq!(registry.get_by_virtual("net").unwrap().name(), "dhcpcd");
    }
}
