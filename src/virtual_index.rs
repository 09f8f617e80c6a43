//! Virtual index (C3): maps a virtual service name to its single provider.

use std::collections::BTreeMap;

/// Secondary index from virtual name to the concrete service that provides
/// it. At most one provider is recorded per virtual; a second claim on an
/// already-bound virtual is a warning, never an error (see §4.3).
#[derive(Debug, Clone, Default)]
pub struct VirtualIndex {
    providers: BTreeMap<String, String>,
}

/// Outcome of [`VirtualIndex::add`], used by the caller to decide whether a
/// diagnostic warning is warranted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The virtual had no provider yet; `service` is now bound to it.
    Bound,
    /// The virtual already had a provider; the new claim was discarded.
    AlreadyProvided,
}

impl VirtualIndex {
    /// An empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `virtual_name` for `service`. If the virtual already has a
    /// provider, the existing binding is kept and [`AddOutcome::AlreadyProvided`]
    /// is returned so the caller can warn.
    pub fn add(&mut self, service: &str, virtual_name: &str) -> AddOutcome {
        if self.providers.contains_key(virtual_name) {
            AddOutcome::AlreadyProvided
        } else {
            self.providers.insert(virtual_name.to_string(), service.to_string());
            AddOutcome::Bound
        }
    }

    /// The service providing `virtual_name`, if any.
    pub fn provider_of(&self, virtual_name: &str) -> Option<&str> {
        self.providers.get(virtual_name).map(String::as_str)
    }

    /// Whether any service provides `virtual_name`.
    pub fn contains(&self, virtual_name: &str) -> bool {
        self.providers.contains_key(virtual_name)
    }

    /// The virtual name `service` provides, if it is bound as a provider
    /// for one. The index is stored virtual-to-provider, so this is a
    /// linear scan; acceptable at the registry's expected scale.
    pub fn virtual_provided_by(&self, service: &str) -> Option<&str> {
        self.providers
            .iter()
            .find(|(_, provider)| provider.as_str() == service)
            .map(|(virtual_name, _)| virtual_name.as_str())
    }

    /// Number of distinct virtuals currently bound.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the index has no bindings.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
