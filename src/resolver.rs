//! Resolver driver (C5): orchestrates the full resolution pass.

use crate::config::EngineConfig;
use crate::diagnostics::{DiagnosticsSink, LogDiagnostics};
use crate::error::{DepError, DepResult};
use crate::kind::RelationKind;
use crate::registry::ServiceRegistry;
use crate::validator::Validator;
use crate::virtual_index::AddOutcome;

/// Runs the full resolve pass over a [`ServiceRegistry`]: installs synthetic
/// services, folds `PROVIDE` declarations into the virtual index, then
/// sweeps `NEED`, `USE`, `BEFORE`, `AFTER` in that order.
///
/// A `Resolver` borrows its diagnostics sink so callers can choose
/// [`LogDiagnostics`] for normal operation or a
/// [`crate::diagnostics::CollectingDiagnostics`] in tests.
pub struct Resolver<'a> {
    config: EngineConfig,
    diagnostics: &'a dyn DiagnosticsSink,
}

impl<'a> Resolver<'a> {
    /// A resolver with the default configuration, logging through the
    /// `log` crate.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            diagnostics: &LogDiagnostics,
        }
    }

    /// A resolver reporting through a caller-supplied sink.
    pub fn with_diagnostics(diagnostics: &'a dyn DiagnosticsSink) -> Self {
        Self {
            config: EngineConfig::default(),
            diagnostics,
        }
    }

    /// A resolver built from an explicit configuration and sink.
    pub fn with_config(config: EngineConfig, diagnostics: &'a dyn DiagnosticsSink) -> Self {
        Self { config, diagnostics }
    }

    /// Runs the resolution pass described in §4.5 of the design to
    /// completion. Idempotent: calling this again on an already-resolved
    /// registry performs no further mutation (L1).
    ///
    /// # Errors
    ///
    /// Returns [`DepError::Fatal`] without mutating the registry if
    /// [`EngineConfig::max_services`] is set and already exceeded. This is
    /// the only failure mode; any domain-level inconsistency in the
    /// declarations is repaired in place and reported through the
    /// diagnostics sink instead.
    pub fn resolve_all(&self, registry: &mut ServiceRegistry) -> DepResult<()> {
        if let Some(limit) = self.config.max_services {
            if registry.len() > limit {
                return Err(DepError::Fatal(format!(
                    "registry holds {} services, exceeding the configured limit of {limit}",
                    registry.len()
                )));
            }
        }

        self.install_synthetic_services(registry);
        self.fold_provides(registry)?;

        let validator = Validator::new(self.diagnostics, &self.config);
        for kind in RelationKind::SWEEP_ORDER {
            let service_names = registry.names();
            for service in service_names {
                let peers = match registry.get(&service) {
                    Some(rec) => rec.relations().snapshot(kind),
                    None => continue,
                };
                for peer in peers {
                    // The peer may already have been removed from this very
                    // set by an earlier step of this same sweep (e.g. a
                    // reciprocal symmetric-pair removal on a prior visit);
                    // re-check membership so we never resolve a stale edge.
                    let still_present = registry
                        .get(&service)
                        .map(|rec| rec.relations().contains(kind, &peer))
                        .unwrap_or(false);
                    if still_present {
                        validator.resolve_edge(registry, &service, &peer, kind);
                    }
                }
            }
        }

        Ok(())
    }

    fn install_synthetic_services(&self, registry: &mut ServiceRegistry) {
        for name in &self.config.synthetic_services {
            if !registry.contains(name) {
                registry.ensure(name);
                self.diagnostics.debug(&format!("installed synthetic service {name}"));
            }
        }
    }

    fn fold_provides(&self, registry: &mut ServiceRegistry) -> DepResult<()> {
        for service in registry.names() {
            let virtuals = match registry.get(&service) {
                Some(rec) => rec.relations().snapshot(RelationKind::Provide),
                None => continue,
            };
            for virtual_name in virtuals {
                let outcome = registry.virtuals_mut().add(&service, &virtual_name);
                if outcome == AddOutcome::AlreadyProvided {
                    if self.config.strict_virtual_conflicts {
                        return Err(DepError::Fatal(format!(
                            "{service} claims virtual `{virtual_name}` already provided by another service"
                        )));
                    }
                    self.diagnostics.warn(&format!(
                        "{service} claims virtual `{virtual_name}` already provided by another service"
                    ));
                }
            }
            if let Some(rec) = registry.get_mut(&service) {
                rec.relations_mut().get_mut(RelationKind::Provide).clear();
            }
        }
        Ok(())
    }
}

impl<'a> Default for Resolver<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingDiagnostics;

    fn resolver(sink: &CollectingDiagnostics) -> Resolver<'_> {
        Resolver::with_diagnostics(sink)
    }

    #[test]
    fn installs_net_when_absent() {
        let mut registry = ServiceRegistry::new();
        registry.add("sshd").unwrap();
        let sink = CollectingDiagnostics::new();
        resolver(&sink).resolve_all(&mut registry).unwrap();
        assert!(registry.contains("net"));
    }

    #[test]
    fn virtual_substitution_scenario() {
        let mut registry = ServiceRegistry::new();
        registry.add("dhcpcd").unwrap();
        registry.add("sshd").unwrap();
        registry.add_dependency("dhcpcd", "net", RelationKind::Provide).unwrap();
        registry.add_dependency("sshd", "net", RelationKind::Need).unwrap();

        let sink = CollectingDiagnostics::new();
        resolver(&sink).resolve_all(&mut registry).unwrap();

        assert!(registry.get("sshd").unwrap().relations().contains(RelationKind::Need, "dhcpcd"));
        assert!(registry.get("dhcpcd").unwrap().relations().contains(RelationKind::NeedMe, "sshd"));
        assert_eq!(registry.get_by_virtual("net").unwrap().name(), "dhcpcd");
    }

    #[test]
    fn broken_need_scenario() {
        let mut registry = ServiceRegistry::new();
        registry.add("sshd").unwrap();
        registry.add_dependency("sshd", "missing", RelationKind::Need).unwrap();

        let sink = CollectingDiagnostics::new();
        resolver(&sink).resolve_all(&mut registry).unwrap();

        let rec = registry.get("sshd").unwrap();
        assert!(rec.relations().get(RelationKind::Need).is_empty());
        assert!(rec.relations().contains(RelationKind::Broken, "missing"));
        assert!(sink.any_warning_contains("missing"));
    }

    #[test]
    fn before_absorbed_by_need_scenario() {
        let mut registry = ServiceRegistry::new();
        registry.add("a").unwrap();
        registry.add("b").unwrap();
        registry.add_dependency("a", "b", RelationKind::Need).unwrap();
        registry.add_dependency("a", "b", RelationKind::Before).unwrap();

        let sink = CollectingDiagnostics::new();
        resolver(&sink).resolve_all(&mut registry).unwrap();

        assert!(registry.get("a").unwrap().relations().get(RelationKind::Before).is_empty());
        assert!(registry.get("a").unwrap().relations().contains(RelationKind::Need, "b"));
        assert!(registry.get("b").unwrap().relations().get(RelationKind::After).is_empty());
        assert!(registry.get("b").unwrap().relations().contains(RelationKind::NeedMe, "a"));
    }

    #[test]
    fn self_edge_scenario_clears_all_four_active_sets() {
        let mut registry = ServiceRegistry::new();
        registry.add("a").unwrap();
        registry.add_dependency("a", "a", RelationKind::Need).unwrap();

        let sink = CollectingDiagnostics::new();
        resolver(&sink).resolve_all(&mut registry).unwrap();

        let rec = registry.get("a").unwrap();
        for kind in [RelationKind::Need, RelationKind::NeedMe, RelationKind::Before, RelationKind::After] {
            assert!(rec.relations().get(kind).is_empty());
        }
        assert_eq!(sink.warnings().len(), 1);
    }

    #[test]
    fn resolve_all_is_idempotent() {
        let mut registry = ServiceRegistry::new();
        registry.add("dhcpcd").unwrap();
        registry.add("sshd").unwrap();
        registry.add_dependency("dhcpcd", "net", RelationKind::Provide).unwrap();
        registry.add_dependency("sshd", "net", RelationKind::Need).unwrap();

        let sink = CollectingDiagnostics::new();
        let resolver = resolver(&sink);
        resolver.resolve_all(&mut registry).unwrap();
        let before = format!("{:?}", registry.get("sshd").unwrap().relations().get(RelationKind::Need));
        let warnings_before = sink.warnings().len();

        resolver.resolve_all(&mut registry).unwrap();
        let after = format!("{:?}", registry.get("sshd").unwrap().relations().get(RelationKind::Need));
        assert_eq!(before, after);
        assert_eq!(sink.warnings().len(), warnings_before);
    }

    #[test]
    fn provide_is_always_drained() {
        let mut registry = ServiceRegistry::new();
        registry.add("dhcpcd").unwrap();
        registry.add_dependency("dhcpcd", "net", RelationKind::Provide).unwrap();

        let sink = CollectingDiagnostics::new();
        resolver(&sink).resolve_all(&mut registry).unwrap();

        assert!(registry.get("dhcpcd").unwrap().relations().get(RelationKind::Provide).is_empty());
    }

    #[test]
    fn strict_virtual_conflicts_is_fatal() {
        let mut registry = ServiceRegistry::new();
        registry.add("dhcpcd").unwrap();
        registry.add("wicd").unwrap();
        registry.add_dependency("dhcpcd", "net", RelationKind::Provide).unwrap();
        registry.add_dependency("wicd", "net", RelationKind::Provide).unwrap();

        let sink = CollectingDiagnostics::new();
        let config = EngineConfig {
            strict_virtual_conflicts: true,
            ..EngineConfig::default()
        };
        let err = Resolver::with_config(config, &sink).resolve_all(&mut registry).unwrap_err();
        assert!(matches!(err, DepError::Fatal(_)));
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn non_strict_virtual_conflicts_only_warn() {
        let mut registry = ServiceRegistry::new();
        registry.add("dhcpcd").unwrap();
        registry.add("wicd").unwrap();
        registry.add_dependency("dhcpcd", "net", RelationKind::Provide).unwrap();
        registry.add_dependency("wicd", "net", RelationKind::Provide).unwrap();

        let sink = CollectingDiagnostics::new();
        resolver(&sink).resolve_all(&mut registry).unwrap();
        assert_eq!(sink.warnings().len(), 1);
        assert_eq!(registry.get_by_virtual("net").unwrap().name(), "dhcpcd");
    }

    #[test]
    fn max_services_limit_is_fatal_and_leaves_registry_untouched() {
        let mut registry = ServiceRegistry::new();
        registry.add("a").unwrap();
        registry.add("b").unwrap();

        let sink = CollectingDiagnostics::new();
        let config = EngineConfig {
            max_services: Some(1),
            ..EngineConfig::default()
        };
        let err = Resolver::with_config(config, &sink).resolve_all(&mut registry).unwrap_err();
        assert!(matches!(err, DepError::Fatal(_)));
        assert!(!registry.contains("net"));
    }
}
