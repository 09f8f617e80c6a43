//! Validator (C4): the pairwise rules applied to one (source, peer, kind)
//! triple during a resolution sweep.

use crate::config::EngineConfig;
use crate::diagnostics::DiagnosticsSink;
use crate::kind::RelationKind;
use crate::registry::ServiceRegistry;

/// Applies the nine-step resolution rule to a single declared edge.
///
/// A `Validator` is stateless beyond its config and sink; all mutable state
/// lives in the [`ServiceRegistry`] passed to [`Validator::resolve_edge`].
pub struct Validator<'a> {
    diagnostics: &'a dyn DiagnosticsSink,
    config: &'a EngineConfig,
}

impl<'a> Validator<'a> {
    /// A validator reporting through `diagnostics` and consulting `config`
    /// for the synthetic-service carve-out.
    pub fn new(diagnostics: &'a dyn DiagnosticsSink, config: &'a EngineConfig) -> Self {
        Self { diagnostics, config }
    }

    /// Validates and, where needed, rewrites or removes the edge
    /// `source --kind--> peer`. `kind` must be one of the four active
    /// kinds (`NEED`, `USE`, `BEFORE`, `AFTER`); the resolver driver never
    /// sweeps the others.
    pub fn resolve_edge(&self, registry: &mut ServiceRegistry, source: &str, peer: &str, kind: RelationKind) {
        debug_assert!(kind.is_active(), "validator only handles active relation kinds");

        let mut peer = peer.to_string();

        // Step 1: virtual substitution.
        if !registry.contains(&peer) {
            if let Some(provider) = registry.virtuals().provider_of(&peer).map(str::to_string) {
                if let Some(rec) = registry.get_mut(source) {
                    rec.remove_relation(kind, &peer)
                        .expect("edge was just confirmed present via registry.contains");
                    rec.relations_mut().insert(kind, provider.clone());
                }
                peer = provider;
            }
        }

        // Step 2: unknown-peer policy.
        if !registry.contains(&peer) {
            if matches!(kind, RelationKind::Need) {
                if let Some(rec) = registry.get_mut(source) {
                    rec.remove_relation(kind, &peer)
                        .expect("edge was declared on source and not yet swept");
                    rec.relations_mut().insert(RelationKind::Broken, peer.clone());
                }
                self.diagnostics.warn(&format!(
                    "{source} {kind} {peer} is broken (no such service or provider)"
                ));
            } else if self.config.is_synthetic(&peer) {
                // Historical safety net: unreachable once the driver has
                // installed the synthetic services, kept for parity.
            } else {
                if let Some(rec) = registry.get_mut(source) {
                    rec.remove_relation(kind, &peer)
                        .expect("edge was declared on source and not yet swept");
                }
            }
            return;
        }

        // Step 3: self-edge.
        if peer == source {
            if let Some(rec) = registry.get_mut(source) {
                rec.remove_relation(kind, &peer)
                    .expect("edge was declared on source and not yet swept");
            }
            if !matches!(kind, RelationKind::Before | RelationKind::After) {
                self.diagnostics
                    .warn(&format!("{source} declares {kind} on itself; edge removed"));
            }
            return;
        }

        // Steps 4-5: BEFORE subsumed by a hard NEED/USE, directly or transitively.
        if kind == RelationKind::Before {
            let subsumed = registry
                .get(source)
                .map(|rec| {
                    rec.relations().contains(RelationKind::Need, &peer)
                        || rec.relations().contains(RelationKind::Use, &peer)
                })
                .unwrap_or(false);
            if subsumed {
                if let Some(rec) = registry.get_mut(source) {
                    rec.remove_relation(kind, &peer)
                        .expect("edge was declared on source and not yet swept");
                }
                return;
            }

            let peer_needers: Vec<String> = registry
                .get(&peer)
                .map(|rec| {
                    rec.relations()
                        .get(RelationKind::NeedMe)
                        .iter()
                        .chain(rec.relations().get(RelationKind::UseMe).iter())
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            let transitively_subsumed = registry
                .get(source)
                .map(|rec| {
                    peer_needers.iter().any(|m| {
                        rec.relations().contains(RelationKind::Need, m)
                            || rec.relations().contains(RelationKind::Use, m)
                    })
                })
                .unwrap_or(false);
            if transitively_subsumed {
                if let Some(rec) = registry.get_mut(source) {
                    rec.remove_relation(kind, &peer)
                        .expect("edge was declared on source and not yet swept");
                }
                self.diagnostics.warn(&format!(
                    "{source} BEFORE {peer} conflicts with a transitive NEED/USE; edge removed"
                ));
                return;
            }
        }

        // Steps 6-7: AFTER subsumed by a hard NEED/USE, directly or transitively.
        if kind == RelationKind::After {
            let subsumed = registry
                .get(&peer)
                .map(|rec| {
                    rec.relations().contains(RelationKind::Need, source)
                        || rec.relations().contains(RelationKind::Use, source)
                })
                .unwrap_or(false);
            if subsumed {
                if let Some(rec) = registry.get_mut(source) {
                    rec.remove_relation(kind, &peer)
                        .expect("edge was declared on source and not yet swept");
                }
                return;
            }

            let source_needers: Vec<String> = registry
                .get(source)
                .map(|rec| {
                    rec.relations()
                        .get(RelationKind::NeedMe)
                        .iter()
                        .chain(rec.relations().get(RelationKind::UseMe).iter())
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            let transitively_subsumed = registry
                .get(&peer)
                .map(|rec| {
                    source_needers.iter().any(|m| {
                        rec.relations().contains(RelationKind::Need, m)
                            || rec.relations().contains(RelationKind::Use, m)
                    })
                })
                .unwrap_or(false);
            if transitively_subsumed {
                if let Some(rec) = registry.get_mut(source) {
                    rec.remove_relation(kind, &peer)
                        .expect("edge was declared on source and not yet swept");
                }
                self.diagnostics.warn(&format!(
                    "{source} AFTER {peer} conflicts with a transitive NEED/USE; edge removed"
                ));
                return;
            }
        }

        // Step 8: symmetric pair of the same kind.
        let reciprocal = registry
            .get(&peer)
            .map(|rec| rec.relations().contains(kind, source))
            .unwrap_or(false);
        if reciprocal {
            if let Some(rec) = registry.get_mut(source) {
                rec.remove_relation(kind, &peer)
                    .expect("edge was declared on source and not yet swept");
            }
            self.diagnostics.warn(&format!(
                "{source} and {peer} both declare {kind} on each other; {source}'s edge removed"
            ));
            return;
        }

        // Step 9: reverse-edge materialization.
        if let Some(reverse) = kind.reverse() {
            if let Some(rec) = registry.get_mut(&peer) {
                rec.relations_mut().insert(reverse, source);
            }
        }
    }
}
