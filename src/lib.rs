//! # rc-depend
//!
//! A dependency resolution engine for Gentoo-style rc-scripts service
//! declarations: it ingests raw `NEED`/`USE`/`BEFORE`/`AFTER`/`PROVIDE`
//! relations between named services and normalizes them into a symmetric,
//! invariant-respecting graph a downstream consumer can walk to compute a
//! startup or shutdown order.
//!
//! The crate does not compute that order itself — see the `graph-export`
//! feature for a serializable snapshot a consumer can build one from.
//!
//! ## Quick start
//!
//! ```rust
//! use rc_depend::{RelationKind, Resolver, ServiceRegistry};
//!
//! let mut registry = ServiceRegistry::new();
//! registry.add("dhcpcd").unwrap();
//! registry.add("sshd").unwrap();
//! registry.add_dependency("dhcpcd", "net", RelationKind::Provide).unwrap();
//! registry.add_dependency("sshd", "net", RelationKind::Need).unwrap();
//!
//! Resolver::new().resolve_all(&mut registry).unwrap();
//!
//! let sshd = registry.get("sshd").unwrap();
//! assert!(sshd.relations().contains(RelationKind::Need, "dhcpcd"));
//! assert_eq!(registry.get_by_virtual("net").unwrap().name(), "dhcpcd");
//! ```
//!
//! ## Broken dependencies
//!
//! An unresolvable `NEED` target is never an error — it is downgraded to a
//! `BROKEN` entry and reported through the [diagnostics sink](diagnostics),
//! so a single malformed declaration never stops resolution of the rest of
//! the graph:
//!
//! ```rust
//! use rc_depend::{RelationKind, Resolver, ServiceRegistry};
//!
//! let mut registry = ServiceRegistry::new();
//! registry.add("sshd").unwrap();
//! registry.add_dependency("sshd", "php-fpm", RelationKind::Need).unwrap();
//!
//! Resolver::new().resolve_all(&mut registry).unwrap();
//!
//! let sshd = registry.get("sshd").unwrap();
//! assert!(sshd.relations().get(RelationKind::Need).is_empty());
//! assert!(sshd.relations().contains(RelationKind::Broken, "php-fpm"));
//! ```

pub mod config;
pub mod descriptors;
pub mod diagnostics;
pub mod error;
pub mod kind;
pub mod record;
pub mod registry;
pub mod relations;
pub mod resolver;
pub mod validator;
pub mod virtual_index;

#[cfg(feature = "graph-export")]
pub mod graph_export;

pub use config::EngineConfig;
pub use descriptors::ServiceDescriptor;
pub use diagnostics::{CollectingDiagnostics, DiagnosticsSink, LogDiagnostics};
pub use error::{DepError, DepResult};
pub use kind::RelationKind;
pub use record::ServiceRecord;
pub use registry::ServiceRegistry;
pub use relations::RelationTable;
pub use resolver::Resolver;
pub use validator::Validator;
pub use virtual_index::{AddOutcome, VirtualIndex};

#[cfg(feature = "graph-export")]
pub use graph_export::{DependencyGraph, GraphEdge, GraphMetadata, GraphNode};
