//! Error types returned by the dependency engine.

use std::fmt;

use crate::kind::RelationKind;

/// Errors the engine can report while registering services or resolving
/// their relations.
///
/// Anything the resolver can repair on its own (unknown peers, self-edges,
/// symmetric cycles, override conflicts) is never represented here; those
/// are reported through the [diagnostics sink](crate::diagnostics) and
/// resolution continues. This enum covers only conditions a caller must
/// stop and react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepError {
    /// An empty name, or other malformed input rejected at the API boundary
    /// before any mutation occurs.
    InvalidInput(&'static str),
    /// A lookup named a service that has never been registered.
    NotFound(String),
    /// An attempt to remove a relation entry that was not present.
    NotPresent {
        service: String,
        peer: String,
        kind: RelationKind,
    },
    /// `add` was called with a name that already has a record.
    DuplicateName(String),
    /// Allocation failure or an invariant breach detected mid-resolution.
    /// Aborts the whole `resolve_all()` call.
    Fatal(String),
}

/// Convenience alias for results produced by this crate.
pub type DepResult<T> = Result<T, DepError>;

impl fmt::Display for DepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            DepError::NotFound(name) => write!(f, "no such service: {name}"),
            DepError::NotPresent {
                service,
                peer,
                kind,
            } => write!(f, "{service} has no {kind} relation to {peer}"),
            DepError::DuplicateName(name) => write!(f, "service already registered: {name}"),
            DepError::Fatal(msg) => write!(f, "fatal: {msg}"),
        }
    }
}

impl std::error::Error for DepError {}
