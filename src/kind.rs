//! Relation-kind definitions for the service dependency graph.

use std::fmt;

/// A label on a directed edge between two services, or one of the two
/// auxiliary bookkeeping kinds (`BROKEN`, `PROVIDE`).
///
/// # Examples
///
/// ```rust
/// use rc_depend::RelationKind;
///
/// assert_eq!(RelationKind::Need.reverse(), Some(RelationKind::NeedMe));
/// assert_eq!(RelationKind::Before.reverse(), Some(RelationKind::After));
/// assert_eq!(RelationKind::Broken.reverse(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationKind {
    /// Must be started first; failure to start blocks this service.
    Need,
    /// Reverse of `Need`: services that need this one.
    NeedMe,
    /// Soft preference: start first if present, absence is not fatal.
    Use,
    /// Reverse of `Use`.
    UseMe,
    /// Ordering hint: this service starts before the peer.
    Before,
    /// Reverse of `Before`.
    After,
    /// A declared `Need` whose target could not be resolved to any service.
    Broken,
    /// Input-only: virtual names this service provides. Drained during resolution.
    Provide,
}

impl RelationKind {
    /// All relation kinds, in declaration order. Used for exhaustive iteration
    /// over a [`crate::relations::RelationTable`].
    pub const ALL: [RelationKind; 8] = [
        RelationKind::Need,
        RelationKind::NeedMe,
        RelationKind::Use,
        RelationKind::UseMe,
        RelationKind::Before,
        RelationKind::After,
        RelationKind::Broken,
        RelationKind::Provide,
    ];

    /// The four kinds the resolver sweeps, in the fixed order the driver visits them.
    pub const SWEEP_ORDER: [RelationKind; 4] = [
        RelationKind::Need,
        RelationKind::Use,
        RelationKind::Before,
        RelationKind::After,
    ];

    /// The reverse of this kind, for the four kinds that participate in
    /// reverse-edge materialization. `None` for `Broken` and `Provide`,
    /// which have no reverse.
    #[inline]
    pub const fn reverse(self) -> Option<RelationKind> {
        match self {
            RelationKind::Need => Some(RelationKind::NeedMe),
            RelationKind::NeedMe => Some(RelationKind::Need),
            RelationKind::Use => Some(RelationKind::UseMe),
            RelationKind::UseMe => Some(RelationKind::Use),
            RelationKind::Before => Some(RelationKind::After),
            RelationKind::After => Some(RelationKind::Before),
            RelationKind::Broken | RelationKind::Provide => None,
        }
    }

    /// Dense index into a `[T; 8]` relation table, matching [`RelationKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RelationKind::Need => 0,
            RelationKind::NeedMe => 1,
            RelationKind::Use => 2,
            RelationKind::UseMe => 3,
            RelationKind::Before => 4,
            RelationKind::After => 5,
            RelationKind::Broken => 6,
            RelationKind::Provide => 7,
        }
    }

    /// Whether this kind is one of the four the resolver actively sweeps
    /// (`NEED`, `USE`, `BEFORE`, `AFTER`).
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            RelationKind::Need | RelationKind::Use | RelationKind::Before | RelationKind::After
        )
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationKind::Need => "NEED",
            RelationKind::NeedMe => "NEED_ME",
            RelationKind::Use => "USE",
            RelationKind::UseMe => "USE_ME",
            RelationKind::Before => "BEFORE",
            RelationKind::After => "AFTER",
            RelationKind::Broken => "BROKEN",
            RelationKind::Provide => "PROVIDE",
        };
        f.write_str(name)
    }
}
