//! Diagnostics collaborator (C6): receives warnings and debug traces from
//! the resolver without ever influencing its control flow.

use std::cell::RefCell;

/// Sink for the two message classes the resolver emits: `warn` for a
/// domain-level inconsistency it repaired on its own, `debug` for a trace
/// useful while developing against this crate. Implementations must never
/// block or return an error; the resolver does not check for one.
pub trait DiagnosticsSink {
    /// A repaired inconsistency: unknown peer, self-edge, symmetric cycle,
    /// override conflict, duplicate virtual provider, or a virtual name
    /// colliding with a real service name.
    fn warn(&self, message: &str);

    /// A trace message with no domain significance, useful only for
    /// following the resolver's steps.
    fn debug(&self, _message: &str) {}
}

/// The default sink, forwarding to the `log` crate so host applications get
/// diagnostics through whatever logger they've already installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticsSink for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }
}

/// An in-memory sink that records every message it receives, in order, for
/// tests that need to assert on exact diagnostic content.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    warnings: RefCell<Vec<String>>,
    debugs: RefCell<Vec<String>>,
}

impl CollectingDiagnostics {
    /// A fresh sink with no recorded messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// All warnings recorded so far, in emission order.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    /// All debug traces recorded so far, in emission order.
    pub fn debugs(&self) -> Vec<String> {
        self.debugs.borrow().clone()
    }

    /// Whether any recorded warning contains `needle`.
    pub fn any_warning_contains(&self, needle: &str) -> bool {
        self.warnings.borrow().iter().any(|w| w.contains(needle))
    }
}

impl DiagnosticsSink for CollectingDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn debug(&self, message: &str) {
        self.debugs.borrow_mut().push(message.to_string());
    }
}
