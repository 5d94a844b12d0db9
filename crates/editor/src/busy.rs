// Chunk: docs/chunks/session_controller - Document lifecycle and command gating

//! Register of long-running operations currently in flight.
//!
//! Every command checks the register before running: while any operation is
//! registered the session is busy and commands report themselves disabled.
//! Membership is set-based, so starting the same operation twice and ending
//! it twice leaves the register empty.

use std::collections::BTreeSet;

use tracing::debug;

/// Operation name used while a document is being read.
pub const OPEN: &str = "open";
/// Operation name used while a document is being written.
pub const SAVE: &str = "save";
/// Operation name used while the help link is being launched.
pub const HELP: &str = "help";

/// Set of operation names currently executing.
#[derive(Debug, Default, Clone)]
pub struct BusyRegister {
    operations: BTreeSet<String>,
}

impl BusyRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `operation`. Returns true if the register went from idle to busy.
    pub fn start(&mut self, operation: &str) -> bool {
        let was_busy = self.is_busy();
        if self.operations.insert(operation.to_string()) {
            debug!(operation, "long operation started");
        }
        !was_busy
    }

    /// Unregisters `operation`. Returns true if the register went from busy to idle.
    ///
    /// Ending an operation that is not registered is a no-op.
    pub fn end(&mut self, operation: &str) -> bool {
        if !self.operations.remove(operation) {
            return false;
        }
        debug!(operation, "long operation ended");
        !self.is_busy()
    }

    pub fn is_busy(&self) -> bool {
        !self.operations.is_empty()
    }

    pub fn contains(&self, operation: &str) -> bool {
        self.operations.contains(operation)
    }

    /// Names of the operations in flight, sorted.
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(String::as_str)
    }
}
