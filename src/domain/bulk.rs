//! Domain Layer - Bulk Action Types
//!
//! The actions an administrator can apply to a selected set, and the
//! aggregate report produced by one orchestrated batch.

use serde::{Deserialize, Serialize};

/// Action applied to every id in a selected set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Approve,
    Reject,
    Delete,
    Download,
}

impl BulkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::Approve => "approve",
            BulkAction::Reject => "reject",
            BulkAction::Delete => "delete",
            BulkAction::Download => "download",
        }
    }

    /// Mutating actions are gated behind an explicit confirmation prompt;
    /// downloads are not.
    pub fn requires_confirmation(&self) -> bool {
        !matches!(self, BulkAction::Download)
    }
}

/// Aggregate outcome of one orchestrated batch
///
/// A fallback loop keeps attempting every remaining id after a failure, so
/// `succeeded` and `failed` together cover every id that was attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkReport<Id> {
    pub succeeded: Vec<Id>,
    /// Failed ids paired with their normalized error message, in attempt order
    pub failed: Vec<(Id, String)>,
}

impl<Id> BulkReport<Id> {
    pub fn new() -> Self {
        Self { succeeded: Vec::new(), failed: Vec::new() }
    }

    pub fn record_ok(&mut self, id: Id) {
        self.succeeded.push(id);
    }

    pub fn record_err(&mut self, id: Id, message: String) {
        self.failed.push((id, message));
    }

    /// Total number of attempted ids
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// Some ids failed while others succeeded
    pub fn is_partial_failure(&self) -> bool {
        !self.failed.is_empty() && !self.succeeded.is_empty()
    }
}

impl<Id> Default for BulkReport<Id> {
    fn default() -> Self {
        Self::new()
    }
}
