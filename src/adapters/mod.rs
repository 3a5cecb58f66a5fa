//! Adapter Layer - Core Traits
//!
//! Defines the abstract interface between the generic controllers and one
//! entity family's REST endpoints. Implementations can use the live backend,
//! in-memory fakes, etc.

use async_trait::async_trait;

use crate::domain::{ApiError, ApiResult, BulkAction, Entity, Page};

mod media;
mod pending_users;
mod students;

pub use media::{MediaAdapter, UploadBackend};
pub use pending_users::PendingUserAdapter;
pub use students::StudentAdapter;

/// Query-string filters forwarded verbatim to the list endpoint
pub type Filters = Vec<(String, String)>;

/// What page `reload()` goes back to after a mutation
///
/// Capacity-bounded lists reload the first page because eviction can shift
/// which items occupy which page; plain CRUD lists stay where they are. The
/// choice is a named, per-adapter decision rather than an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadPolicy {
    SamePage,
    FirstPage,
}

/// One entity family's binding to the backend REST contract
///
/// All operations are async; nothing here retries or aggregates. Failure
/// handling above this seam belongs to the orchestrator.
#[async_trait]
pub trait ResourceAdapter: Send + Sync + 'static {
    type Item: Entity + 'static;

    /// Entity family name used in prompts and log lines
    fn name(&self) -> &'static str;

    fn reload_policy(&self) -> ReloadPolicy;

    /// Fetch one page of items plus pagination metadata
    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        filters: &Filters,
    ) -> ApiResult<Page<Self::Item>>;

    /// Apply an action to a single item
    async fn mutate_one(&self, id: <Self::Item as Entity>::Id, action: BulkAction)
        -> ApiResult<()>;

    /// Whether a true batch endpoint exists for this action
    fn supports_batch(&self, _action: BulkAction) -> bool {
        false
    }

    /// Apply an action to all ids in one backend call
    ///
    /// Only called when [`supports_batch`](Self::supports_batch) returned
    /// `true`; the default rejects the call outright.
    async fn mutate_many(
        &self,
        _ids: &[<Self::Item as Entity>::Id],
        action: BulkAction,
    ) -> ApiResult<()> {
        Err(ApiError::Validation {
            status: 405,
            message: format!("no batch endpoint for {}", action.as_str()),
        })
    }
}

/// Body of a `PATCH|DELETE /{entity}/bulk` request
#[derive(Debug, serde::Serialize)]
pub(crate) struct BulkIdsBody<'a> {
    pub ids: &'a [u32],
}
