//! Controller Layer
//!
//! The selectable, paginated resource manager: list loading, page-scoped
//! selection, capacity advisories and bulk-action orchestration, all generic
//! over one entity adapter.

mod bulk;
mod capacity;
mod list;
mod selection;
mod upload;


use crate::adapters::ResourceAdapter;
use crate::domain::Entity;

/// Id type of an adapter's item
pub type IdOf<A> = <<A as ResourceAdapter>::Item as Entity>::Id;

pub use bulk::{BulkActionOrchestrator, BulkOptions, BulkOutcome, BulkPhase, Settlement};
pub use capacity::{eviction_count, CapacityAdvisor, UploadAdvisory};
pub use list::ResourceListController;
pub use selection::SelectionManager;
pub use upload::MediaUploadFlow;
