//! kinderlist - preschool-management client core
//!
//! The selectable, paginated resource manager behind three admin screens:
//! media galleries, pending-user approval and student rosters. The backend
//! is authoritative for everything; this crate loads pages, tracks a
//! page-scoped selection, predicts capacity evictions and orchestrates bulk
//! actions with partial-failure accounting. Rendering, routing and session
//! refresh live elsewhere.
//!
//! Layering, leaves first:
//! - [`domain`] - entities, pagination, bulk reports, error taxonomy (no I/O)
//! - [`api`] - reqwest transport with injected session context
//! - [`adapters`] - one [`adapters::ResourceAdapter`] per entity family
//! - [`controller`] - list/selection/capacity/bulk controllers
//! - [`gateway`] - the consumed confirmation-modal contract
//!
//! ```no_run
//! use std::sync::Arc;
//! use kinderlist::api::{ApiConfig, HttpClient, Session};
//! use kinderlist::adapters::StudentAdapter;
//! use kinderlist::controller::{BulkActionOrchestrator, ResourceListController};
//! use kinderlist::domain::BulkAction;
//! # use kinderlist::gateway::ConfirmationGateway;
//! # async fn run(gateway: Arc<dyn ConfirmationGateway>) -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(HttpClient::new(
//!     ApiConfig::new("https://api.example.com/v1"),
//!     Session::authenticated("token", "admin"),
//! )?);
//! let students = Arc::new(StudentAdapter::new(client));
//!
//! let mut list = ResourceListController::new(Arc::clone(&students), 10);
//! list.load(1, vec![("class".into(), "sunflower".into())]).await?;
//! list.select_all();
//!
//! let mut bulk = BulkActionOrchestrator::new(students, gateway);
//! bulk.run(BulkAction::Delete, list.selected_ids()).await;
//! list.reload().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod api;
pub mod controller;
pub mod domain;
pub mod gateway;
