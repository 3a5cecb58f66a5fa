//! Pending User Adapter
//!
//! Registration-approval endpoints. Both approve and reject have true batch
//! endpoints, so the orchestrator never needs the fallback loop here.

use async_trait::async_trait;
use std::sync::Arc;

use super::{Filters, ReloadPolicy, ResourceAdapter};
use crate::api::HttpClient;
use crate::domain::{ApiError, ApiResult, BulkAction, Page, PendingUser};

/// Body of `PATCH /pending-users/bulk`
#[derive(serde::Serialize)]
struct BulkDecisionBody<'a> {
    ids: &'a [u32],
    action: &'static str,
}

pub struct PendingUserAdapter {
    client: Arc<HttpClient>,
}

impl PendingUserAdapter {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for PendingUserAdapter {
    type Item = PendingUser;

    fn name(&self) -> &'static str {
        "pending-users"
    }

    fn reload_policy(&self) -> ReloadPolicy {
        ReloadPolicy::SamePage
    }

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        filters: &Filters,
    ) -> ApiResult<Page<PendingUser>> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        query.extend(filters.iter().cloned());
        self.client.get_json("/pending-users", &query).await
    }

    async fn mutate_one(&self, id: u32, action: BulkAction) -> ApiResult<()> {
        match action {
            BulkAction::Approve => {
                self.client
                    .patch_json(&format!("/pending-users/{}/approve", id), &serde_json::json!({}))
                    .await
            }
            BulkAction::Reject => self.client.delete(&format!("/pending-users/{}", id)).await,
            BulkAction::Delete | BulkAction::Download => Err(ApiError::Validation {
                status: 405,
                message: format!("pending users cannot be {}d", action.as_str()),
            }),
        }
    }

    fn supports_batch(&self, action: BulkAction) -> bool {
        matches!(action, BulkAction::Approve | BulkAction::Reject)
    }

    async fn mutate_many(&self, ids: &[u32], action: BulkAction) -> ApiResult<()> {
        match action {
            BulkAction::Approve | BulkAction::Reject => {
                let body = BulkDecisionBody { ids, action: action.as_str() };
                self.client.patch_json("/pending-users/bulk", &body).await
            }
            _ => Err(ApiError::Validation {
                status: 405,
                message: format!("no batch endpoint for {}", action.as_str()),
            }),
        }
    }
}
