//! Student Adapter
//!
//! Roster endpoints. The backend has no batch delete for students, so bulk
//! deletes go through the orchestrator's sequential fallback loop.

use async_trait::async_trait;
use std::sync::Arc;

use super::{Filters, ReloadPolicy, ResourceAdapter};
use crate::api::HttpClient;
use crate::domain::{ApiError, ApiResult, BulkAction, Page, Student};

pub struct StudentAdapter {
    client: Arc<HttpClient>,
}

impl StudentAdapter {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for StudentAdapter {
    type Item = Student;

    fn name(&self) -> &'static str {
        "students"
    }

    fn reload_policy(&self) -> ReloadPolicy {
        ReloadPolicy::SamePage
    }

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        filters: &Filters,
    ) -> ApiResult<Page<Student>> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        query.extend(filters.iter().cloned());
        self.client.get_json("/students", &query).await
    }

    async fn mutate_one(&self, id: u32, action: BulkAction) -> ApiResult<()> {
        match action {
            BulkAction::Delete => self.client.delete(&format!("/students/{}", id)).await,
            _ => Err(ApiError::Validation {
                status: 405,
                message: format!("students cannot be {}d", action.as_str()),
            }),
        }
    }

    // No supports_batch/mutate_many override: single-student delete is the
    // only mutation the backend exposes.
}
