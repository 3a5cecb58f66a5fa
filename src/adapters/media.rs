//! Media Adapter
//!
//! Gallery endpoints for one capacity-bounded category. The upload endpoint
//! implies the category; the response carries the authoritative list of
//! evicted item ids, so the client-side prediction stays advisory.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;

use super::{BulkIdsBody, Filters, ReloadPolicy, ResourceAdapter};
use crate::api::HttpClient;
use crate::domain::{
    ApiError, ApiResult, BulkAction, MediaCategory, MediaItem, NewUpload, Page, UploadReceipt,
};

/// Upload surface of a bounded media category
///
/// Split out of [`ResourceAdapter`] so the upload flow can be exercised
/// against in-memory fakes.
#[async_trait]
pub trait UploadBackend: Send + Sync {
    fn category(&self) -> MediaCategory;

    async fn upload(&self, uploads: &[NewUpload]) -> ApiResult<UploadReceipt>;
}

/// REST adapter for one media category's gallery
pub struct MediaAdapter {
    client: Arc<HttpClient>,
    category: MediaCategory,
}

impl MediaAdapter {
    pub fn new(client: Arc<HttpClient>, category: MediaCategory) -> Self {
        Self { client, category }
    }

    fn list_path(&self) -> String {
        format!("/media/{}", self.category.as_str())
    }
}

#[async_trait]
impl UploadBackend for MediaAdapter {
    fn category(&self) -> MediaCategory {
        self.category
    }

    /// Upload files as one multipart request (`file1..fileN`, `title1..titleN`)
    ///
    /// The backend evicts oldest items beyond capacity and reports them in
    /// the receipt. Callers reload afterwards; the local list is never
    /// patched from the receipt.
    async fn upload(&self, uploads: &[NewUpload]) -> ApiResult<UploadReceipt> {
        let mut form = Form::new();
        for (i, upload) in uploads.iter().enumerate() {
            let n = i + 1;
            form = form
                .part(
                    format!("file{}", n),
                    Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone()),
                )
                .text(format!("title{}", n), upload.title.clone());
        }
        let receipt: UploadReceipt = self.client.post_multipart(&self.list_path(), form).await?;
        log::info!(
            "uploaded {} items to {}, {} evicted",
            receipt.accepted_count,
            self.category.as_str(),
            receipt.evicted_ids.len()
        );
        Ok(receipt)
    }
}

#[async_trait]
impl ResourceAdapter for MediaAdapter {
    type Item = MediaItem;

    fn name(&self) -> &'static str {
        "media"
    }

    fn reload_policy(&self) -> ReloadPolicy {
        // Eviction shifts page boundaries, so a stale page number is useless.
        ReloadPolicy::FirstPage
    }

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        filters: &Filters,
    ) -> ApiResult<Page<MediaItem>> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        query.extend(filters.iter().cloned());
        self.client.get_json(&self.list_path(), &query).await
    }

    async fn mutate_one(&self, id: u32, action: BulkAction) -> ApiResult<()> {
        match action {
            BulkAction::Delete => self.client.delete(&format!("/media/{}", id)).await,
            BulkAction::Download => self.client.get_ok(&format!("/media/{}/download", id)).await,
            BulkAction::Approve | BulkAction::Reject => Err(ApiError::Validation {
                status: 405,
                message: format!("media items cannot be {}d", action.as_str()),
            }),
        }
    }

    fn supports_batch(&self, action: BulkAction) -> bool {
        matches!(action, BulkAction::Delete)
    }

    async fn mutate_many(&self, ids: &[u32], action: BulkAction) -> ApiResult<()> {
        match action {
            BulkAction::Delete => self.client.delete_json("/media/bulk", &BulkIdsBody { ids }).await,
            _ => Err(ApiError::Validation {
                status: 405,
                message: format!("no batch endpoint for {}", action.as_str()),
            }),
        }
    }
}
