//! Media Upload Flow
//!
//! Ties the capacity advisory to the upload endpoint: when the prediction
//! says items will be evicted, the user confirms first. The backend's
//! receipt is the ground truth for what was actually evicted.

use std::sync::Arc;

use crate::adapters::UploadBackend;
use crate::domain::{ApiResult, NewUpload, UploadReceipt};
use crate::gateway::{ConfirmationGateway, Prompt};

use super::capacity::CapacityAdvisor;

/// Capacity-gated upload into one bounded media category
pub struct MediaUploadFlow<U: UploadBackend> {
    backend: Arc<U>,
    gateway: Arc<dyn ConfirmationGateway>,
}

impl<U: UploadBackend> MediaUploadFlow<U> {
    pub fn new(backend: Arc<U>, gateway: Arc<dyn ConfirmationGateway>) -> Self {
        Self { backend, gateway }
    }

    /// Upload `uploads`, asking for confirmation when eviction is predicted
    ///
    /// `existing_count` is the category count from the last load. Returns
    /// `Ok(None)` when the user dismissed the eviction warning; nothing was
    /// sent in that case. Callers reload the gallery after a successful
    /// upload instead of trusting the local list.
    pub async fn upload(
        &self,
        existing_count: u32,
        uploads: &[NewUpload],
    ) -> ApiResult<Option<UploadReceipt>> {
        if uploads.is_empty() {
            return Ok(None);
        }

        let advisory =
            CapacityAdvisor::advise(self.backend.category(), existing_count, uploads.len() as u32);
        if advisory.predicted_evictions > 0 {
            let confirmed = self
                .gateway
                .confirm(Prompt::confirm("Gallery is full", advisory.message()))
                .await;
            if !confirmed {
                return Ok(None);
            }
        }

        let receipt = self.backend.upload(uploads).await?;

        // The prediction can drift if other uploads raced this one; the
        // receipt wins, drift is only worth a log line.
        let actual = receipt.evicted_ids.len() as u32;
        if actual != advisory.predicted_evictions {
            log::info!(
                "capacity drift on {}: predicted {} evictions, backend evicted {}",
                self.backend.category().as_str(),
                advisory.predicted_evictions,
                actual
            );
        }

        self.gateway
            .notify(Prompt::success(
                "Upload complete",
                format!("Uploaded {} item(s)", receipt.accepted_count),
            ))
            .await;
        Ok(Some(receipt))
    }
}
