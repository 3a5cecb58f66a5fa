//! Media Entity
//!
//! Gallery media items live in capacity-bounded categories: once a category
//! is full the backend evicts the oldest items (by creation time) to make
//! room. The client only ever predicts that eviction, it never performs it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Named media bucket governed by its own capacity policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    /// Day-to-day classroom photos
    #[default]
    Daily,
    /// Event photos (festivals, excursions)
    Events,
}

impl MediaCategory {
    /// Maximum number of items the backend keeps in this category
    pub fn max_capacity(&self) -> u32 {
        match self {
            MediaCategory::Daily => 8,
            MediaCategory::Events => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Daily => "daily",
            MediaCategory::Events => "events",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "events" => MediaCategory::Events,
            _ => MediaCategory::Daily,
        }
    }
}

/// One uploaded media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: u32,
    pub title: String,
    pub file_url: String,
    pub category: MediaCategory,
    pub created_at: DateTime<Utc>,
}

impl Entity for MediaItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// One file staged for a multipart upload
#[derive(Debug, Clone)]
pub struct NewUpload {
    pub file_name: String,
    pub title: String,
    pub bytes: Vec<u8>,
}

/// Backend response to a multipart upload
///
/// `evicted_ids` is the authoritative list of items the backend removed to
/// stay under capacity; the client-side prediction is advisory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub accepted_count: u32,
    #[serde(default)]
    pub evicted_ids: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_capacity_constants() {
        assert_eq!(MediaCategory::Daily.max_capacity(), 8);
        assert_eq!(MediaCategory::Events.max_capacity(), 12);
    }

    #[test]
    fn test_category_string_round_trip() {
        assert_eq!(MediaCategory::Events.as_str(), "events");
        assert_eq!(MediaCategory::from_str("events"), MediaCategory::Events);
        assert_eq!(MediaCategory::from_str("unknown"), MediaCategory::Daily);
    }

    #[test]
    fn test_upload_receipt_defaults_missing_evictions() {
        let receipt: UploadReceipt =
            serde_json::from_str(r#"{"acceptedCount":3}"#).expect("parse receipt");
        assert_eq!(receipt.accepted_count, 3);
        assert!(receipt.evicted_ids.is_empty());
    }
}
