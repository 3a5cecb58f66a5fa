//! Capacity Advisor
//!
//! Predicts, client-side, how many oldest items a bounded category will
//! evict if new items are added. The backend is the sole authority for the
//! actual eviction; this number is shown to the user before they confirm an
//! upload and may drift if other uploads happen concurrently. Drift is only
//! ever observed after the next reload.

use crate::domain::MediaCategory;

/// `max(0, existing + incoming - max_capacity)`
pub fn eviction_count(existing: u32, incoming: u32, max_capacity: u32) -> u32 {
    existing.saturating_add(incoming).saturating_sub(max_capacity)
}

/// Pre-submit advisory for one planned upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAdvisory {
    pub category: MediaCategory,
    pub incoming: u32,
    pub predicted_evictions: u32,
}

impl UploadAdvisory {
    /// Prompt text shown before the user confirms an eviction-causing upload
    pub fn message(&self) -> String {
        format!(
            "Adding {} item(s) to the {} gallery will remove its {} oldest item(s). Continue?",
            self.incoming,
            self.category.as_str(),
            self.predicted_evictions
        )
    }
}

/// Client-side eviction prediction for capacity-bounded categories
pub struct CapacityAdvisor;

impl CapacityAdvisor {
    /// Predict the eviction an upload of `incoming` items would cause, given
    /// the category count from the last load
    pub fn advise(category: MediaCategory, existing: u32, incoming: u32) -> UploadAdvisory {
        UploadAdvisory {
            category,
            incoming,
            predicted_evictions: eviction_count(existing, incoming, category.max_capacity()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eviction_count_formula() {
        assert_eq!(eviction_count(6, 4, 8), 2);
        assert_eq!(eviction_count(0, 5, 8), 0);
        assert_eq!(eviction_count(8, 0, 8), 0);
        assert_eq!(eviction_count(12, 3, 12), 3);
    }

    #[test]
    fn test_eviction_count_saturates_on_huge_inputs() {
        assert_eq!(eviction_count(u32::MAX, u32::MAX, 8), u32::MAX - 8);
        assert_eq!(eviction_count(u32::MAX, 1, u32::MAX), 0);
    }

    #[test]
    fn test_advise_uses_category_capacity() {
        let advisory = CapacityAdvisor::advise(MediaCategory::Daily, 7, 3);
        assert_eq!(advisory.predicted_evictions, 2);

        // Same counts fit comfortably in the larger events bucket.
        let advisory = CapacityAdvisor::advise(MediaCategory::Events, 7, 3);
        assert_eq!(advisory.predicted_evictions, 0);
    }

    #[test]
    fn test_advisory_message_names_counts() {
        let advisory = CapacityAdvisor::advise(MediaCategory::Daily, 7, 3);
        let message = advisory.message();
        assert!(message.contains("3 item(s)"));
        assert!(message.contains("2 oldest"));
        assert!(message.contains("daily"));
    }
}
