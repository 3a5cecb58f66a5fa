//! Pending User Entity
//!
//! A registration awaiting administrator approval. Approve grants the
//! requested role; reject removes the registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A user registration awaiting approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub requested_role: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for PendingUser {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
