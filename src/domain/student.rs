//! Student Entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// One student roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub class_name: String,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Student {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
