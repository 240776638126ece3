//! User-owned entries

use crate::error::{DataHubError, Result};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled text record owned by one account.
///
/// Serialized with the field names of the persisted `app_data` layout;
/// `createdAt` is stored as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    #[serde(rename = "userEmail")]
    pub owner_email: String,
    pub title: String,
    pub content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Create a new entry with a fresh id, stamped with the current time
    pub fn new(
        owner_email: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Entry {
            id: Uuid::new_v4().to_string(),
            owner_email: owner_email.into(),
            title: title.into(),
            content: content.into(),
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email == email
    }
}

/// Titles must be non-empty
pub fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(DataHubError::Validation("Title is required".to_string()));
    }
    Ok(())
}
