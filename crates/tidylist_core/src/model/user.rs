//! User domain record.
//!
//! Users are seeded once at store construction and are read-only in this
//! core; no create/update/delete surface exists for them.

use serde::{Deserialize, Serialize};

/// Stable identifier for a user record.
pub type UserId = i64;

/// Canonical user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at: crate::model::clock::now_epoch_ms(),
        }
    }
}
