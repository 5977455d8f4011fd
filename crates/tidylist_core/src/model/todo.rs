//! Todo domain record.
//!
//! # Responsibility
//! - Define the canonical todo shape stored by the repository.
//!
//! # Invariants
//! - `id` is assigned by the store, is positive, and is never reused for
//!   another todo, not even after deletion.
//! - `created_by` is a denormalized copy of the owning user's display name
//!   taken at creation time; it is never re-derived on later mutations.
//! - `updated_at >= created_at` at all times.

use serde::{Deserialize, Serialize};

/// Stable identifier for a todo record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = i64;

/// Canonical todo record.
///
/// Wire field names are the struct field names; this matches the JSON
/// contract consumed by the HTTP collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identity; `0` until the store accepts the record.
    pub id: TodoId,
    /// Non-empty, whitespace-trimmed task text.
    pub text: String,
    pub completed: bool,
    /// Identity of the owning user; validated against the user collection
    /// when the todo is created, not re-checked on later reads.
    pub user_id: crate::model::user::UserId,
    /// Display name of the owning user at creation time.
    pub created_by: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds; strictly increases on every mutation.
    pub updated_at: i64,
}
