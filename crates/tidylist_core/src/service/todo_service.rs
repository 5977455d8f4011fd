//! Todo use-case service.
//!
//! # Responsibility
//! - Validate plain-value inputs before they reach the repository.
//! - Cross-check referential integrity (a todo's owner must exist).
//! - Compute derived fields: timestamps and the denormalized creator name.
//!
//! # Invariants
//! - Structural validation runs before any repository lookup, so a malformed
//!   request never triggers a user or todo search.
//! - `user_id` and `created_by` are fixed at creation; update and toggle only
//!   ever touch `text`, `completed`, and `updated_at`.
//! - Read-modify-write operations go through `mutate_if_present`, which holds
//!   the write lock across the whole sequence; no lost updates.

use crate::model::clock::{next_after, now_epoch_ms};
use crate::model::todo::{Todo, TodoId};
use crate::model::user::{User, UserId};
use crate::repo::todo_repo::{RepoError, TodoRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Business-rule error surfaced to the service caller.
///
/// The HTTP collaborator maps each variant to its own representation; none
/// of these are fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceError {
    /// Todo identity in a request is zero or negative.
    InvalidId(i64),
    /// Todo text is empty or whitespace-only after trimming.
    InvalidText,
    /// Owning-user identity in a request is zero or negative.
    InvalidUserId(i64),
    /// Owning-user identity is well-formed but resolves to no user.
    UserNotFound(UserId),
    /// Referenced todo does not exist in the store.
    NotFound(TodoId),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "invalid todo ID: {id}"),
            Self::InvalidText => write!(f, "todo text cannot be empty"),
            Self::InvalidUserId(id) => write!(f, "invalid user ID: {id}"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for ServiceError {}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::TodoNotFound(id) => Self::NotFound(id),
            RepoError::UserNotFound(id) => Self::UserNotFound(id),
        }
    }
}

/// Request model for creating or updating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRequest {
    pub text: String,
    pub user_id: UserId,
    pub completed: bool,
}

/// Use-case service enforcing business rules over a repository.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every todo in insertion order. Always succeeds.
    pub fn get_all_todos(&self) -> Vec<Todo> {
        self.repo.find_all()
    }

    /// Returns all seeded users. Always succeeds.
    pub fn get_all_users(&self) -> Vec<User> {
        self.repo.get_all_users()
    }

    /// Returns one todo by identity.
    pub fn get_todo_by_id(&self, id: TodoId) -> ServiceResult<Todo> {
        validate_todo_id(id)?;
        Ok(self.repo.find_by_id(id)?)
    }

    /// Returns the todos owned by `user_id`, possibly empty.
    ///
    /// The owner must exist; an existing user with no todos is an empty
    /// result, not an error.
    pub fn get_todos_by_user(&self, user_id: UserId) -> ServiceResult<Vec<Todo>> {
        validate_user_id(user_id)?;
        self.repo.get_user_by_id(user_id)?;
        Ok(self.repo.find_by_user_id(user_id))
    }

    /// Creates a todo after validating the request and resolving its owner.
    ///
    /// # Contract
    /// - Text and user-id shape are checked before any repository access.
    /// - `created_by` is the resolved owner's display name at this moment.
    /// - `created_at == updated_at` on the returned record.
    pub fn create_todo(&self, request: &TodoRequest) -> ServiceResult<Todo> {
        let text = validate_request(request)?;
        let owner = self.repo.get_user_by_id(request.user_id)?;

        let now = now_epoch_ms();
        let todo = Todo {
            id: 0,
            text,
            completed: request.completed,
            user_id: owner.id,
            created_by: owner.name,
            created_at: now,
            updated_at: now,
        };
        Ok(self.repo.create(todo))
    }

    /// Deletes a todo by identity.
    ///
    /// The existence pre-check produces a caller-facing `NotFound` before the
    /// store's own authoritative re-check inside `delete`.
    pub fn delete_todo(&self, id: TodoId) -> ServiceResult<()> {
        validate_todo_id(id)?;
        self.repo.find_by_id(id)?;
        Ok(self.repo.delete(id)?)
    }

    /// Flips a todo's completed flag and refreshes `updated_at`.
    ///
    /// Runs as one locked read-modify-write; a concurrent writer cannot slip
    /// between the read and the write.
    pub fn toggle_todo(&self, id: TodoId) -> ServiceResult<Todo> {
        validate_todo_id(id)?;
        let toggled = self.repo.mutate_if_present(id, |todo| {
            todo.completed = !todo.completed;
            todo.updated_at = next_after(todo.updated_at);
        })?;
        Ok(toggled)
    }

    /// Overwrites a todo's text and completed flag.
    ///
    /// The stored `user_id` and `created_by` never change here; the request's
    /// `user_id` is validated for shape only.
    pub fn update_todo(&self, id: TodoId, request: &TodoRequest) -> ServiceResult<Todo> {
        validate_todo_id(id)?;
        let text = validate_request(request)?;
        let updated = self.repo.mutate_if_present(id, |todo| {
            todo.text = text;
            todo.completed = request.completed;
            todo.updated_at = next_after(todo.updated_at);
        })?;
        Ok(updated)
    }
}

fn validate_todo_id(id: TodoId) -> ServiceResult<()> {
    if id <= 0 {
        return Err(ServiceError::InvalidId(id));
    }
    Ok(())
}

fn validate_user_id(user_id: UserId) -> ServiceResult<()> {
    if user_id <= 0 {
        return Err(ServiceError::InvalidUserId(user_id));
    }
    Ok(())
}

/// Checks text before user-id shape, so an empty text always surfaces as
/// `InvalidText` regardless of the user reference. Returns the trimmed text.
fn validate_request(request: &TodoRequest) -> ServiceResult<String> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ServiceError::InvalidText);
    }
    validate_user_id(request.user_id)?;
    Ok(text.to_string())
}
