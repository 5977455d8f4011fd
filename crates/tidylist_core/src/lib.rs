//! Core domain logic for tidylist.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId};
pub use model::user::{User, UserId};
pub use repo::todo_repo::{MemoryTodoRepository, RepoError, RepoResult, TodoRepository};
pub use repo::user_seed::seed_users;
pub use service::todo_service::{ServiceError, ServiceResult, TodoRequest, TodoService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
