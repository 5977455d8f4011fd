//! Core use-case services.
//!
//! # Responsibility
//! - Enforce input validation and referential rules before any store access.
//! - Compose repository calls into caller-facing operations.
//!
//! # Invariants
//! - Service APIs never bypass the repository's lock discipline.
//! - Errors surface synchronously to the caller; nothing is logged or
//!   swallowed here.

pub mod todo_service;
