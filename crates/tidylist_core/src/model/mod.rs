//! Domain model for the todo store.
//!
//! # Responsibility
//! - Define the canonical record types shared by repo and service layers.
//! - Keep identity and timestamp conventions in one place.
//!
//! # Invariants
//! - Every record is identified by a positive integer assigned by the store.
//! - All timestamps are Unix epoch milliseconds.

pub mod clock;
pub mod todo;
pub mod user;
