//! Repository layer: thread-safe custodian of the canonical collections.
//!
//! # Responsibility
//! - Define the data-access contract used by the service layer.
//! - Keep lock discipline and identity assignment inside this boundary.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`TodoNotFound`, `UserNotFound`);
//!   business validation never happens here.
//! - Every record crossing this boundary is an independent clone; the store
//!   is the sole owner of its canonical records.

pub mod todo_repo;
pub mod user_seed;
