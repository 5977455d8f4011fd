//! Initial user data for store construction.
//!
//! Users live for the process lifetime; this core exposes no mutation path
//! for them after seeding.

use crate::model::user::{User, UserId};
use std::collections::HashMap;

/// Returns the fixed set of users populated at store construction.
pub fn seed_users() -> HashMap<UserId, User> {
    [
        User::new(1, "John Doe", "john@example.com"),
        User::new(2, "Jane Smith", "jane@example.com"),
        User::new(3, "Bob Johnson", "bob@example.com"),
    ]
    .into_iter()
    .map(|user| (user.id, user))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::seed_users;

    #[test]
    fn seed_contains_three_distinct_users() {
        let users = seed_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[&1].name, "John Doe");
        assert_eq!(users[&2].name, "Jane Smith");
        assert_eq!(users[&3].name, "Bob Johnson");
    }
}
