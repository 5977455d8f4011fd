//! Todo repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical todo and user collections.
//! - Own identity assignment for todos.
//!
//! # Invariants
//! - One reader/writer lock covers the whole store; reads run concurrently,
//!   any write excludes everything else.
//! - Todo identities are strictly increasing and never reused, even after
//!   deletion.
//! - Returned records are independent clones; callers can never alias the
//!   store's internal state.

use crate::model::todo::{Todo, TodoId};
use crate::model::user::{User, UserId};
use crate::repo::user_seed::seed_users;
use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic error for repository lookups and mutations.
///
/// The repository never performs business validation; missing-record signals
/// are the only failures it can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoError {
    TodoNotFound(TodoId),
    UserNotFound(UserId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TodoNotFound(id) => write!(f, "todo not found: {id}"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Data-access contract for todo storage.
///
/// All individual operations are linearizable: each takes effect atomically
/// at some point between invocation and return.
pub trait TodoRepository {
    /// Returns a copy of every todo in insertion order. Never fails.
    fn find_all(&self) -> Vec<Todo>;

    /// Returns a copy of the matching todo.
    fn find_by_id(&self, id: TodoId) -> RepoResult<Todo>;

    /// Returns copies of all todos owned by `user_id`, insertion order.
    fn find_by_user_id(&self, user_id: UserId) -> Vec<Todo>;

    /// Assigns the next identity, appends, and returns the stored copy.
    ///
    /// Cannot conflict: identities are store-assigned.
    fn create(&self, todo: Todo) -> Todo;

    /// Replaces the record whose identity matches `todo.id`, preserving its
    /// position in the collection.
    fn update(&self, todo: Todo) -> RepoResult<Todo>;

    /// Removes the record with the given identity. Removal is immediate and
    /// permanent; the identity is never handed out again.
    fn delete(&self, id: TodoId) -> RepoResult<()>;

    /// Applies `mutate` to the matching record under a single write-lock
    /// acquisition and returns the mutated copy.
    ///
    /// This is the safe read-modify-write primitive: unlike a find-then-
    /// update pair, no concurrent writer can interleave between the read and
    /// the write.
    fn mutate_if_present<F>(&self, id: TodoId, mutate: F) -> RepoResult<Todo>
    where
        F: FnOnce(&mut Todo);

    fn get_user_by_id(&self, user_id: UserId) -> RepoResult<User>;

    /// Returns all users; order is not significant.
    fn get_all_users(&self) -> Vec<User>;
}

struct StoreState {
    todos: Vec<Todo>,
    users: HashMap<UserId, User>,
    next_id: TodoId,
}

/// In-memory repository guarded by one coarse reader/writer lock.
///
/// The dataset is small and operation latency negligible, so a single lock
/// scoped to the whole store keeps the implementation simple at no
/// measurable throughput cost.
pub struct MemoryTodoRepository {
    state: RwLock<StoreState>,
}

impl MemoryTodoRepository {
    /// Creates a store populated with the default user seed.
    pub fn new() -> Self {
        Self::with_users(seed_users().into_values())
    }

    /// Creates a store with a caller-provided user population.
    ///
    /// Used by tests and embedders that need a custom seed; users remain
    /// read-only afterwards either way.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: HashMap<UserId, User> =
            users.into_iter().map(|user| (user.id, user)).collect();
        debug!("event=store_init module=repo status=ok users={}", users.len());
        Self {
            state: RwLock::new(StoreState {
                todos: Vec::new(),
                users,
                next_id: 1,
            }),
        }
    }

    // A poisoned lock means a panic in another thread's critical section;
    // the critical sections here only clone and move plain data, so the
    // state is still coherent and recovery is safe.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoRepository for MemoryTodoRepository {
    fn find_all(&self) -> Vec<Todo> {
        self.read().todos.clone()
    }

    fn find_by_id(&self, id: TodoId) -> RepoResult<Todo> {
        self.read()
            .todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(RepoError::TodoNotFound(id))
    }

    fn find_by_user_id(&self, user_id: UserId) -> Vec<Todo> {
        self.read()
            .todos
            .iter()
            .filter(|todo| todo.user_id == user_id)
            .cloned()
            .collect()
    }

    fn create(&self, mut todo: Todo) -> Todo {
        let mut state = self.write();
        todo.id = state.next_id;
        state.next_id += 1;
        state.todos.push(todo.clone());
        todo
    }

    fn update(&self, todo: Todo) -> RepoResult<Todo> {
        let mut state = self.write();
        match state.todos.iter_mut().find(|stored| stored.id == todo.id) {
            Some(stored) => {
                *stored = todo.clone();
                Ok(todo)
            }
            None => Err(RepoError::TodoNotFound(todo.id)),
        }
    }

    fn delete(&self, id: TodoId) -> RepoResult<()> {
        let mut state = self.write();
        match state.todos.iter().position(|todo| todo.id == id) {
            Some(index) => {
                state.todos.remove(index);
                Ok(())
            }
            None => Err(RepoError::TodoNotFound(id)),
        }
    }

    fn mutate_if_present<F>(&self, id: TodoId, mutate: F) -> RepoResult<Todo>
    where
        F: FnOnce(&mut Todo),
    {
        let mut state = self.write();
        match state.todos.iter_mut().find(|todo| todo.id == id) {
            Some(stored) => {
                mutate(stored);
                Ok(stored.clone())
            }
            None => Err(RepoError::TodoNotFound(id)),
        }
    }

    fn get_user_by_id(&self, user_id: UserId) -> RepoResult<User> {
        self.read()
            .users
            .get(&user_id)
            .cloned()
            .ok_or(RepoError::UserNotFound(user_id))
    }

    fn get_all_users(&self) -> Vec<User> {
        self.read().users.values().cloned().collect()
    }
}
