//! Domain types for the todo state engine.
//!
//! The engine owns one entity, the todo collection, modeled as an ordered
//! `Vec<Todo>` plus the id allocator threaded alongside it. Every mutation
//! goes through [`TodoState`] methods, which the reducer dispatches to.

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo
///
/// Ids are allocated monotonically by [`TodoState`]: each insert takes the
/// current allocator value and bumps it, so an id is never reused even after
/// the todo it named has been removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record
///
/// `text` is fixed at insertion; `checked` is the only field that changes
/// afterwards, via [`TodoState::toggle`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, allocated at insertion
    pub id: TodoId,
    /// Caller-supplied text, taken verbatim (no validation)
    pub text: String,
    /// Completion flag, `false` at creation
    pub checked: bool,
}

impl Todo {
    /// Creates a new unchecked todo
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            checked: false,
        }
    }
}

/// State of the todo collection
///
/// Holds the ordered todos and the id allocator. Insertion order is
/// preserved: `insert` appends, `remove` and `toggle` never reorder.
///
/// Invariant: all ids in `todos` are pairwise distinct, and `next_id` is
/// strictly greater than every id ever allocated by this state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos in insertion order
    pub todos: Vec<Todo>,
    /// Next id to allocate; advances on every insert, never on remove
    next_id: u64,
}

impl TodoState {
    /// Creates an empty todo state with the allocator at 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Internal constructor used by seeding
    pub(crate) const fn with_parts(todos: Vec<Todo>, next_id: u64) -> Self {
        Self { todos, next_id }
    }

    /// Returns the id the next insert will allocate
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of checked todos
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.todos.iter().filter(|t| t.checked).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo with the given id exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.todos.iter().any(|t| t.id == id)
    }

    /// Appends a new unchecked todo with the given text
    ///
    /// Allocates the next id, advances the allocator, and returns the
    /// allocated id. The allocated id is strictly greater than every id this
    /// state has ever handed out, regardless of intervening removals.
    pub fn insert(&mut self, text: impl Into<String>) -> TodoId {
        let id = TodoId::new(self.next_id);
        self.next_id += 1;
        self.todos.push(Todo::new(id, text.into()));
        id
    }

    /// Removes the todo with the given id, preserving the order of the rest
    ///
    /// Returns true if a todo was removed. An absent id is a no-op, not an
    /// error. The allocator is untouched: removed ids are never reassigned.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    /// Flips the `checked` flag of the todo with the given id
    ///
    /// All other todos are left untouched. Returns true if a todo matched;
    /// an absent id is a no-op, not an error.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.checked = !todo.checked;
                true
            }
            None => false,
        }
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions processed by the todo reducer
///
/// One variant per engine operation. Seeding is deliberately not an action:
/// it is a constructor ([`TodoState::seeded`]) that runs once per engine
/// lifetime, so it cannot be re-dispatched and wipe user edits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new todo with the given text
    Insert {
        /// Caller-supplied text; may be empty
        text: String,
    },

    /// Remove the todo with the given id (no-op if absent)
    Remove {
        /// Todo to remove
        id: TodoId,
    },

    /// Flip the completion flag of the todo with the given id (no-op if
    /// absent)
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },
}
