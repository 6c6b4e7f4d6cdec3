//! Bulk seeding for the todo collection.
//!
//! Seeding is a one-time initializer, distinct from the steady-state
//! reducer: it runs at engine construction and is never expressed as an
//! action, so a re-render or re-dispatch cannot silently reset the
//! collection and its id allocator.

use crate::types::{Todo, TodoId, TodoState};

/// Number of todos the demo binary seeds at startup
pub const BULK_SEED_COUNT: u64 = 2500;

impl TodoState {
    /// Creates a state pre-populated with `count` todos
    ///
    /// Ids are `1..=count` in ascending order, every text is `"Task {i}"`,
    /// and every todo is unchecked. The allocator is left at `count + 1`,
    /// so the first subsequent insert continues the sequence. `count = 0`
    /// yields an empty state equivalent to [`TodoState::new`].
    #[must_use]
    pub fn seeded(count: u64) -> Self {
        let todos = (1..=count)
            .map(|i| Todo::new(TodoId::new(i), format!("Task {i}")))
            .collect();

        Self::with_parts(todos, count + 1)
    }
}
