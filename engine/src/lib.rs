//! Todo state engine built on the Tasklist reducer architecture.
//!
//! The engine owns an ordered collection of todo records and exposes four
//! operations:
//!
//! - **seed**: one-time bulk initializer ([`TodoState::seeded`])
//! - **insert**: append a new record with a freshly allocated id
//! - **remove**: drop a record by id, preserving order
//! - **toggle**: flip a record's completion flag
//!
//! Ids are allocated monotonically and never reused. Insert/remove/toggle
//! are dispatched as actions through a [`Store`](tasklist_runtime::Store),
//! whose write lock serializes reducer execution so every operation acts on
//! the latest state.
//!
//! # Quick Start
//!
//! ```no_run
//! use tasklist_core::environment::SystemClock;
//! use tasklist_engine::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use tasklist_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(SystemClock);
//! let store = Store::new(TodoState::seeded(2500), TodoReducer::new(), env);
//!
//! // Append a todo; it gets id 2501
//! store.send(TodoAction::Insert { text: "buy milk".to_string() }).await?;
//!
//! // Read state
//! let (count, next_id) = store.state(|s| (s.count(), s.next_id())).await;
//! assert_eq!((count, next_id), (2501, 2502));
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod seed;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use seed::BULK_SEED_COUNT;
pub use types::{Todo, TodoAction, TodoId, TodoState};
