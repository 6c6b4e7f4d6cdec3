//! Integration tests for the todo state engine.
//!
//! Covers the engine's observable guarantees: id uniqueness and
//! monotonicity, order preservation, no-op semantics for absent ids, toggle
//! involution, seed correctness, and the behavior of the engine when driven
//! concurrently through the Store.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tasklist_core::environment::SystemClock;
use tasklist_core::reducer::Reducer;
use tasklist_engine::{TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState};
use tasklist_runtime::Store;
use tasklist_testing::test_clock;

// ============================================================================
// Seed correctness
// ============================================================================

#[test]
fn seed_2500_matches_contract() {
    let mut state = TodoState::seeded(2500);

    assert_eq!(state.count(), 2500);
    for (index, todo) in state.todos.iter().enumerate() {
        assert_eq!(todo.id.get(), index as u64 + 1);
        assert!(!todo.checked);
    }
    assert_eq!(state.todos[0].text, "Task 1");
    assert_eq!(state.todos[2499].text, "Task 2500");

    // The first insert after seeding allocates 2501
    let id = state.insert("after seed");
    assert_eq!(id, TodoId::new(2501));
}

// ============================================================================
// End-to-end scenario (seed 3 → insert → remove → toggle)
// ============================================================================

#[test]
fn end_to_end_scenario() {
    let reducer = TodoReducer::new();
    let env = TodoEnvironment::new(test_clock());
    let mut state = TodoState::seeded(3);

    reducer.reduce(
        &mut state,
        TodoAction::Insert {
            text: "buy milk".to_string(),
        },
        &env,
    );
    assert_eq!(state.count(), 4);
    let appended = state.todos.last().unwrap();
    assert_eq!(appended.id, TodoId::new(4));
    assert_eq!(appended.text, "buy milk");
    assert!(!appended.checked);

    reducer.reduce(&mut state, TodoAction::Remove { id: TodoId::new(2) }, &env);
    let ids: Vec<_> = state.todos.iter().map(|t| t.id.get()).collect();
    assert_eq!(ids, vec![1, 3, 4]);

    reducer.reduce(&mut state, TodoAction::Toggle { id: TodoId::new(1) }, &env);
    assert!(state.get(TodoId::new(1)).unwrap().checked);
    assert!(!state.get(TodoId::new(3)).unwrap().checked);
    assert!(!state.get(TodoId::new(4)).unwrap().checked);
}

// ============================================================================
// Property tests
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    Remove(u64),
    Toggle(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Op::Insert),
        (0u64..40).prop_map(Op::Remove),
        (0u64..40).prop_map(Op::Toggle),
    ]
}

fn apply(state: &mut TodoState, op: Op) {
    let reducer = TodoReducer::new();
    let env = TodoEnvironment::new(test_clock());
    let action = match op {
        Op::Insert(text) => TodoAction::Insert { text },
        Op::Remove(id) => TodoAction::Remove { id: TodoId::new(id) },
        Op::Toggle(id) => TodoAction::Toggle { id: TodoId::new(id) },
    };
    reducer.reduce(state, action, &env);
}

proptest! {
    /// Ids are pairwise distinct after any sequence of operations.
    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(op_strategy(), 0..60), seed in 0u64..20) {
        let mut state = TodoState::seeded(seed);
        for op in ops {
            apply(&mut state, op);

            let mut ids: Vec<_> = state.todos.iter().map(|t| t.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), state.count());
        }
    }

    /// Each insert allocates an id strictly greater than all prior ids,
    /// regardless of intervening removals.
    #[test]
    fn allocation_is_monotonic(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut state = TodoState::new();
        let mut highest = 0u64;

        for op in ops {
            let was_insert = matches!(op, Op::Insert(_));
            let before = state.next_id();
            apply(&mut state, op);

            if was_insert {
                prop_assert!(before > highest);
                highest = before;
                prop_assert_eq!(state.next_id(), before + 1);
            } else {
                prop_assert_eq!(state.next_id(), before);
            }
        }
    }

    /// Remove and toggle never reorder the surviving todos.
    #[test]
    fn remove_and_toggle_preserve_order(ops in prop::collection::vec(op_strategy(), 0..60), seed in 0u64..20) {
        let mut state = TodoState::seeded(seed);

        for op in ops {
            let before: Vec<_> = state.todos.iter().map(|t| t.id).collect();
            let was_insert = matches!(op, Op::Insert(_));
            apply(&mut state, op);
            let after: Vec<_> = state.todos.iter().map(|t| t.id).collect();

            if was_insert {
                // Insert appends; the prefix is untouched
                prop_assert_eq!(&after[..before.len()], &before[..]);
            } else {
                // Survivors keep their relative order
                let mut it = before.iter();
                for id in &after {
                    prop_assert!(it.any(|b| b == id));
                }
            }
        }
    }

    /// Toggling the same id twice returns the state to its prior value.
    #[test]
    fn toggle_is_an_involution(seed in 1u64..30, offset in 0u64..30) {
        let mut state = TodoState::seeded(seed);
        let id = TodoId::new(1 + offset % seed);
        let snapshot = state.clone();

        state.toggle(id);
        state.toggle(id);

        prop_assert_eq!(state, snapshot);
    }

    /// Remove/toggle on an absent id leaves the state untouched.
    #[test]
    fn absent_ids_are_noops(seed in 0u64..20, id in 100u64..200) {
        let mut state = TodoState::seeded(seed);
        let snapshot = state.clone();

        state.remove(TodoId::new(id));
        state.toggle(TodoId::new(id));

        prop_assert_eq!(state, snapshot);
    }
}

// ============================================================================
// Store-driven tests
// ============================================================================

fn store() -> Store<
    TodoState,
    TodoAction,
    TodoEnvironment<SystemClock>,
    TodoReducer<SystemClock>,
> {
    Store::new(
        TodoState::seeded(3),
        TodoReducer::new(),
        TodoEnvironment::new(SystemClock),
    )
}

#[tokio::test]
async fn store_runs_the_full_scenario() {
    let store = store();

    store
        .send(TodoAction::Insert {
            text: "buy milk".to_string(),
        })
        .await
        .unwrap();
    store
        .send(TodoAction::Remove { id: TodoId::new(2) })
        .await
        .unwrap();
    store
        .send(TodoAction::Toggle { id: TodoId::new(1) })
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    let ids: Vec<_> = state.todos.iter().map(|t| t.id.get()).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert!(state.get(TodoId::new(1)).unwrap().checked);
    assert_eq!(state.checked_count(), 1);
}

/// Concurrent inserts must never reuse an id. This is the regression the
/// engine exists to prevent: a dispatch path acting on a stale snapshot
/// would hand the same id to two inserts racing in one batch.
#[tokio::test]
async fn concurrent_inserts_never_reuse_ids() {
    let store = Arc::new(store());

    let mut handles = Vec::new();
    for worker in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            for i in 0..25 {
                store
                    .send(TodoAction::Insert {
                        text: format!("todo {worker}-{i}"),
                    })
                    .await
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let state = store.state(Clone::clone).await;
    assert_eq!(state.count(), 3 + 8 * 25);

    let mut ids: Vec<_> = state.todos.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.count());
    assert_eq!(state.next_id(), 3 + 8 * 25 + 1);
}

#[tokio::test]
async fn store_shutdown_rejects_actions() {
    let store = store();

    store.shutdown(Duration::from_secs(1)).await.unwrap();

    let result = store
        .send(TodoAction::Insert {
            text: "late".to_string(),
        })
        .await;
    assert!(result.is_err());
}
