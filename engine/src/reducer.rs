//! Reducer logic for the todo state engine.
//!
//! The reducer is a pure state machine: every action maps to exactly one
//! [`TodoState`] method and no side effects. Dispatch through the Store's
//! write lock is what guarantees each operation acts on the latest state,
//! never on a snapshot captured when a handler was registered.

use crate::types::{TodoAction, TodoState};
use tasklist_core::{
    SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec,
};

/// Environment dependencies for the todo reducer
///
/// The engine itself needs no external services; the clock is carried the
/// way every reducer environment here carries one, so hosts that stamp
/// renders or logs can share it.
#[derive(Debug, Clone)]
pub struct TodoEnvironment<C: Clock> {
    /// Clock for time-based operations
    pub clock: C,
}

impl<C: Clock> TodoEnvironment<C> {
    /// Creates a new `TodoEnvironment` with the given clock
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }
}

/// Reducer for the todo collection
///
/// Generic over the clock type so production (`SystemClock`) and tests
/// (`FixedClock`) plug in the same way.
#[derive(Debug, Clone, Copy)]
pub struct TodoReducer<C> {
    _phantom: std::marker::PhantomData<C>,
}

impl<C> TodoReducer<C> {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C> Default for TodoReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for TodoReducer<C> {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Insert { text } => {
                let id = state.insert(text);
                tracing::debug!(%id, "inserted todo");
            }
            TodoAction::Remove { id } => {
                if !state.remove(id) {
                    // Absent id is a no-op per the engine contract
                    tracing::debug!(%id, "remove matched no todo");
                }
            }
            TodoAction::Toggle { id } => {
                if !state.toggle(id) {
                    tracing::debug!(%id, "toggle matched no todo");
                }
            }
        }

        smallvec![Effect::None]
    }
}
