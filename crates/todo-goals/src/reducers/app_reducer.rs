use crate::actions::Action;
use crate::reducers::{goals_reducer, todos_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
///
/// Every sub-reducer sees every action; slices an action does not touch come
/// back as the same allocation.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    log::trace!("Reducing {}", action.action_type());
    AppState {
        todos: todos_reducer::reduce(&state.todos, action),
        goals: goals_reducer::reduce(&state.goals, action),
    }
}
