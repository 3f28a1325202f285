//! Todos Reducer

use std::rc::Rc;

use super::{append, remove_by_id};
use crate::actions::Action;
use crate::state::TodoList;

/// Reducer for the todo slice
pub fn reduce(state: &TodoList, action: &Action) -> TodoList {
    match action {
        Action::AddTodo { todo } => append(state, todo.clone()),
        Action::RemoveTodo { id } => remove_by_id(state, id),
        Action::ToggleTodo { id } => {
            if !state.iter().any(|todo| todo.id == *id) {
                log::debug!("No todo with id {} to toggle", id);
                return Rc::clone(state);
            }
            Rc::new(
                state
                    .iter()
                    .map(|todo| {
                        if todo.id == *id {
                            Rc::new(todo.toggled())
                        } else {
                            Rc::clone(todo)
                        }
                    })
                    .collect(),
            )
        }
        _ => Rc::clone(state),
    }
}
