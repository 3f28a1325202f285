//! Goals Reducer

use std::rc::Rc;

use super::{append, remove_by_id};
use crate::actions::Action;
use crate::state::GoalList;

/// Reducer for the goal slice
pub fn reduce(state: &GoalList, action: &Action) -> GoalList {
    match action {
        Action::AddGoal { goal } => append(state, goal.clone()),
        Action::RemoveGoal { id } => remove_by_id(state, id),
        _ => Rc::clone(state),
    }
}
