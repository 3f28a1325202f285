//! Actions module
//!
//! Every state change is described by an [`Action`]. The set is closed: each
//! reducer matches the variants it owns and passes every other one through.

use todo_goals_store::InitAction;

use crate::state::{Goal, Todo};

/// Root action enum
///
/// Build actions through the factory methods (`Action::add_todo`, ...);
/// once constructed they are only ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Bootstrap action dispatched once when the store is created
    Init,
    AddTodo { todo: Todo },
    RemoveTodo { id: String },
    ToggleTodo { id: String },
    AddGoal { goal: Goal },
    RemoveGoal { id: String },
}

/// Tag of an action, displayed as `ADD_TODO`, `REMOVE_GOAL`, `@@INIT`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    #[strum(serialize = "@@INIT")]
    Init,
    AddTodo,
    RemoveTodo,
    ToggleTodo,
    AddGoal,
    RemoveGoal,
}

impl Action {
    pub fn add_todo(todo: Todo) -> Self {
        Action::AddTodo { todo }
    }

    pub fn remove_todo(id: impl Into<String>) -> Self {
        Action::RemoveTodo { id: id.into() }
    }

    pub fn toggle_todo(id: impl Into<String>) -> Self {
        Action::ToggleTodo { id: id.into() }
    }

    pub fn add_goal(goal: Goal) -> Self {
        Action::AddGoal { goal }
    }

    pub fn remove_goal(id: impl Into<String>) -> Self {
        Action::RemoveGoal { id: id.into() }
    }

    /// The tag of this action
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Init => ActionType::Init,
            Action::AddTodo { .. } => ActionType::AddTodo,
            Action::RemoveTodo { .. } => ActionType::RemoveTodo,
            Action::ToggleTodo { .. } => ActionType::ToggleTodo,
            Action::AddGoal { .. } => ActionType::AddGoal,
            Action::RemoveGoal { .. } => ActionType::RemoveGoal,
        }
    }
}

impl InitAction for Action {
    fn init() -> Self {
        Action::Init
    }
}
