//! Application State

use serde::Serialize;

use super::{Goal, GoalList, Todo, TodoList};

/// Application state
///
/// The single source of truth. Every dispatch builds a new value from the
/// slices returned by the sub-reducers; nothing mutates it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub todos: TodoList,
    pub goals: GoalList,
}

impl AppState {
    /// Find a todo by id
    pub fn todo(&self, id: &str) -> Option<&Todo> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .map(|todo| &**todo)
    }

    /// Find a goal by id
    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals
            .iter()
            .find(|goal| goal.id == id)
            .map(|goal| &**goal)
    }

    /// Number of completed todos
    pub fn completed_todos(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn state() -> AppState {
        let mut done = Todo::new("2", "Walk dog");
        done.completed = true;
        AppState {
            todos: Rc::new(vec![Rc::new(Todo::new("1", "Buy milk")), Rc::new(done)]),
            goals: Rc::new(vec![Rc::new(Goal::new("g1", "Learn Rust"))]),
        }
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = AppState::default();
        assert!(state.todos.is_empty());
        assert!(state.goals.is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let state = state();
        assert_eq!(state.todo("2").map(|t| t.name.as_str()), Some("Walk dog"));
        assert_eq!(state.goal("g1").map(|g| g.name.as_str()), Some("Learn Rust"));
        assert!(state.todo("g1").is_none());
        assert!(state.goal("missing").is_none());
    }

    #[test]
    fn test_completed_todos() {
        assert_eq!(state().completed_todos(), 1);
        assert_eq!(AppState::default().completed_todos(), 0);
    }

    #[test]
    fn test_serializes_as_plain_lists() {
        let json = serde_json::to_value(state()).unwrap();
        assert_eq!(json["todos"][0]["name"], "Buy milk");
        assert_eq!(json["todos"][1]["completed"], true);
        assert_eq!(json["goals"][0]["id"], "g1");
    }
}
