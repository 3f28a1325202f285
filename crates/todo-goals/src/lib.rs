//! Todo and goal lists driven by a Redux-style store
//!
//! This crate provides:
//! - Actions and their factories (`actions`)
//! - The state tree (`state`)
//! - Slice reducers and the root reducer composing them (`reducers`)
//! - [`create_store`], wiring the root reducer into a [`Store`]

pub mod actions;
pub mod id;
pub mod reducers;
pub mod state;

pub use actions::{Action, ActionType};
pub use state::{AppState, Goal, Todo};
pub use todo_goals_store::{Store, Unsubscribe, WeakStore};

/// Store holding the application state
pub type AppStore = Store<AppState, Action>;

/// Create the application store, bootstrapped with empty todo and goal lists
pub fn create_store() -> AppStore {
    Store::new(reducers::app_reducer::reduce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_state_is_ready_before_first_dispatch() {
        let store = create_store();
        assert_eq!(*store.get_state(), AppState::default());
    }

    #[test]
    fn test_todo_lifecycle() {
        let store = create_store();

        store.dispatch(Action::add_todo(Todo::new("1", "Buy milk")));
        let state = store.get_state();
        assert_eq!(
            state.todos.iter().map(|t| (**t).clone()).collect::<Vec<_>>(),
            vec![Todo {
                id: "1".to_string(),
                name: "Buy milk".to_string(),
                completed: false,
            }]
        );
        assert!(state.goals.is_empty());

        store.dispatch(Action::toggle_todo("1"));
        let todo = store.get_state().todo("1").cloned().unwrap();
        assert!(todo.completed);
        assert_eq!(todo.id, "1");
        assert_eq!(todo.name, "Buy milk");

        store.dispatch(Action::remove_todo("1"));
        assert!(store.get_state().todos.is_empty());
    }

    #[test]
    fn test_goal_lifecycle() {
        let store = create_store();

        store.dispatch(Action::add_goal(Goal::new("g1", "Learn Rust")));
        store.dispatch(Action::add_goal(Goal::new("g2", "Run a marathon")));
        store.dispatch(Action::remove_goal("g1"));

        let state = store.get_state();
        assert_eq!(state.goals.len(), 1);
        assert_eq!(state.goals[0].name, "Run a marathon");
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_renderer_repaints_from_latest_state() {
        let store = create_store();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let unsubscribe = store.subscribe({
            let store = store.downgrade();
            let frames = frames.clone();
            move || {
                let Some(store) = store.upgrade() else {
                    return;
                };
                let state = store.get_state();
                let names: Vec<String> = state.todos.iter().map(|t| t.name.clone()).collect();
                frames.borrow_mut().push(names);
            }
        });

        store.dispatch(Action::add_todo(Todo::new("1", "Buy milk")));
        store.dispatch(Action::add_todo(Todo::new("2", "Walk dog")));
        store.dispatch(Action::remove_todo("1"));
        unsubscribe.unsubscribe();
        store.dispatch(Action::remove_todo("2"));

        assert_eq!(
            *frames.borrow(),
            vec![
                vec!["Buy milk".to_string()],
                vec!["Buy milk".to_string(), "Walk dog".to_string()],
                vec!["Walk dog".to_string()],
            ]
        );
    }

    #[test]
    fn test_store_with_subscribed_renderer_is_freed() {
        struct DropFlag(Rc<Cell<bool>>);

        impl Drop for DropFlag {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let dropped = Rc::new(Cell::new(false));
        let repaints = Rc::new(Cell::new(0));
        {
            let store = create_store();
            let _unsubscribe = store.subscribe({
                let store = store.downgrade();
                let flag = DropFlag(dropped.clone());
                let repaints = repaints.clone();
                move || {
                    let _keep_alive = &flag;
                    if let Some(store) = store.upgrade() {
                        repaints.set(repaints.get() + store.get_state().todos.len());
                    }
                }
            });
            store.dispatch(Action::add_todo(Todo::new("1", "Buy milk")));
            assert!(!dropped.get());
        }

        assert_eq!(repaints.get(), 1);
        assert!(dropped.get());
    }
}
