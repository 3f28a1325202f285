//! Application State Module
//!
//! Contains all state types used by the application, organized by slice.

mod app;
mod goal;
mod todo;

pub use app::AppState;
pub use goal::{Goal, GoalList};
pub use todo::{Todo, TodoList};

/// Entities stored in a list slice, identified by a string id
pub trait Identified {
    fn id(&self) -> &str;
}
