//! Todo slice

use serde::Serialize;
use std::rc::Rc;

use super::Identified;

/// A todo item. The id is assigned at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

/// Ordered todo slice
///
/// Both the list and its items are shared, so a transition that leaves an
/// item (or the whole slice) untouched hands out the same allocation.
pub type TodoList = Rc<Vec<Rc<Todo>>>;

impl Todo {
    /// Create an open todo
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
        }
    }

    /// Copy of this todo with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

impl Identified for Todo {
    fn id(&self) -> &str {
        &self.id
    }
}
