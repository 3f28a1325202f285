//! Goal slice

use serde::Serialize;
use std::rc::Rc;

use super::Identified;

/// A goal. Besides its presence in the list it has no mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
}

/// Ordered goal slice
pub type GoalList = Rc<Vec<Rc<Goal>>>;

impl Goal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Identified for Goal {
    fn id(&self) -> &str {
        &self.id
    }
}
