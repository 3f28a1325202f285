//! Reducers
//!
//! Pure functions computing the next state from the previous one and an
//! action. `app_reducer` is the root; it fans every action out to the slice
//! reducers.

pub mod app_reducer;
pub mod goals_reducer;
pub mod todos_reducer;

use std::rc::Rc;

use crate::state::Identified;

/// New list with `item` appended; existing items are shared
fn append<T>(list: &Rc<Vec<Rc<T>>>, item: T) -> Rc<Vec<Rc<T>>> {
    let mut items = Vec::with_capacity(list.len() + 1);
    items.extend(list.iter().cloned());
    items.push(Rc::new(item));
    Rc::new(items)
}

/// List without the items whose id equals `id`
///
/// Returns the input list itself when nothing matches.
fn remove_by_id<T: Identified>(list: &Rc<Vec<Rc<T>>>, id: &str) -> Rc<Vec<Rc<T>>> {
    if !list.iter().any(|item| item.id() == id) {
        log::debug!("No item with id {} to remove", id);
        return Rc::clone(list);
    }
    Rc::new(
        list.iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect(),
    )
}
