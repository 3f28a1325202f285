//! Redux-style state container
//!
//! This crate provides:
//! - [`Store`]: holds a single state cell, replaced only through `dispatch`
//! - [`Reducer`]: pure `(state, action) -> state` transition function
//! - [`Unsubscribe`]: handle returned by `subscribe` to remove a listener
//!
//! The store is single-threaded. Its handle is cheap to clone and is `!Send`,
//! which confines every clone to the thread that created it.

mod listeners;
pub mod reducer;
pub mod store;

pub use listeners::SubscriptionId;
pub use reducer::{InitAction, Reducer};
pub use store::{Store, Unsubscribe, WeakStore};
