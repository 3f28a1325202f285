use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::listeners::{Listeners, SubscriptionId};
use crate::reducer::{InitAction, Reducer};

/// Store - holds application state and manages the Redux loop
///
/// The Store follows the Redux pattern:
/// - Centralized state management
/// - Actions are dispatched to modify state
/// - Pure reducers handle state transitions
/// - State is immutable (replaced on each action)
///
/// `Store` is a handle: clones share the same state cell and listeners.
/// Listeners that read the state or dispatch should capture a [`WeakStore`]
/// from [`Store::downgrade`]; a strong clone inside a listener keeps the store
/// alive through its own registry.
///
/// # Example
/// ```rust
/// use todo_goals_store::{InitAction, Store};
///
/// #[derive(Debug)]
/// enum Action {
///     Init,
///     Increment,
/// }
///
/// impl InitAction for Action {
///     fn init() -> Self {
///         Action::Init
///     }
/// }
///
/// fn counter(state: &u32, action: &Action) -> u32 {
///     match action {
///         Action::Increment => state + 1,
///         Action::Init => *state,
///     }
/// }
///
/// let store = Store::new(counter);
/// let unsubscribe = store.subscribe(|| println!("changed"));
/// store.dispatch(Action::Increment);
/// assert_eq!(*store.get_state(), 1);
/// unsubscribe.unsubscribe();
/// ```
pub struct Store<S, A> {
    inner: Rc<Inner<S, A>>,
}

struct Inner<S, A> {
    state: RefCell<Rc<S>>,
    reducer: Box<dyn Reducer<S, A>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl<S, A> Store<S, A>
where
    A: fmt::Debug,
{
    /// Create a store and bootstrap its state
    ///
    /// Runs the reducer once over `S::default()` with `A::init()`, so
    /// `get_state()` is valid right after construction.
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
        S: Default,
        A: InitAction,
    {
        let init = A::init();
        log::debug!("Bootstrapping store with {:?}", init);
        let state = reducer.reduce(&S::default(), &init);
        Self::with_state(reducer, state)
    }

    /// Create a store seeded with an explicit initial state
    ///
    /// The reducer is not invoked until the first dispatch.
    pub fn with_state<R>(reducer: R, initial_state: S) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(Rc::new(initial_state)),
                reducer: Box::new(reducer),
                listeners: Rc::new(RefCell::new(Listeners::default())),
            }),
        }
    }

    /// Get the current state
    ///
    /// Returns a shared handle to the snapshot; later dispatches replace the
    /// stored state but never modify a snapshot already handed out.
    pub fn get_state(&self) -> Rc<S> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Register a listener called after every dispatch, in registration order
    ///
    /// Registering the same closure twice yields two independent
    /// registrations, each notified once per dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn() + 'static,
    {
        let id = self.inner.listeners.borrow_mut().insert(Rc::new(listener));
        log::debug!("Listener {} subscribed", id);
        Unsubscribe {
            listeners: Rc::downgrade(&self.inner.listeners),
            id,
        }
    }

    /// Process an action through the reducer, then notify listeners
    ///
    /// The state is swapped only after the reducer returns; a panicking
    /// reducer leaves the previous state in place and notifies nobody.
    /// Listeners run against a snapshot of the registry taken after the
    /// swap, and no borrow is held while they run, so a listener may
    /// dispatch again. The nested dispatch completes before the remaining
    /// listeners of the outer pass are called.
    pub fn dispatch(&self, action: A) {
        log::debug!("Action: {:?}", action);

        let current = self.get_state();
        let next = self.inner.reducer.reduce(&current, &action);
        *self.inner.state.borrow_mut() = Rc::new(next);

        let listeners = self.inner.listeners.borrow().snapshot();
        log::trace!("Notifying {} listeners", listeners.len());
        for listener in listeners {
            listener();
        }
    }

    /// Number of active registrations
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Non-owning handle for listeners
    pub fn downgrade(&self) -> WeakStore<S, A> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("reducer", &"<reducer>")
            .field("listeners", &self.inner.listeners.borrow())
            .finish()
    }
}

/// Non-owning store handle
///
/// Does not keep the state or the listeners alive. While a dispatch is
/// notifying, the dispatching `Store` is alive, so `upgrade` succeeds inside
/// a listener.
pub struct WeakStore<S, A> {
    inner: Weak<Inner<S, A>>,
}

impl<S, A> WeakStore<S, A> {
    /// The store, if any strong handle still exists
    pub fn upgrade(&self) -> Option<Store<S, A>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl<S, A> Clone for WeakStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for WeakStore<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakStore")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

/// Handle removing one listener registration
///
/// Dropping the handle does not unsubscribe. Calling
/// [`Unsubscribe::unsubscribe`] more than once, or after the store is gone,
/// does nothing.
#[derive(Debug)]
#[must_use = "keep the handle to be able to unsubscribe the listener"]
pub struct Unsubscribe {
    listeners: Weak<RefCell<Listeners>>,
    id: SubscriptionId,
}

impl Unsubscribe {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn unsubscribe(&self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        if listeners.borrow_mut().remove(self.id) {
            log::debug!("Listener {} unsubscribed", self.id);
        }
    }
}
