//! Reducer contract

/// Reducer - pure function that produces new state from current state + action
///
/// Implementations must handle every action: actions they do not own return
/// the input state unchanged. Any `Fn(&S, &A) -> S` is a reducer.
pub trait Reducer<S, A> {
    fn reduce(&self, state: &S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&S, &A) -> S,
{
    fn reduce(&self, state: &S, action: &A) -> S {
        self(state, action)
    }
}

/// Actions that provide a bootstrap value
///
/// The store dispatches `A::init()` once against `S::default()` when it is
/// created, so the state is valid before the first real dispatch.
pub trait InitAction {
    fn init() -> Self;
}
