//! Providers and the ambient scope stack their accessors read from.

use core::any::Any;
use std::cell::RefCell;

use crate::store::Store;
use crate::{Dispatch, Observer, Reducer, StoreError};

thread_local! {
    /// Dispatch handles of every provider scope currently entered on this
    /// thread, innermost last.
    static SCOPES: RefCell<Vec<Box<dyn Any>>> = const { RefCell::new(Vec::new()) };
}

/// A provider that has not been mounted yet.
///
/// Configure it with observers, then [`mount`](Self::mount) it to seed the
/// state. Mounting consumes the provider, so a given provider can only ever
/// be seeded once. Every mount produces an independent state instance.
///
/// # Example
///
/// ```rust
/// use sample_context::{use_dispatch, use_state, Action, Provider, SampleReducer};
///
/// let provider = Provider::new(SampleReducer).mount();
///
/// provider.scope(|| {
///     use_dispatch::<SampleReducer>().dispatch(Action::SetCount { count: 5 });
///     assert_eq!(use_state::<SampleReducer>().count, 5);
/// });
/// ```
pub struct Provider<R: Reducer> {
    reducer: R,
    observers: Vec<Box<dyn Observer<R::State> + Send>>,
}

impl<R: Reducer> Provider<R> {
    pub fn new(reducer: R) -> Self {
        Provider {
            reducer,
            observers: Vec::new(),
        }
    }

    /// Register an observer that will see the seed and every later state.
    pub fn with_observer(mut self, observer: impl Observer<R::State> + Send + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Seed the state via [`Reducer::init`] and publish it to the observers.
    pub fn mount(self) -> MountedProvider<R> {
        let store = Store::mount(self.reducer, self.observers);
        MountedProvider {
            dispatch: Dispatch::new(store),
        }
    }
}

/// An active provider owning one live state instance.
///
/// Dropping the provider detaches every observer and ends every
/// subscription. A [`Dispatch`] that outlives it still reads and updates the
/// state, but nothing is published any more; the state itself is freed with
/// the last such handle.
pub struct MountedProvider<R: Reducer> {
    dispatch: Dispatch<R>,
}

impl<R: Reducer> Drop for MountedProvider<R> {
    fn drop(&mut self) {
        self.dispatch.0.close();
    }
}

impl<R: Reducer> MountedProvider<R> {
    /// Run `children` with this provider visible to [`use_state`] and
    /// [`use_dispatch`].
    ///
    /// Scopes nest: inside `children` the accessors resolve to the innermost
    /// entered provider of the same reducer type. The scope is left when
    /// `children` returns or unwinds.
    pub fn scope<T>(&self, children: impl FnOnce() -> T) -> T {
        SCOPES.with(|scopes| {
            scopes
                .borrow_mut()
                .push(Box::new(self.dispatch.clone()) as Box<dyn Any>)
        });
        let _guard = ScopeGuard;
        children()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.dispatch.state()
    }

    /// A dispatch handle for explicit injection.
    pub fn dispatch(&self) -> Dispatch<R> {
        self.dispatch.clone()
    }
}

/// Mount a fresh provider and run `children` inside its scope.
///
/// The state is dropped when `children` returns unless a [`Dispatch`] escaped
/// the scope.
pub fn provide<R: Reducer, T>(reducer: R, children: impl FnOnce() -> T) -> T {
    Provider::new(reducer).mount().scope(children)
}

/// Pops the innermost scope on drop.
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

/// Look up the dispatch handle of the nearest enclosing provider for `R`.
pub fn try_use_dispatch<R: Reducer>() -> Result<Dispatch<R>, StoreError> {
    SCOPES.with(|scopes| {
        scopes
            .borrow()
            .iter()
            .rev()
            .find_map(|scope| scope.downcast_ref::<Dispatch<R>>())
            .cloned()
            .ok_or(StoreError::ProviderNotFound { provider: R::NAME })
    })
}

/// Look up the current state of the nearest enclosing provider for `R`.
pub fn try_use_state<R: Reducer>() -> Result<R::State, StoreError> {
    try_use_dispatch::<R>().map(|dispatch| dispatch.state())
}

/// Dispatch handle of the nearest enclosing provider for `R`.
///
/// # Panics
///
/// Panics with `Cannot find <provider>` when called outside every provider
/// scope for `R`.
pub fn use_dispatch<R: Reducer>() -> Dispatch<R> {
    try_use_dispatch::<R>().unwrap_or_else(|error| panic!("{error}"))
}

/// Current state of the nearest enclosing provider for `R`.
///
/// # Panics
///
/// Panics with `Cannot find <provider>` when called outside every provider
/// scope for `R`.
pub fn use_state<R: Reducer>() -> R::State {
    try_use_state::<R>().unwrap_or_else(|error| panic!("{error}"))
}
