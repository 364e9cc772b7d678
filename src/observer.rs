//! Observer abstraction for re-running consumers on every published state.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Observer abstraction for consuming published states.
///
/// Implement this trait to hook a store into whatever re-renders your
/// components (UI framework, terminal, test harness, etc.).
///
/// [`observe`](Self::observe) is called once with the seed when the provider
/// is mounted and then once with the new state after every dispatched action.
/// Closures taking `&State` are observers too.
///
/// # Example
///
/// ```rust
/// use sample_context::{Observer, State};
///
/// struct ConsoleObserver;
///
/// impl Observer<State> for ConsoleObserver {
///     fn observe(&mut self, state: &State) {
///         println!("count is {}", state.count);
///     }
/// }
/// ```
pub trait Observer<State> {
    /// Observe a freshly published state.
    ///
    /// Observers may read the store or dispatch further actions; those
    /// actions are queued and reduced once this call returns.
    fn observe(&mut self, state: &State);
}

impl<State, F> Observer<State> for F
where
    F: FnMut(&State),
{
    fn observe(&mut self, state: &State) {
        self(state)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test observer that captures every published state for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share storage, so hand a clone to the provider and keep the
/// original for assertions.
///
/// # Example
///
/// ```rust
/// use sample_context::{Action, Provider, SampleReducer, State, TestObserver};
///
/// let observer = TestObserver::<State>::new();
/// let provider = Provider::new(SampleReducer)
///     .with_observer(observer.clone())
///     .mount();
///
/// provider.dispatch().dispatch(Action::ToggleGood);
///
/// observer.with_snapshots(|snapshots| {
///     assert!(!snapshots[0].is_good);
///     assert!(snapshots[1].is_good);
/// });
/// ```
pub struct TestObserver<State> {
    snapshots: Arc<Mutex<Vec<State>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<State> Clone for TestObserver<State> {
    fn clone(&self) -> Self {
        Self {
            snapshots: self.snapshots.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<State: Clone> Observer<State> for TestObserver<State> {
    fn observe(&mut self, state: &State) {
        self.snapshots.lock().push(state.clone());
    }
}

#[cfg(any(test, feature = "testing"))]
impl<State: Clone + Send + 'static> Default for TestObserver<State> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<State: Clone + Send + 'static> TestObserver<State> {
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of states observed so far.
    pub fn count(&self) -> usize {
        self.snapshots.lock().len()
    }

    /// The most recently observed state.
    pub fn last(&self) -> Option<State> {
        self.snapshots.lock().last().cloned()
    }

    /// Access the captured states with a closure.
    pub fn with_snapshots<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<State>) -> R,
    {
        let snapshots = self.snapshots.lock();
        f(&snapshots)
    }
}
