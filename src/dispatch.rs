//! Dispatch handle: the only write path into a provider's state.

use portable_atomic_util::Arc;
use serde_json::Value;

use crate::store::Store;
use crate::{Observer, Reducer, StoreError, Subscription, TaggedAction};

/// Handle to a mounted provider's store.
///
/// Clone this handle to give components the ability to submit actions.
/// Every clone addresses the same state instance. Callers never build a
/// successor state themselves: they submit an action and the provider's
/// reducer computes and publishes the result before
/// [`dispatch`](Self::dispatch) returns.
///
/// # Example
///
/// ```rust
/// use sample_context::{Action, Color, Provider, SampleReducer};
///
/// let provider = Provider::new(SampleReducer).mount();
/// let dispatch = provider.dispatch();
///
/// dispatch.dispatch(Action::SetColor { color: Color::Orange });
/// assert_eq!(dispatch.state().color, Color::Orange);
/// ```
pub struct Dispatch<R: Reducer>(pub(crate) Arc<Store<R>>);

impl<R: Reducer> Clone for Dispatch<R> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<R: Reducer> Dispatch<R> {
    pub(crate) fn new(store: Store<R>) -> Self {
        Self(Arc::new(store))
    }

    /// Submit an action.
    ///
    /// On the calling thread the action is reduced and the new state
    /// published to every subscriber and observer before this returns. When
    /// called from inside an observer the action is queued behind the one
    /// being published and is still processed before the outermost dispatch
    /// returns.
    ///
    /// If another thread is already processing this store's queue, the
    /// action is only queued: that thread reduces and publishes it before its
    /// own dispatch returns, and this call may return first.
    pub fn dispatch(&self, action: R::Action) {
        self.0.dispatch(action);
    }

    /// Submit an action in its tagged wire form.
    ///
    /// An unknown tag or a malformed payload is rejected before it reaches
    /// the reducer, leaving the state untouched.
    pub fn dispatch_tagged(&self, action: &Value) -> Result<(), StoreError>
    where
        R::Action: TaggedAction,
    {
        let action = <R::Action as TaggedAction>::from_tagged(action).inspect_err(|error| {
            tracing::warn!(provider = R::NAME, %error, "rejected tagged action");
        })?;
        self.dispatch(action);
        Ok(())
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.0.state()
    }

    /// Attach an observer to the live store.
    ///
    /// The observer sees every state published from now on, not the current
    /// one. Called from inside an observer, the new observer starts with the
    /// next publication. Ignored once the provider has been dropped.
    pub fn observe(&self, observer: impl Observer<R::State> + Send + 'static) {
        self.0.add_observer(Box::new(observer));
    }

    /// Open a queue of every state published from now on.
    ///
    /// Once the provider has been dropped the subscription is already ended.
    pub fn subscribe(&self) -> Subscription<R::State> {
        let (sender, receiver) = flume::unbounded();
        self.0.add_subscriber(sender);
        Subscription::new(receiver)
    }

    /// Whether two handles address the same provider instance.
    pub fn same_provider(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
