//! Queued delivery of published states.

use flume::{Receiver, TryRecvError};

/// A queue of every state published after it was created.
///
/// Obtained from [`Dispatch::subscribe`](crate::Dispatch::subscribe). Unlike an
/// [`Observer`](crate::Observer), a subscription does not run during dispatch;
/// states pile up until the holder drains them. Dropping the subscription
/// detaches it from the store.
pub struct Subscription<State> {
    receiver: Receiver<State>,
}

impl<State> Subscription<State> {
    pub(crate) fn new(receiver: Receiver<State>) -> Self {
        Self { receiver }
    }

    /// Take the oldest undelivered state, if any.
    ///
    /// Returns `None` both when nothing is pending and when the store is gone.
    pub fn try_next(&self) -> Option<State> {
        match self.receiver.try_recv() {
            Ok(state) => Some(state),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Drain every pending state and keep only the newest.
    pub fn latest(&self) -> Option<State> {
        self.receiver.try_iter().last()
    }

    /// Number of states waiting to be taken.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Wait for the next published state.
    ///
    /// Resolves to `None` once the store has been dropped and the queue is empty.
    pub async fn next(&self) -> Option<State> {
        self.receiver.recv_async().await.ok()
    }

    #[cfg(feature = "futures")]
    /// Turn the subscription into a [`futures::Stream`] of published states.
    pub fn changes(self) -> impl futures::Stream<Item = State>
    where
        State: 'static,
    {
        self.receiver.into_stream()
    }
}
