//! The store core that owns one state instance and serializes its updates.

use core::sync::atomic::{AtomicBool, Ordering};

use flume::{Receiver, Sender};
use spin::Mutex;

use crate::{Observer, Reducer};

type BoxedObserver<S> = Box<dyn Observer<S> + Send>;

/// The store core shared by every [`Dispatch`](crate::Dispatch) of a provider.
///
/// This is the write side of a provider. It:
/// 1. Holds the current state, replaced wholesale on every update
/// 2. Queues dispatched actions on a channel
/// 3. Reduces queued actions one at a time via [`Reducer::reduce`]
/// 4. Publishes each new state to subscribers, then observers
///
/// Only the dispatch that finds the queue idle drains it. A dispatch issued
/// while draining (from an observer, say) is only enqueued and is picked up
/// by the drain loop already running further up the stack.
pub(crate) struct Store<R: Reducer> {
    reducer: R,
    state: Mutex<R::State>,
    listeners: Mutex<Listeners<R::State>>,
    action_sender: Sender<R::Action>,
    action_receiver: Receiver<R::Action>,
    draining: AtomicBool,
}

struct Listeners<S> {
    observers: Vec<BoxedObserver<S>>,
    subscribers: Vec<Sender<S>>,
    closed: bool,
}

impl<S: Clone> Listeners<S> {
    fn notify_subscribers(&mut self, state: &S) {
        self.subscribers
            .retain(|subscriber| subscriber.send(state.clone()).is_ok());
    }
}

/// Observers taken out of the listener lock while they run.
///
/// On drop, including an unwind out of an observer, they are put back ahead
/// of any observer registered in the meantime. A store closed in the
/// meantime drops them instead.
struct Lent<'a, S> {
    listeners: &'a Mutex<Listeners<S>>,
    observers: Vec<BoxedObserver<S>>,
}

impl<S> Drop for Lent<'_, S> {
    fn drop(&mut self) {
        let observers = core::mem::take(&mut self.observers);
        let mut listeners = self.listeners.lock();
        if listeners.closed {
            // Dropped outside the lock: an observer's drop may touch the store.
            drop(listeners);
            drop(observers);
            return;
        }
        let added = core::mem::replace(&mut listeners.observers, observers);
        listeners.observers.extend(added);
    }
}

impl<R: Reducer> Store<R> {
    /// Seed a new store and publish the seed to the initial observers.
    pub(crate) fn mount(reducer: R, observers: Vec<BoxedObserver<R::State>>) -> Self {
        let (action_sender, action_receiver) = flume::unbounded();
        let seed = reducer.init();

        let mut observers = observers;
        for observer in observers.iter_mut() {
            observer.observe(&seed);
        }
        let listeners = Listeners {
            observers,
            subscribers: Vec::new(),
            closed: false,
        };

        tracing::debug!(
            provider = R::NAME,
            observers = listeners.observers.len(),
            "provider mounted"
        );

        Store {
            reducer,
            state: Mutex::new(seed),
            listeners: Mutex::new(listeners),
            action_sender,
            action_receiver,
            draining: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current state.
    pub(crate) fn state(&self) -> R::State {
        self.state.lock().clone()
    }

    /// Register an observer. Ignored once the store is closed.
    pub(crate) fn add_observer(&self, observer: BoxedObserver<R::State>) {
        let mut listeners = self.listeners.lock();
        if !listeners.closed {
            listeners.observers.push(observer);
        }
    }

    /// Register a subscriber. Dropped at once if the store is closed, which
    /// ends the subscription.
    pub(crate) fn add_subscriber(&self, subscriber: Sender<R::State>) {
        let mut listeners = self.listeners.lock();
        if !listeners.closed {
            listeners.subscribers.push(subscriber);
        }
    }

    /// Detach every observer and subscriber.
    ///
    /// Observers often hold a [`Dispatch`](crate::Dispatch) of this very
    /// store; dropping them breaks that cycle so the store is freed with the
    /// last outside handle. Subscriptions end once drained.
    pub(crate) fn close(&self) {
        let (observers, subscribers) = {
            let mut listeners = self.listeners.lock();
            listeners.closed = true;
            (
                core::mem::take(&mut listeners.observers),
                core::mem::take(&mut listeners.subscribers),
            )
        };
        tracing::debug!(provider = R::NAME, "provider closed");
        // Dropped outside the lock: an observer's drop may touch the store.
        drop(observers);
        drop(subscribers);
    }

    /// Queue an action and, unless a drain is already running, process the
    /// queue until it is empty.
    pub(crate) fn dispatch(&self, action: R::Action) {
        // The store holds the receiver, so the channel never disconnects.
        self.action_sender.send(action).ok();

        loop {
            if self.draining.swap(true, Ordering::AcqRel) {
                return;
            }

            {
                let _guard = DrainGuard(&self.draining);
                while let Ok(action) = self.action_receiver.try_recv() {
                    self.step(action);
                }
            }

            // An action may have slipped in between the last poll and the
            // flag being cleared.
            if self.action_receiver.is_empty() {
                return;
            }
        }
    }

    fn step(&self, action: R::Action) {
        tracing::debug!(provider = R::NAME, ?action, "reducing action");

        // The reducer is pure and never reaches back into the store.
        let next = {
            let current = self.state.lock();
            self.reducer.reduce(action, &current)
        };

        // Replace the state before publishing so observers that read the
        // store see the value they are being handed.
        *self.state.lock() = next.clone();

        // Observers run outside the lock so they may register further
        // observers or subscriptions on this store.
        let mut lent = {
            let mut listeners = self.listeners.lock();
            tracing::trace!(
                provider = R::NAME,
                observers = listeners.observers.len(),
                subscribers = listeners.subscribers.len(),
                "publishing state"
            );
            listeners.notify_subscribers(&next);
            Lent {
                listeners: &self.listeners,
                observers: core::mem::take(&mut listeners.observers),
            }
        };
        for observer in lent.observers.iter_mut() {
            observer.observe(&next);
        }
    }
}

/// Clears the draining flag even if an observer panics.
struct DrainGuard<'a>(&'a AtomicBool);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
