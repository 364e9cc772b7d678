//! A scoped reducer store for component trees.
//!
//! A provider owns one state instance and makes both its current value and a
//! dispatch handle available to everything run inside its scope. Nested code
//! looks them up ambiently instead of having them threaded through as
//! parameters. State only changes by dispatching an action through the
//! provider's reducer; each dispatch reduces, republishes and returns.
//!
//! ## Example
//!
//! ```rust
//! use sample_context::{
//!     provide_sample, try_use_sample_state, use_sample_dispatch, use_sample_state, Action,
//!     Color,
//! };
//!
//! provide_sample(|| {
//!     let dispatch = use_sample_dispatch();
//!
//!     dispatch.dispatch(Action::SetColor { color: Color::Orange });
//!     dispatch.dispatch(Action::ToggleGood);
//!
//!     let state = use_sample_state();
//!     assert_eq!(state.count, 1);
//!     assert_eq!(state.text, "hi");
//!     assert_eq!(state.color, Color::Orange);
//!     assert!(state.is_good);
//! });
//!
//! // Outside the provider there is nothing to find.
//! assert!(try_use_sample_state().is_err());
//! ```
//!
//! ## Custom state
//!
//! Any [`Reducer`] can back a provider. Lookups are keyed by reducer type, so
//! providers of different reducers nest without hiding each other.
//!
//! ```rust
//! use sample_context::{provide, use_dispatch, use_state, Reducer};
//!
//! struct Counter;
//!
//! impl Reducer for Counter {
//!     const NAME: &'static str = "CounterProvider";
//!     type State = u32;
//!     type Action = u32;
//!
//!     fn init(&self) -> u32 {
//!         0
//!     }
//!
//!     fn reduce(&self, step: u32, count: &u32) -> u32 {
//!         count + step
//!     }
//! }
//!
//! provide(Counter, || {
//!     use_dispatch::<Counter>().dispatch(3);
//!     assert_eq!(use_state::<Counter>(), 3);
//! });
//! ```

mod action;
mod dispatch;
mod error;
mod observer;
mod provider;
mod reducer;
mod sample;
mod state;
mod store;
mod subscription;

pub use action::{Action, TaggedAction};
pub use dispatch::Dispatch;
pub use error::StoreError;
pub use observer::Observer;
pub use provider::{
    provide, try_use_dispatch, try_use_state, use_dispatch, use_state, MountedProvider, Provider,
};
pub use reducer::{transition, transition_tagged, Reducer, SampleReducer};
pub use sample::{
    provide_sample, sample_provider, try_use_sample_dispatch, try_use_sample_state,
    use_sample_dispatch, use_sample_state, MountedSampleProvider, SampleDispatch, SampleProvider,
};
pub use state::{Color, State};
pub use subscription::Subscription;

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use observer::TestObserver;
