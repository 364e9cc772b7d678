//! Ready-made provider and accessors for the sample state.

use crate::{
    provide, try_use_dispatch, try_use_state, use_dispatch, use_state, Dispatch,
    MountedProvider, Provider, SampleReducer, State, StoreError,
};

/// An unmounted provider of the sample state.
pub type SampleProvider = Provider<SampleReducer>;

/// A mounted provider of the sample state.
pub type MountedSampleProvider = MountedProvider<SampleReducer>;

/// Dispatch handle for the sample state.
pub type SampleDispatch = Dispatch<SampleReducer>;

/// A provider seeded with `{count: 1, text: "hi", color: yellow, isGood: false}`.
pub fn sample_provider() -> SampleProvider {
    Provider::new(SampleReducer)
}

/// Mount a fresh sample provider and run `children` inside its scope.
pub fn provide_sample<T>(children: impl FnOnce() -> T) -> T {
    provide(SampleReducer, children)
}

/// Current sample state.
///
/// # Panics
///
/// Panics with `Cannot find SampleProvider` outside every sample provider.
pub fn use_sample_state() -> State {
    use_state::<SampleReducer>()
}

/// Sample dispatch handle.
///
/// # Panics
///
/// Panics with `Cannot find SampleProvider` outside every sample provider.
pub fn use_sample_dispatch() -> SampleDispatch {
    use_dispatch::<SampleReducer>()
}

pub fn try_use_sample_state() -> Result<State, StoreError> {
    try_use_state::<SampleReducer>()
}

pub fn try_use_sample_dispatch() -> Result<SampleDispatch, StoreError> {
    try_use_dispatch::<SampleReducer>()
}
