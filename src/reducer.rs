//! Reducer trait defining the store contract, and the sample reducer.

use core::fmt;

use serde_json::Value;

use crate::{Action, State, StoreError, TaggedAction};

/// Reducer trait defining the store contract.
///
/// Implementations provide two pure functions:
/// - [`init`](Self::init): Produce the seed state a provider mounts with
/// - [`reduce`](Self::reduce): Transform (Action, State) → State
///
/// See the [crate-level documentation](crate) for a complete example.
pub trait Reducer: 'static {
    /// Name of the provider, used in lookup errors and log fields.
    const NAME: &'static str;

    /// The state record owned by a provider.
    type State: Clone + Send + 'static;

    /// The closed set of changes that can be dispatched.
    type Action: fmt::Debug + Send + 'static;

    /// Produce the seed state.
    ///
    /// This is called exactly once, when a provider is mounted.
    fn init(&self) -> Self::State;

    /// Reduce an action to the next state.
    ///
    /// The current state is borrowed and must be left untouched; the returned
    /// value replaces it wholesale.
    ///
    /// # Arguments
    ///
    /// * `action` - The action to apply
    /// * `state` - The current state
    fn reduce(&self, action: Self::Action, state: &Self::State) -> Self::State;
}

/// Reducer for the sample [`State`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleReducer;

impl Reducer for SampleReducer {
    const NAME: &'static str = "SampleProvider";

    type State = State;
    type Action = Action;

    fn init(&self) -> State {
        State::seed()
    }

    fn reduce(&self, action: Action, state: &State) -> State {
        match action {
            Action::SetCount { count } => State {
                count,
                ..state.clone()
            },
            Action::SetText { text } => State {
                text,
                ..state.clone()
            },
            Action::SetColor { color } => State {
                color,
                ..state.clone()
            },
            Action::ToggleGood => State {
                is_good: !state.is_good,
                ..state.clone()
            },
        }
    }
}

/// Apply one action to a sample state.
pub fn transition(state: &State, action: Action) -> State {
    SampleReducer.reduce(action, state)
}

/// Apply one action in its tagged wire form to a sample state.
///
/// Fails with [`StoreError::UnhandledAction`] when the tag is outside the
/// action set; the input state is never touched.
pub fn transition_tagged(state: &State, action: &Value) -> Result<State, StoreError> {
    let action = Action::from_tagged(action)?;
    Ok(transition(state, action))
}
