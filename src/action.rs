//! The closed set of sample actions and their tagged wire form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Color, StoreError};

/// One intended change to the sample [`State`](crate::State).
///
/// The tagged form mirrors the payload shapes consumers send over the wire:
///
/// ```json
/// {"type": "SET_COUNT", "count": 3}
/// {"type": "SET_TEXT", "text": "hello"}
/// {"type": "SET_COLOR", "color": "orange"}
/// {"type": "TOGGLE_GOOD"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetCount { count: i64 },
    SetText { text: String },
    SetColor { color: Color },
    ToggleGood,
}

impl Action {
    /// The wire tag of this action.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::SetCount { .. } => "SET_COUNT",
            Action::SetText { .. } => "SET_TEXT",
            Action::SetColor { .. } => "SET_COLOR",
            Action::ToggleGood => "TOGGLE_GOOD",
        }
    }
}

/// An action type that can be decoded from its `{"type": ...}` tagged form.
///
/// Decoding checks the tag against [`TAGS`](Self::TAGS) before looking at the
/// payload, so a foreign tag is always reported as
/// [`StoreError::UnhandledAction`] rather than as a payload error.
pub trait TaggedAction: DeserializeOwned {
    /// Every tag the action set accepts.
    const TAGS: &'static [&'static str];

    /// Decode a tagged action.
    fn from_tagged(value: &Value) -> Result<Self, StoreError> {
        let tag = match value.get("type") {
            Some(Value::String(tag)) => tag.as_str(),
            Some(other) => {
                return Err(StoreError::UnhandledAction {
                    tag: other.to_string(),
                })
            }
            None => {
                return Err(StoreError::UnhandledAction {
                    tag: String::new(),
                })
            }
        };

        if !Self::TAGS.contains(&tag) {
            return Err(StoreError::UnhandledAction {
                tag: tag.to_string(),
            });
        }

        Self::deserialize(value).map_err(|source| StoreError::MalformedAction {
            tag: tag.to_string(),
            source,
        })
    }
}

impl TaggedAction for Action {
    const TAGS: &'static [&'static str] = &["SET_COUNT", "SET_TEXT", "SET_COLOR", "TOGGLE_GOOD"];
}
