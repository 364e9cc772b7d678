//! The sample state record and its color palette.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of colors the sample state can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Yellow,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Orange, Color::Yellow];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sample state record.
///
/// Every field is always present. New values are produced by
/// [`SampleReducer`](crate::SampleReducer) from an [`Action`](crate::Action);
/// nothing outside the reducer builds a successor state.
///
/// Serializes as `{"count":1,"text":"hi","color":"yellow","isGood":false}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub count: i64,
    pub text: String,
    pub color: Color,
    pub is_good: bool,
}

impl State {
    /// The seed every sample provider mounts with.
    pub fn seed() -> Self {
        State {
            count: 1,
            text: "hi".to_string(),
            color: Color::Yellow,
            is_good: false,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::seed()
    }
}
