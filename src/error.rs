//! Errors raised by the store, its accessors and tagged action decoding.

use thiserror::Error;

/// Every failure this crate reports.
///
/// All of these are integration mistakes rather than data problems. The
/// panicking accessors ([`use_state`](crate::use_state) and friends) turn
/// [`StoreError::ProviderNotFound`] into a panic carrying the same text.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A tagged action named a variant outside the closed action set.
    #[error("Unhandled action `{tag}`")]
    UnhandledAction { tag: String },

    /// The tag is known but the payload does not fit the variant.
    #[error("Malformed `{tag}` action: {source}")]
    MalformedAction {
        tag: String,
        #[source]
        source: serde_json::Error,
    },

    /// An accessor was called outside every provider of the requested kind.
    #[error("Cannot find {provider}")]
    ProviderNotFound { provider: &'static str },
}
