//! Error types for the sidenote engine
//!
//! Internal failures only. None of these ever propagate out of an event
//! handler: a missing collaborator degrades the affected pass (or single
//! marker) to a no-op rather than breaking unrelated page functionality.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures internal to the sidenote engine
#[derive(Debug, Clone, Error)]
pub enum SidenoteError {
    /// No `window` object in this environment
    #[error("no window available")]
    NoWindow,

    /// The window carries no document
    #[error("no document attached to the window")]
    NoDocument,

    /// A DOM operation was rejected by the host environment
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SidenoteError {
    fn from(value: JsValue) -> Self {
        SidenoteError::Dom(format!("{:?}", value))
    }
}

impl From<SidenoteError> for JsValue {
    fn from(err: SidenoteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
