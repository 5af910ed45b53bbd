//! Shared helpers for WASM API operations

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

/// Deserialize a value from JavaScript with logged error context
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}
