//! Core API functions
//!
//! The JavaScript surface of the engine. Initialization takes the
//! single enable flag from the page; an extended variant accepts a
//! configuration object for non-default markup conventions.

use wasm_bindgen::prelude::*;

use super::helpers;
use crate::config::SidenoteConfig;
use crate::mode::LayoutMode;
use crate::orchestrator;

/// Initialize the sidenote engine with the default configuration.
///
/// `enabled` is the page-level feature flag; `false` skips all wiring.
#[wasm_bindgen(js_name = initSidenotes)]
pub fn init_sidenotes(enabled: bool) -> Result<(), JsValue> {
    orchestrator::init(SidenoteConfig::default(), enabled)?;
    Ok(())
}

/// Initialize with an explicit configuration object.
///
/// Unspecified fields fall back to the defaults, so callers only name
/// what differs from the reference markup convention.
#[wasm_bindgen(js_name = initSidenotesWithConfig)]
pub fn init_sidenotes_with_config(config: JsValue, enabled: bool) -> Result<(), JsValue> {
    let config: SidenoteConfig = helpers::deserialize(config, "invalid sidenote configuration")?;
    orchestrator::init(config, enabled)?;
    Ok(())
}

/// Re-run materialization and positioning against the current viewport.
#[wasm_bindgen(js_name = refreshSidenotes)]
pub fn refresh_sidenotes() {
    orchestrator::refresh();
}

/// Tear down sidenote presentation and restore the inline endnote flow.
#[wasm_bindgen(js_name = teardownSidenotes)]
pub fn teardown_sidenotes() {
    orchestrator::force_inline();
}

/// The layout mode the engine last reconciled to: "margin", "inline",
/// or undefined before initialization.
#[wasm_bindgen(js_name = currentLayoutMode)]
pub fn current_layout_mode() -> Option<String> {
    orchestrator::current_mode().map(|mode| match mode {
        LayoutMode::Margin => "margin".to_string(),
        LayoutMode::Inline => "inline".to_string(),
    })
}
