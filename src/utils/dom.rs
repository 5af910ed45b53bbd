//! Small web-sys access helpers shared across the engine

use web_sys::{Document, Element, Window};

use crate::errors::SidenoteError;

/// The global window, or an error outside a browser environment
pub fn window() -> Result<Window, SidenoteError> {
    web_sys::window().ok_or(SidenoteError::NoWindow)
}

/// The global window and its document
pub fn window_document() -> Result<(Window, Document), SidenoteError> {
    let window = window()?;
    let document = window.document().ok_or(SidenoteError::NoDocument)?;
    Ok((window, document))
}

/// Current viewport width in pixels, read fresh on every call
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Look up the content root for the given selector, if this page has one
pub fn query_root(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}
