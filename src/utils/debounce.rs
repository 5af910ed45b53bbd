//! Generic debounce primitive
//!
//! Pure scheduling, independent of the layout logic. Wraps a callback so
//! it only fires after a quiet period; a new call cancels the pending
//! timer. With `immediate` set, the callback also fires on the leading
//! edge of a burst and the trailing call is suppressed.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Trailing-edge debouncer built on `setTimeout`/`clearTimeout`
pub struct Debouncer {
    wait_ms: i32,
    immediate: bool,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<dyn Fn()>,
    later: Closure<dyn FnMut()>,
}

impl Debouncer {
    /// Wrap `callback` so it runs `wait_ms` after the last call.
    pub fn new(callback: Rc<dyn Fn()>, wait_ms: i32, immediate: bool) -> Self {
        let pending = Rc::new(Cell::new(None));
        let later = {
            let pending = Rc::clone(&pending);
            let callback = Rc::clone(&callback);
            Closure::wrap(Box::new(move || {
                pending.set(None);
                if !immediate {
                    callback();
                }
            }) as Box<dyn FnMut()>)
        };

        Self { wait_ms, immediate, pending, callback, later }
    }

    /// Record a call; (re)arms the quiet-period timer.
    pub fn call(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let was_idle = self.pending.get().is_none();
        if let Some(handle) = self.pending.take() {
            window.clear_timeout_with_handle(handle);
        }

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.later.as_ref().unchecked_ref(),
            self.wait_ms,
        ) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => log::warn!("failed to schedule debounce timer: {:?}", err),
        }

        if self.immediate && was_idle {
            (self.callback)();
        }
    }
}
