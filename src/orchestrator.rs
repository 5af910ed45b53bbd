//! Lifecycle orchestration
//!
//! Wires the engine to the page: an eager first pass, a debounced resize
//! listener, a post-`load` re-pass for content that reflows after script
//! execution, and the click handlers. Initialization is guarded so that
//! calling the entry point more than once never registers duplicate
//! listeners; repeated calls just re-reconcile.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use crate::config::SidenoteConfig;
use crate::errors::SidenoteError;
use crate::highlight::Highlighter;
use crate::mode::{LayoutMode, ModeController};
use crate::synthesis::content_id_for;
use crate::utils::dom::{query_root, window_document};
use crate::utils::Debouncer;

struct Engine {
    controller: Rc<RefCell<ModeController>>,
}

thread_local! {
    static ENGINE: RefCell<Option<Engine>> = RefCell::new(None);
}

/// Initialize the sidenote engine.
///
/// A no-op when `enabled` is false or when the page carries no content
/// root (non-post pages). Safe to call more than once: listeners are
/// registered on the first call only; later calls re-run reconciliation.
pub fn init(config: SidenoteConfig, enabled: bool) -> Result<(), SidenoteError> {
    if !enabled {
        return Ok(());
    }

    let (window, document) = window_document()?;
    if query_root(&document, &config.content_root_selector()).is_none() {
        log::debug!("no content root '{}' on this page", config.content_root_selector());
        return Ok(());
    }

    let already_wired = ENGINE.with(|engine| engine.borrow().is_some());
    if already_wired {
        refresh();
        return Ok(());
    }

    let controller = Rc::new(RefCell::new(ModeController::new(config.clone())));

    wire_resize(&window, &controller, &config)?;
    wire_load(&window, &controller)?;
    wire_reference_clicks(&document, &controller, &config)?;
    wire_outside_clicks(&document, &config)?;

    controller.borrow_mut().reconcile();

    ENGINE.with(|engine| {
        *engine.borrow_mut() = Some(Engine { controller });
    });
    Ok(())
}

/// Re-run reconciliation against the current viewport.
pub fn refresh() {
    ENGINE.with(|engine| {
        if let Some(engine) = engine.borrow().as_ref() {
            engine.controller.borrow_mut().reconcile();
        }
    });
}

/// Tear sidenote presentation down and restore the inline endnote flow.
pub fn force_inline() {
    ENGINE.with(|engine| {
        if let Some(engine) = engine.borrow().as_ref() {
            engine.controller.borrow_mut().force_inline();
        }
    });
}

/// The mode the engine last reconciled to, if initialized.
pub fn current_mode() -> Option<LayoutMode> {
    ENGINE.with(|engine| {
        engine
            .borrow()
            .as_ref()
            .and_then(|e| e.controller.borrow().mode())
    })
}

fn wire_resize(
    window: &Window,
    controller: &Rc<RefCell<ModeController>>,
    config: &SidenoteConfig,
) -> Result<(), SidenoteError> {
    let controller = Rc::clone(controller);
    let debouncer = Debouncer::new(
        Rc::new(move || controller.borrow_mut().reconcile()),
        config.resize_debounce_ms,
        false,
    );

    let closure = Closure::wrap(Box::new(move |_: Event| debouncer.call()) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_load(
    window: &Window,
    controller: &Rc<RefCell<ModeController>>,
) -> Result<(), SidenoteError> {
    // One-time re-pass once images and fonts have settled.
    let controller = Rc::clone(controller);
    let closure = Closure::once(move || controller.borrow_mut().reconcile());
    window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_reference_clicks(
    document: &Document,
    controller: &Rc<RefCell<ModeController>>,
    config: &SidenoteConfig,
) -> Result<(), SidenoteError> {
    let anchors = document.query_selector_all(&config.reference_anchor_selector())?;

    let controller = Rc::clone(controller);
    let highlighter = Highlighter::new(config.clone());
    let handler = Closure::wrap(Box::new(move |event: Event| {
        on_reference_click(&event, &controller, &highlighter);
    }) as Box<dyn FnMut(_)>);

    for i in 0..anchors.length() {
        if let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let _ = anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
    }
    handler.forget();
    Ok(())
}

fn wire_outside_clicks(document: &Document, config: &SidenoteConfig) -> Result<(), SidenoteError> {
    let highlighter = Highlighter::new(config.clone());
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Ok((_, document)) = window_document() else {
            return;
        };
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if highlighter.is_outside_click(&target) {
            highlighter.clear_all(&document);
        }
    }) as Box<dyn FnMut(_)>);

    document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn on_reference_click(
    event: &Event,
    controller: &Rc<RefCell<ModeController>>,
    highlighter: &Highlighter,
) {
    let Ok((_, document)) = window_document() else {
        return;
    };

    highlighter.clear_all(&document);

    // In inline mode the default jump-to-anchor navigation proceeds.
    if controller.borrow().active() != LayoutMode::Margin {
        return;
    }

    let Some(anchor) = event
        .current_target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return;
    };
    let Some(content_id) = content_id_for(anchor.get_attribute("href").as_deref(), &anchor.id())
    else {
        return;
    };

    if highlighter.activate(&document, &content_id) {
        event.prevent_default();
        event.stop_propagation();
    }
}
