//! Click-driven sidenote highlighting
//!
//! Explicit highlight-state operations: `activate` marks the sidenote
//! paired with a clicked reference, `clear_all` removes the highlight
//! from every currently active element. Clearing deliberately queries
//! the document instead of remembering a single handle, since rapid
//! double-activation can leave more than one note active.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::SidenoteConfig;

/// Highlight-state operations over the document
pub struct Highlighter {
    config: SidenoteConfig,
}

impl Highlighter {
    pub fn new(config: SidenoteConfig) -> Self {
        Self { config }
    }

    /// Mark the sidenote derived from `content_id` active and bring it
    /// into view. Returns false when no such sidenote exists.
    pub fn activate(&self, document: &Document, content_id: &str) -> bool {
        let Some(note) = document.get_element_by_id(&self.config.sidenote_id(content_id)) else {
            return false;
        };

        let _ = note.class_list().add_1(&self.config.active_class);

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        note.scroll_into_view_with_scroll_into_view_options(&options);

        true
    }

    /// Remove the highlight from every active element in the document.
    pub fn clear_all(&self, document: &Document) {
        let Ok(active) = document.query_selector_all(&self.config.active_selector()) else {
            return;
        };
        for i in 0..active.length() {
            if let Some(element) = active.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                let _ = element.class_list().remove_1(&self.config.active_class);
            }
        }
    }

    /// True when a click on `target` lands outside every note element
    /// and every reference marker.
    pub fn is_outside_click(&self, target: &Element) -> bool {
        let in_note = target
            .closest(&format!(".{}", self.config.note_class))
            .ok()
            .flatten()
            .is_some();
        let in_reference = target
            .closest(&self.config.reference_selector())
            .ok()
            .flatten()
            .is_some();
        !in_note && !in_reference
    }
}
