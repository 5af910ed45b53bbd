//! Applying geometry to live sidenotes
//!
//! Walks every synthesized sidenote under the content root in document
//! order, measures anchor and container rectangles, and writes the
//! resolved offset as the element's inline `top` style. This is the only
//! inline style the engine ever sets.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::SidenoteConfig;
use crate::geometry::compute_offset;

/// Position all sidenotes under `root` with a single greedy pass.
///
/// Notes whose anchor has left the DOM are skipped: they keep their
/// previous `top` and contribute nothing to the collision bound. The
/// pass never fails; at worst it positions fewer notes.
pub fn position_notes(document: &Document, root: &Element, config: &SidenoteConfig) {
    let Ok(notes) = root.query_selector_all(&config.note_selector()) else {
        return;
    };

    let mut prev_bottom: Option<f64> = None;
    for i in 0..notes.length() {
        let Some(note) = notes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let Some(anchor_id) = note.get_attribute("data-anchor-id") else {
            continue;
        };
        let Some(anchor) = document.get_element_by_id(&anchor_id) else {
            log::debug!("anchor '{}' no longer in DOM, leaving note in place", anchor_id);
            continue;
        };
        let Some(container) = note.parent_element() else {
            continue;
        };

        let container_top = container.get_bounding_client_rect().top();
        let anchor_top = anchor.get_bounding_client_rect().top();
        let offset = compute_offset(anchor_top, container_top, prev_bottom, config.collision_margin);

        if note
            .style()
            .set_property("top", &format!("{}px", offset))
            .is_err()
        {
            continue;
        }

        // The resolved bottom bounds the next note; computing it from the
        // assigned offset keeps the pass order-stable even before the
        // style change has flushed.
        let height = note.get_bounding_client_rect().height();
        prev_bottom = Some(container_top + offset + height);
    }
}
