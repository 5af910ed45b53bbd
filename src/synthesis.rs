//! DOM synthesis: materializing and tearing down sidenotes
//!
//! Scans the content root for footnote reference markers, builds one
//! sidenote container per block that holds at least one marker, and
//! fills it with sidenote elements cloned from the paired footnote
//! content. Materialization is idempotent: the skip rules make a second
//! call before any teardown a structural no-op.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

use crate::config::SidenoteConfig;

/// Derive the note-content element id paired with a reference anchor.
///
/// Two naming conventions are recognized, in order:
/// 1. the fragment of the anchor's `href` names the content element
///    (`href="#fn1"` pairs with `id="fn1"`);
/// 2. the anchor's own id with the literal `ref` infix removed names it
///    (`fnref:1` pairs with `fn:1`, `fnref1` with `fn1`).
pub fn content_id_for(href: Option<&str>, anchor_id: &str) -> Option<String> {
    if let Some(href) = href {
        if let Some((_, fragment)) = href.rsplit_once('#') {
            if !fragment.is_empty() {
                return Some(fragment.to_string());
            }
        }
    }

    if let Some(pos) = anchor_id.find("ref") {
        let mut id = String::with_capacity(anchor_id.len() - 3);
        id.push_str(&anchor_id[..pos]);
        id.push_str(&anchor_id[pos + 3..]);
        if !id.is_empty() {
            return Some(id);
        }
    }

    None
}

/// True when anchor text is nothing but a "return to reference" glyph,
/// allowing variation selectors and surrounding whitespace.
pub fn is_backref_text(text: &str, glyph: char) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c == glyph || c == '\u{fe0e}' || c == '\u{fe0f}')
        && trimmed.contains(glyph)
}

/// Synthesize sidenote containers under `root`.
///
/// Walks the root's direct children in document order. A child is
/// skipped when it is itself a container, or when its next sibling
/// already is one (the duplicate-insertion guard). Returns the number of
/// containers inserted by this call.
pub fn materialize(document: &Document, root: &Element, config: &SidenoteConfig) -> usize {
    let mut created = 0;
    let children = root.children();

    // `children` is live: a freshly inserted container shows up in the
    // walk and is skipped by the class check.
    let mut index = 0;
    while index < children.length() {
        let Some(block) = children.item(index) else {
            break;
        };
        index += 1;

        if block.class_list().contains(&config.container_class) {
            continue;
        }
        if let Some(next) = block.next_element_sibling() {
            if next.class_list().contains(&config.container_class) {
                continue;
            }
        }

        let Ok(markers) = block.query_selector_all(&config.reference_selector()) else {
            continue;
        };
        if markers.length() == 0 {
            continue;
        }

        let Some(container) = build_container(document, &markers, config) else {
            continue;
        };
        if block.insert_adjacent_element("afterend", &container).is_ok() {
            created += 1;
        }
    }

    created
}

/// Remove every synthesized container under `root`. Returns the count.
pub fn teardown(root: &Element, config: &SidenoteConfig) -> usize {
    let Ok(containers) = root.query_selector_all(&config.container_selector()) else {
        return 0;
    };

    let mut removed = 0;
    for i in 0..containers.length() {
        if let Some(container) = containers.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            container.remove();
            removed += 1;
        }
    }
    removed
}

fn build_container(
    document: &Document,
    markers: &NodeList,
    config: &SidenoteConfig,
) -> Option<Element> {
    let container = document.create_element("div").ok()?;
    container.set_class_name(&config.container_class);

    for i in 0..markers.length() {
        let Some(marker) = markers.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match build_sidenote(document, &marker, config) {
            Some(note) => {
                let _ = container.append_child(&note);
            }
            // Missing pairing: skip this marker only, keep the rest.
            None => log::debug!("skipping footnote reference without resolvable content"),
        }
    }

    Some(container)
}

fn build_sidenote(
    document: &Document,
    marker: &Element,
    config: &SidenoteConfig,
) -> Option<Element> {
    let anchor = marker.query_selector("a").ok().flatten()?;
    let anchor_id = anchor.id();
    let content_id = content_id_for(anchor.get_attribute("href").as_deref(), &anchor_id)?;
    let content = document.get_element_by_id(&content_id)?;

    let note = document.create_element("aside").ok()?;
    note.set_id(&config.sidenote_id(&content_id));
    note.set_class_name(&config.note_class);
    let _ = note.set_attribute("role", "note");
    let _ = note.set_attribute("data-anchor-id", &anchor_id);
    note.set_inner_html(&content.inner_html());

    strip_backrefs(&note, config);

    // Visible ordinal label, cloned from the marker's rendered text.
    let label = document.create_element("div").ok()?;
    label.set_class_name(&config.label_class);
    label.set_text_content(Some(marker.text_content().unwrap_or_default().trim()));
    let _ = note.insert_before(&label, note.first_child().as_ref());

    Some(note)
}

/// Drop "return to reference" anchors from cloned note content. Both
/// markup conventions are supported: an explicit backref class, or an
/// anchor whose text is just the back-arrow glyph.
fn strip_backrefs(note: &Element, config: &SidenoteConfig) {
    let Ok(anchors) = note.query_selector_all("a") else {
        return;
    };

    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let by_class = anchor.class_list().contains(&config.backref_class);
        let by_glyph = anchor
            .text_content()
            .map(|text| is_backref_text(&text, config.backref_glyph))
            .unwrap_or(false);
        if by_class || by_glyph {
            anchor.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_by_href_fragment() {
        assert_eq!(content_id_for(Some("#fn1"), "fnref1"), Some("fn1".to_string()));
        assert_eq!(
            content_id_for(Some("https://example.com/post#fn2"), ""),
            Some("fn2".to_string())
        );
    }

    #[test]
    fn pairs_by_id_minus_ref_infix() {
        assert_eq!(content_id_for(None, "fnref1"), Some("fn1".to_string()));
        assert_eq!(content_id_for(None, "fnref:3"), Some("fn:3".to_string()));
        // Empty fragment falls through to the id convention.
        assert_eq!(content_id_for(Some("#"), "fnref7"), Some("fn7".to_string()));
    }

    #[test]
    fn unresolvable_pairing_yields_none() {
        assert_eq!(content_id_for(None, "footnote1"), None);
        assert_eq!(content_id_for(None, ""), None);
        assert_eq!(content_id_for(Some("/elsewhere"), "ref"), None);
    }

    #[test]
    fn recognizes_backref_glyphs() {
        assert!(is_backref_text("↩", '↩'));
        assert!(is_backref_text("↩\u{fe0e}", '↩'));
        assert!(is_backref_text(" ↩\u{fe0f} ", '↩'));
    }

    #[test]
    fn rejects_ordinary_anchor_text() {
        assert!(!is_backref_text("back", '↩'));
        assert!(!is_backref_text("↩ back", '↩'));
        assert!(!is_backref_text("", '↩'));
        assert!(!is_backref_text("\u{fe0f}", '↩'));
    }
}
