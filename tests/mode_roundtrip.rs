//! Browser tests for mode transitions and round-trip stability
#![cfg(target_arch = "wasm32")]

use sidenotes_wasm::config::SidenoteConfig;
use sidenotes_wasm::mode::{LayoutMode, ModeController};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

const POST: &str = r##"
<div class="gh-content">
  <p>Text<sup class="footnote-ref"><a id="fnref1" href="#fn1">1</a></sup>.</p>
  <div class="footnotes">
    <ol><li id="fn1"><p>A note</p></li></ol>
  </div>
</div>
"##;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount() -> Element {
    let document = document();
    document.body().unwrap().set_inner_html(POST);
    document.query_selector(".gh-content").unwrap().unwrap()
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

// Breakpoint 0 makes every viewport "wide"; f64::MAX makes every
// viewport "narrow". That keeps the tests independent of the harness
// window size.
fn wide_config() -> SidenoteConfig {
    SidenoteConfig { breakpoint_width: 0.0, ..SidenoteConfig::default() }
}

fn narrow_config() -> SidenoteConfig {
    SidenoteConfig { breakpoint_width: f64::MAX, ..SidenoteConfig::default() }
}

#[wasm_bindgen_test]
fn entering_margin_mode_materializes_and_toggles_classes() {
    let root = mount();
    let mut controller = ModeController::new(wide_config());

    controller.reconcile();

    assert_eq!(controller.mode(), Some(LayoutMode::Margin));
    assert_eq!(count(&root, ".notes-wrapper"), 1);
    assert_eq!(count(&root, "aside.note"), 1);
    assert!(root.class_list().contains("hide-endnotes"));
    assert!(!root.class_list().contains("hide-sidenotes"));
}

#[wasm_bindgen_test]
fn entering_inline_mode_tears_down_and_restores_endnotes() {
    let root = mount();
    let mut wide = ModeController::new(wide_config());
    let mut narrow = ModeController::new(narrow_config());

    wide.reconcile();
    narrow.reconcile();

    assert_eq!(narrow.mode(), Some(LayoutMode::Inline));
    assert_eq!(count(&root, ".notes-wrapper"), 0);
    assert_eq!(count(&root, "aside.note"), 0);
    assert!(root.class_list().contains("hide-sidenotes"));
    assert!(!root.class_list().contains("hide-endnotes"));
}

#[wasm_bindgen_test]
fn mode_round_trip_accumulates_nothing() {
    let root = mount();
    let mut wide = ModeController::new(wide_config());
    let mut narrow = ModeController::new(narrow_config());

    wide.reconcile();
    let containers = count(&root, ".notes-wrapper");
    let notes = count(&root, "aside.note");

    narrow.reconcile();
    wide.reconcile();
    narrow.reconcile();
    wide.reconcile();

    assert_eq!(count(&root, ".notes-wrapper"), containers);
    assert_eq!(count(&root, "aside.note"), notes);
}

#[wasm_bindgen_test]
fn same_state_reentry_creates_no_duplicates() {
    let root = mount();
    let mut controller = ModeController::new(wide_config());

    controller.reconcile();
    controller.reconcile();
    controller.reconcile();

    assert_eq!(count(&root, ".notes-wrapper"), 1);
    assert_eq!(count(&root, "aside.note"), 1);
}

#[wasm_bindgen_test]
fn positioned_notes_carry_an_inline_top() {
    let _root = mount();
    let mut controller = ModeController::new(wide_config());
    controller.reconcile();

    let note = document()
        .get_element_by_id("sidenote-fn1")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    let top = note.style().get_property_value("top").unwrap();
    assert!(top.ends_with("px"), "expected a computed top, got '{}'", top);
}

#[wasm_bindgen_test]
fn force_inline_overrides_a_wide_viewport() {
    let root = mount();
    let mut controller = ModeController::new(wide_config());
    controller.reconcile();

    controller.force_inline();

    assert_eq!(controller.mode(), Some(LayoutMode::Inline));
    assert_eq!(count(&root, ".notes-wrapper"), 0);
    assert!(root.class_list().contains("hide-sidenotes"));
}
