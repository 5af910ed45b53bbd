//! Responsive mode controller
//!
//! Explicit two-state machine deciding between `margin` (sidenotes in
//! the margin) and `inline` (default endnote flow). The state enum is
//! the source of truth; DOM presence of synthesized containers is an
//! effect of transitions, never something queried to infer mode. The
//! breakpoint predicate is evaluated fresh from the viewport on every
//! reconciliation so no cached boolean can desync.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::SidenoteConfig;
use crate::position::position_notes;
use crate::synthesis;
use crate::utils::dom::{query_root, viewport_width, window_document};

/// The two presentation states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Wide viewport: sidenotes rendered in the margin
    Margin,
    /// Narrow viewport: default inline endnote rendering
    Inline,
}

/// Reconciles DOM presentation with the viewport-derived layout mode
pub struct ModeController {
    config: SidenoteConfig,
    mode: Option<LayoutMode>,
}

impl ModeController {
    pub fn new(config: SidenoteConfig) -> Self {
        Self { config, mode: None }
    }

    /// The mode the controller last reconciled to, if any
    pub fn mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    /// The mode currently in effect: last reconciled, or the fresh
    /// predicate before the first reconciliation.
    pub fn active(&self) -> LayoutMode {
        self.mode.unwrap_or_else(|| self.evaluate())
    }

    /// Evaluate the breakpoint predicate against the current viewport.
    pub fn evaluate(&self) -> LayoutMode {
        let width = viewport_width().unwrap_or(0.0);
        if width >= self.config.breakpoint_width {
            LayoutMode::Margin
        } else {
            LayoutMode::Inline
        }
    }

    /// Re-derive the target mode and reconcile the DOM with it.
    ///
    /// Re-entering `margin` creates no containers (materialize is
    /// idempotent) but still re-runs the geometry pass, since a resize
    /// that stayed on the wide side of the breakpoint reflows text and
    /// invalidates every offset. Re-entering `inline` is a no-op apart
    /// from the idempotent teardown.
    pub fn reconcile(&mut self) {
        let Ok((_, document)) = window_document() else {
            return;
        };
        let Some(root) = query_root(&document, &self.config.content_root_selector()) else {
            return;
        };

        let target = self.evaluate();
        match target {
            LayoutMode::Margin => {
                let entering = self.mode != Some(LayoutMode::Margin);
                let created = synthesis::materialize(&document, &root, &self.config);
                if created > 0 {
                    log::debug!("materialized {} sidenote container(s)", created);
                }
                self.apply_margin_classes(&root);
                position_notes(&document, &root, &self.config);
                if entering {
                    // Images and web fonts may still be reflowing; one
                    // deferred pass corrects what the first could not see.
                    self.schedule_reflow_pass();
                }
            }
            LayoutMode::Inline => {
                synthesis::teardown(&root, &self.config);
                self.apply_inline_classes(&root);
            }
        }
        self.mode = Some(target);
    }

    /// Force the inline presentation regardless of viewport width.
    pub fn force_inline(&mut self) {
        let Ok((_, document)) = window_document() else {
            return;
        };
        let Some(root) = query_root(&document, &self.config.content_root_selector()) else {
            return;
        };
        synthesis::teardown(&root, &self.config);
        self.apply_inline_classes(&root);
        self.mode = Some(LayoutMode::Inline);
    }

    fn apply_margin_classes(&self, root: &Element) {
        let classes = root.class_list();
        let _ = classes.remove_1(&self.config.hide_sidenotes_class);
        let _ = classes.add_1(&self.config.hide_endnotes_class);
    }

    fn apply_inline_classes(&self, root: &Element) {
        let classes = root.class_list();
        let _ = classes.add_1(&self.config.hide_sidenotes_class);
        let _ = classes.remove_1(&self.config.hide_endnotes_class);
    }

    /// Fire-and-forget correction pass. It only repositions existing
    /// elements, so racing a later teardown leaves it a harmless no-op.
    fn schedule_reflow_pass(&self) {
        let config = self.config.clone();
        let closure = Closure::once_into_js(move || {
            if let Ok((_, document)) = window_document() {
                if let Some(root) = query_root(&document, &config.content_root_selector()) {
                    position_notes(&document, &root, &config);
                }
            }
        });

        if let Ok(window) = crate::utils::dom::window() {
            if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.unchecked_ref(),
                self.config.reflow_delay_ms,
            ) {
                log::warn!("failed to schedule reflow pass: {:?}", err);
            }
        }
    }
}
