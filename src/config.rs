//! Engine configuration
//!
//! Every CSS class the engine recognizes or emits, plus the layout
//! constants, lives in one struct passed in at initialization. There are
//! no ambient selector globals; components receive the configuration
//! explicitly.

use serde::{Deserialize, Serialize};

/// Configuration for the sidenote engine
///
/// The defaults reproduce the reference behavior: Ghost-style footnote
/// markup, a 65rem (1040px) breakpoint, and a 10px collision margin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SidenoteConfig {
    /// Class on the content root element holding the rendered post
    pub content_root_class: String,

    /// Class on in-text footnote reference markers
    pub reference_class: String,

    /// Class for synthesized sidenote containers
    pub container_class: String,

    /// Class for synthesized sidenote elements
    pub note_class: String,

    /// Class for the injected ordinal label inside each sidenote
    pub label_class: String,

    /// Class marking the currently highlighted sidenote
    pub active_class: String,

    /// Root-level class that hides synthesized sidenotes (narrow layout)
    pub hide_sidenotes_class: String,

    /// Root-level class that hides default inline endnotes (wide layout)
    pub hide_endnotes_class: String,

    /// Class on "return to reference" anchors inside note content
    pub backref_class: String,

    /// Back-arrow glyph used by markup variants that carry no backref class
    pub backref_glyph: char,

    /// Viewport width (px) at or above which margin mode is active
    pub breakpoint_width: f64,

    /// Minimum vertical gap between adjacent sidenotes (px)
    pub collision_margin: f64,

    /// Quiet period for the debounced resize handler (ms)
    pub resize_debounce_ms: i32,

    /// Delay before the deferred correction pass after entering margin mode (ms)
    pub reflow_delay_ms: i32,
}

impl Default for SidenoteConfig {
    fn default() -> Self {
        Self {
            content_root_class: "gh-content".to_string(),
            reference_class: "footnote-ref".to_string(),
            container_class: "notes-wrapper".to_string(),
            note_class: "note".to_string(),
            label_class: "note-identifier".to_string(),
            active_class: "active-sidenote".to_string(),
            hide_sidenotes_class: "hide-sidenotes".to_string(),
            hide_endnotes_class: "hide-endnotes".to_string(),
            backref_class: "footnote-backref".to_string(),
            backref_glyph: '\u{21a9}',
            breakpoint_width: 1040.0,
            collision_margin: 10.0,
            resize_debounce_ms: 100,
            reflow_delay_ms: 200,
        }
    }
}

impl SidenoteConfig {
    /// Selector for the content root element
    pub fn content_root_selector(&self) -> String {
        format!(".{}", self.content_root_class)
    }

    /// Selector for reference markers
    pub fn reference_selector(&self) -> String {
        format!(".{}", self.reference_class)
    }

    /// Selector for the actionable anchor inside a reference marker
    pub fn reference_anchor_selector(&self) -> String {
        format!(".{} a", self.reference_class)
    }

    /// Selector for synthesized containers
    pub fn container_selector(&self) -> String {
        format!(".{}", self.container_class)
    }

    /// Selector for synthesized sidenote elements
    pub fn note_selector(&self) -> String {
        format!("aside.{}", self.note_class)
    }

    /// Selector for currently highlighted sidenotes
    pub fn active_selector(&self) -> String {
        format!(".{}", self.active_class)
    }

    /// Element id used for the sidenote derived from `content_id`
    pub fn sidenote_id(&self, content_id: &str) -> String {
        format!("sidenote-{}", content_id)
    }
}
