//! Sidenote Layout Engine WASM Module
//!
//! Places footnote content ("sidenotes") beside the text column on wide
//! viewports and leaves the default inline endnote rendering in place on
//! narrow ones. The module discovers footnote reference markers in the
//! rendered post content, synthesizes sidenote containers next to the
//! blocks that hold them, computes collision-free vertical offsets, and
//! keeps everything synchronized across resizes, deferred reflow, and
//! click-to-highlight interaction.

pub mod api;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod highlight;
pub mod mode;
pub mod orchestrator;
pub mod position;
pub mod synthesis;
pub mod utils;

// Re-export commonly used types
pub use config::SidenoteConfig;
pub use errors::SidenoteError;
pub use geometry::{compute_offset, place_sequence, NoteExtent};
pub use mode::{LayoutMode, ModeController};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // The logger may already be set when the module is re-instantiated
    // under the test harness; that is not an error.
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Sidenote layout engine WASM module initialized");
}
