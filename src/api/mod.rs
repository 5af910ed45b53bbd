//! Sidenote engine WASM API
//!
//! JavaScript-facing entry points plus shared helpers for serialization
//! and error conversion at the boundary. All exports use camelCase
//! `js_name`s; internal modules stay plain Rust.

pub mod helpers;
pub mod core;

pub use core::{
    current_layout_mode, init_sidenotes, init_sidenotes_with_config, refresh_sidenotes,
    teardown_sidenotes,
};
