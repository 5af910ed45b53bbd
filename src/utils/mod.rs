//! Utility modules for the sidenote engine

pub mod debounce;
pub mod dom;

pub use debounce::Debouncer;
