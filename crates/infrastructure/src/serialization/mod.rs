//! Deterministic JSON serialization for run reports.
//!
//! Output is pretty-printed with 2-space indentation and a trailing newline,
//! so consecutive reports diff cleanly.

mod json;

pub use json::*;
