//! JSON serialization for files written under the data directory.
//!
//! Files are pretty-printed with 2-space indentation and end with a newline,
//! so they diff cleanly when users keep them under version control.

mod json;

pub use json::*;
