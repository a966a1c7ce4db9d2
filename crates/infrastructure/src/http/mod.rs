//! HTTP infrastructure utilities.

mod body_builder;

pub use body_builder::{BuiltBody, build_body};
