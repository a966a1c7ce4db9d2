//! Saved request collections

mod tree;

pub use tree::{Collection, Folder};
