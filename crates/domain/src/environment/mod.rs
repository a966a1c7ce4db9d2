//! Environment and variable domain types

mod variable;

pub use variable::{Environment, EnvironmentVariable};
