//! Courier Application - Use cases and port definitions
//!
//! This crate turns request descriptions into transport calls and transport
//! results into display responses. It talks to the outside world only
//! through the traits in [`ports`].

pub mod error;
pub mod http;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use http::{build_request, normalize};
pub use use_cases::{ExecuteRequest, Workbench};
