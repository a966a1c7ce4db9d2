//! HTTP Response domain types

mod spec;
mod view;

pub use spec::{NO_RESPONSE_STATUS, ResponseSpec, StatusCategory, approximate_size};
pub use view::{BodyView, render_body};
