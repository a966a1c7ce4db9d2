//! Pure request building and response normalization.

mod request_builder;
mod response_normalizer;

pub use request_builder::{
    apply_auth_headers, auth_query_param, build_body, build_headers, build_request, build_url,
};
pub use response_normalizer::normalize;
