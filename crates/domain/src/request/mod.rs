//! HTTP Request domain types

mod body;
mod key_value;
mod method;
mod spec;

pub use body::{FormField, RawKind, RequestBody};
pub use key_value::{KeyValue, KeyValueList};
pub use method::HttpMethod;
pub use spec::RequestSpec;
