//! Application use cases (business logic orchestration).

mod execute_request;
mod workbench;

pub use execute_request::ExecuteRequest;
pub use workbench::Workbench;
