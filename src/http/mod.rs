//! HTTP protocol layer module
//!
//! Response construction, decoupled from routing and transport concerns.

pub mod response;

// Re-export commonly used builders
pub use response::{build_html_response, build_json_response, build_not_found_response};
