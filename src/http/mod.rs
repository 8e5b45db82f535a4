//! HTTP protocol layer module
//!
//! Query-string parsing and response builders, decoupled from business logic.

pub mod query;
pub mod response;

// Re-export commonly used functions
pub use query::parse_query;
pub use response::{build_405_response, build_html_response, build_options_response};
