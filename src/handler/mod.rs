//! Request handler module
//!
//! Responsible for request routing dispatch and the endpoint handlers:
//! home page, greeting, file append, and file read.

pub mod files;
pub mod greet;
pub mod pages;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
