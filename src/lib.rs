//! greetfile - a small greeting & file HTTP server
//!
//! Serves three query-string driven endpoints over HTTP/1.1:
//! a greeting generator, an append-to-file endpoint, and a file-read endpoint.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod storage;
