// Logger module
// Console logging for server lifecycle, access log, and errors

use crate::config::Config;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, config: &Config, data_dir: &Path) {
    println!("======================================");
    println!("{} started", config.http.server_name);
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("Data directory: {}", data_dir.display());
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] Sent {status} ({size} bytes)\n");
}

pub fn log_append(bytes: usize) {
    println!("[Storage] Appended {bytes} bytes to the log");
}

pub fn log_warning(message: &str) {
    eprintln!("[Warning] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[Error] {message}");
}
