//! File endpoint handlers
//!
//! Append-to-log and read-back handlers over the storage module, with
//! I/O failures mapped onto HTTP statuses: missing input is 400, a
//! missing file is 404, anything else from the filesystem is 500.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::collections::HashMap;
use std::io::ErrorKind;

use crate::config::AppState;
use crate::handler::pages;
use crate::http::response::build_html_response;
use crate::logger;
use crate::storage::APPEND_LOG_NAME;

/// Handle `/writeFile?text=...`
///
/// Appends one line to the append log, creating the file on first write.
pub async fn handle_write(
    params: &HashMap<String, String>,
    state: &AppState,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let Some(text) = params.get("text").filter(|text| !text.is_empty()) else {
        let body = pages::error_fragment("Error: Text is required");
        return build_html_response(400, body, is_head);
    };

    match state.storage.append_line(text).await {
        Ok(()) => {
            logger::log_append(text.len() + 1);
            let body =
                pages::info_fragment(&format!("Appended \"{text}\" to {APPEND_LOG_NAME}"));
            build_html_response(200, body, is_head)
        }
        Err(e) => {
            logger::log_error(&format!("Append failed: {e}"));
            let body = pages::error_fragment(&format!("Error writing file: {e}"));
            build_html_response(500, body, is_head)
        }
    }
}

/// Handle `/readFile/<name>`
///
/// The name is the final path segment; the storage layer confines it to
/// the data directory, so traversal attempts surface as not-found here.
pub async fn handle_read(name: &str, state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    match state.storage.read_file(name).await {
        Ok(content) => build_html_response(200, pages::pre_fragment(&content), is_head),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let body = pages::error_fragment(&format!("Error: File \"{name}\" not found"));
            build_html_response(404, body, is_head)
        }
        Err(e) => {
            logger::log_error(&format!("Read failed for '{name}': {e}"));
            let body = pages::error_fragment(&format!("Error: {e}"));
            build_html_response(500, body, is_head)
        }
    }
}
