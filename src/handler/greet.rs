//! Greeting handler
//!
//! Builds a personalized greeting with the current server time.
//! Purely computed per request; nothing is persisted.

use chrono::{DateTime, Local};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::collections::HashMap;

use crate::handler::pages;
use crate::http::response::build_html_response;

/// Greeting template; `%name` is replaced with the visitor's name.
const GREETING_TEMPLATE: &str = "Hello %name, What a beautiful day!";

/// Handle `/greet?name=...`
///
/// Responds 400 when `name` is absent or empty, 200 otherwise.
pub fn handle_greet(params: &HashMap<String, String>, is_head: bool) -> Response<Full<Bytes>> {
    match params.get("name").filter(|name| !name.is_empty()) {
        Some(name) => {
            let body = pages::with_back(&render_greeting(name, Local::now()));
            build_html_response(200, body, is_head)
        }
        None => {
            let body = pages::error_fragment("Error: Name is required");
            build_html_response(400, body, is_head)
        }
    }
}

/// Substitute the name into the template and append the timestamp.
fn render_greeting(name: &str, now: DateTime<Local>) -> String {
    let message = GREETING_TEMPLATE.replace("%name", name);
    let timestamp = now.format("%a %b %d %Y %H:%M:%S");
    format!("<p style=\"color:blue;\">{message} {timestamp}</p>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_greeting_contains_name_and_timestamp() {
        let now = Local.with_ymd_and_hms(2026, 8, 30, 14, 3, 59).unwrap();
        let html = render_greeting("Ada", now);
        assert!(html.contains("Hello Ada, What a beautiful day!"));
        assert!(html.contains("2026 14:03:59"));
    }

    #[test]
    fn test_greet_ok_for_any_name() {
        let resp = handle_greet(&params(&[("name", "Grace Hopper")]), false);
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn test_greet_missing_name_is_400() {
        let resp = handle_greet(&params(&[]), false);
        assert_eq!(resp.status(), 400);
    }

    #[test]
    fn test_greet_empty_name_is_400() {
        let resp = handle_greet(&params(&[("name", "")]), false);
        assert_eq!(resp.status(), 400);
    }
}
