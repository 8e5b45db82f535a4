//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, path normalization, and dispatching to exactly one handler.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::{files, greet, pages};
use crate::http;
use crate::http::response::build_html_response;
use crate::logger;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let is_head = *method == Method::HEAD;

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Normalize path and dispatch
    let ctx = RequestContext {
        path: normalize_path(uri.path()),
        query: uri.query(),
        is_head,
        access_log,
    };

    let response = route_request(&ctx, &state).await;

    if access_log {
        let size = response
            .headers()
            .get("Content-Length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        logger::log_response(response.status().as_u16(), size);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Strip at most one trailing slash, so `/greet/` matches `/greet`.
fn normalize_path(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Route the request to exactly one handler (first match wins).
pub async fn route_request(
    ctx: &RequestContext<'_>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    // 1. Home page
    if ctx.path.is_empty() || ctx.path == "/" {
        return build_html_response(200, pages::home_page(), ctx.is_head);
    }

    // 2. Greeting (exact match)
    if ctx.path == "/greet" {
        let params = http::parse_query(ctx.query);
        return greet::handle_greet(&params, ctx.is_head);
    }

    // 3. Append to file (exact match)
    if ctx.path == "/writeFile" {
        let params = http::parse_query(ctx.query);
        return files::handle_write(&params, state, ctx.is_head).await;
    }

    // 4. Read file (prefix match); the name is the final path segment
    if ctx.path.starts_with("/readFile") {
        let name = ctx.path.rsplit('/').next().unwrap_or("");
        return files::handle_read(name, state, ctx.is_head).await;
    }

    // 5. Everything else
    build_html_response(404, pages::not_found_page(), ctx.is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, StorageConfig,
    };
    use http_body_util::BodyExt;

    fn test_state() -> Arc<AppState> {
        static NEXT_ID: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);
        let id = NEXT_ID.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let data_dir = std::env::temp_dir().join(format!(
            "greetfile-router-test-{}-{id}",
            std::process::id()
        ));

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            storage: StorageConfig {
                data_dir: data_dir.to_str().unwrap().to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            http: HttpConfig {
                server_name: "Greetfile/0.1".to_string(),
                enable_cors: false,
            },
        };

        Arc::new(AppState::new(config).unwrap())
    }

    async fn dispatch(state: &Arc<AppState>, path: &str, query: Option<&str>) -> (u16, String) {
        let ctx = RequestContext {
            path: normalize_path(path),
            query,
            is_head: false,
            access_log: false,
        };
        let resp = route_request(&ctx, state).await;
        let status = resp.status().as_u16();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[test]
    fn test_normalize_path_strips_one_trailing_slash() {
        assert_eq!(normalize_path("/greet/"), "/greet");
        assert_eq!(normalize_path("/greet"), "/greet");
        assert_eq!(normalize_path("/"), "");
    }

    #[tokio::test]
    async fn test_home_route() {
        let state = test_state();
        let (status, body) = dispatch(&state, "/", None).await;
        assert_eq!(status, 200);
        assert_eq!(body.matches("<form").count(), 3);
    }

    #[tokio::test]
    async fn test_greet_route() {
        let state = test_state();
        let (status, body) = dispatch(&state, "/greet", Some("name=Ada")).await;
        assert_eq!(status, 200);
        assert!(body.contains("Ada"));

        let (status, _) = dispatch(&state, "/greet", None).await;
        assert_eq!(status, 400);
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrip() {
        let state = test_state();
        let (status, _) = dispatch(&state, "/writeFile", Some("text=first+entry")).await;
        assert_eq!(status, 200);

        let (status, body) = dispatch(&state, "/readFile/file.txt", None).await;
        assert_eq!(status, 200);
        assert!(body.contains("first entry\n"));
    }

    #[tokio::test]
    async fn test_write_without_text_is_400() {
        let state = test_state();
        let (status, _) = dispatch(&state, "/writeFile", None).await;
        assert_eq!(status, 400);

        let (status, _) = dispatch(&state, "/writeFile", Some("text=")).await;
        assert_eq!(status, 400);
    }

    #[tokio::test]
    async fn test_read_missing_file_is_404() {
        let state = test_state();
        let (status, body) = dispatch(&state, "/readFile/nope.txt", None).await;
        assert_eq!(status, 404);
        assert!(body.contains("nope.txt"));
    }

    #[tokio::test]
    async fn test_read_traversal_is_404() {
        let state = test_state();
        // The final segment is all that is ever used as a name
        let (status, _) = dispatch(&state, "/readFile/..", None).await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn test_bare_read_file_asks_for_literal_name() {
        let state = test_state();
        let (status, body) = dispatch(&state, "/readFile", None).await;
        assert_eq!(status, 404);
        assert!(body.contains("readFile"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let state = test_state();
        let (status, body) = dispatch(&state, "/nope", None).await;
        assert_eq!(status, 404);
        assert!(body.contains("404 Not Found"));
    }
}
