//! HTTP response building module
//!
//! Builders for the fixed responses served by the router. Every builder sets
//! `Content-Type` and an explicit `Content-Length` equal to the body's byte
//! length.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Body of the 404 fallback response
const NOT_FOUND_BODY: &str = r#"{"error":"not_found"}"#;

/// Build 200 OK HTML response
pub fn build_html_response(content: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", CONTENT_TYPE_HTML)
        .header("Content-Length", content.len())
        .body(Full::new(Bytes::from_static(content.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a JSON response with the payload serialized compactly
pub fn build_json_response(
    status: StatusCode,
    payload: &serde_json::Value,
) -> Response<Full<Bytes>> {
    let json = payload.to_string();

    Response::builder()
        .status(status)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .header("Content-Length", json.len())
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the 404 Not Found fallback response
pub fn build_not_found_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .header("Content-Length", NOT_FOUND_BODY.len())
        .body(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {kind} response: {error}"));
}
