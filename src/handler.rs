//! Request handler module
//!
//! Entry point for HTTP request processing: method validation, route lookup,
//! and dispatch to the fixed response generators.

use crate::http;
use crate::routing::{RouteAction, RouteTable};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    routes: Arc<RouteTable>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(respond(req.method(), req.uri().path(), &routes))
}

/// Produce the response for a request method and path.
///
/// Only GET is routed; anything else falls through to the 404 generator.
fn respond(method: &Method, path: &str, routes: &RouteTable) -> Response<Full<Bytes>> {
    if *method != Method::GET {
        return http::build_not_found_response();
    }

    match routes.lookup(path) {
        Some(route) => match &route.action {
            RouteAction::Html(body) => http::build_html_response(*body),
            RouteAction::Json(payload) => http::build_json_response(StatusCode::OK, payload),
        },
        None => http::build_not_found_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::{CONTENT_TYPE_HTML, CONTENT_TYPE_JSON};
    use http_body_util::BodyExt;

    fn get(path: &str) -> Response<Full<Bytes>> {
        respond(&Method::GET, path, &RouteTable::new())
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes()
    }

    fn content_length(resp: &Response<Full<Bytes>>) -> usize {
        resp.headers()["Content-Length"]
            .to_str()
            .expect("ascii header")
            .parse()
            .expect("numeric Content-Length")
    }

    #[tokio::test]
    async fn landing_page_route() {
        let resp = get("/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], CONTENT_TYPE_HTML);

        let declared = content_length(&resp);
        let body = body_bytes(resp).await;
        assert_eq!(declared, body.len());
        assert!(std::str::from_utf8(&body)
            .expect("utf-8 body")
            .contains("<h1>FounderBooster Port-First Demo</h1>"));
    }

    #[tokio::test]
    async fn health_route() {
        let resp = get("/health");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], CONTENT_TYPE_JSON);

        let declared = content_length(&resp);
        let body = body_bytes(resp).await;
        assert_eq!(declared, body.len());
        assert_eq!(&body[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn hello_route() {
        let resp = get("/api/hello");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], CONTENT_TYPE_JSON);

        let body = body_bytes(resp).await;
        assert_eq!(
            &body[..],
            br#"{"message":"hello from FounderBooster port-first demo"}"#
        );
    }

    #[tokio::test]
    async fn unknown_paths_get_json_404() {
        for path in ["/missing", "/health/live", "/api", "/api/hello/", "/API/HELLO"] {
            let resp = get(path);
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path: {path}");
            assert_eq!(resp.headers()["Content-Type"], CONTENT_TYPE_JSON);

            let declared = content_length(&resp);
            let body = body_bytes(resp).await;
            assert_eq!(declared, body.len());
            assert_eq!(&body[..], br#"{"error":"not_found"}"#);
        }
    }

    #[tokio::test]
    async fn non_get_methods_fall_through_to_404() {
        let table = RouteTable::new();
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD] {
            let resp = respond(&method, "/health", &table);
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "method: {method}");

            let body = body_bytes(resp).await;
            assert_eq!(&body[..], br#"{"error":"not_found"}"#);
        }
    }
}
