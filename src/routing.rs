//! Route table module
//!
//! The routing surface is an ordered set of (exact path, response action)
//! pairs; the first matching entry wins.

use serde_json::json;

/// Fixed HTML landing page served at the root path
const LANDING_PAGE: &str = "<!doctype html><html><head><meta charset=\"utf-8\">\
<title>FounderBooster Port-First Demo</title></head>\
<body><h1>FounderBooster Port-First Demo</h1></body></html>";

/// Fixed response served when a route matches
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAction {
    /// Static HTML document
    Html(&'static str),
    /// JSON payload, serialized compactly per response
    Json(serde_json::Value),
}

/// An exact-match association between a request path and a fixed response
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: &'static str,
    pub action: RouteAction,
}

/// Ordered route table, evaluated first match wins
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: vec![
                Route {
                    path: "/",
                    action: RouteAction::Html(LANDING_PAGE),
                },
                Route {
                    path: "/health",
                    action: RouteAction::Json(json!({"status": "ok"})),
                },
                Route {
                    path: "/api/hello",
                    action: RouteAction::Json(
                        json!({"message": "hello from FounderBooster port-first demo"}),
                    ),
                },
            ],
        }
    }

    /// Find the first route whose path exactly matches the request path
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
