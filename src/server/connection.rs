// Connection module
// Serves a single accepted TCP connection

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::handler;
use crate::logger;
use crate::routing::RouteTable;

/// Serve an accepted connection on its own spawned task.
///
/// The stream is wrapped in `TokioIo` and served as HTTP/1.1 with hyper's
/// default keep-alive behavior. Malformed requests surface as serve errors
/// here and never affect other connections.
pub fn handle_connection(stream: tokio::net::TcpStream, routes: Arc<RouteTable>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let routes = Arc::clone(&routes);
            async move { handler::handle_request(req, routes).await }
        });

        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
            logger::log_connection_error(&err);
        }
    });
}
