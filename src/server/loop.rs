// Server loop module
// Accepts connections until the shutdown notification arrives

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::handle_connection;
use crate::logger;
use crate::routing::RouteTable;

/// Accept loop: serve inbound connections until shutdown is notified.
///
/// On shutdown the loop stops accepting and drops the listener, releasing
/// the socket; in-flight connections finish on their own tasks.
pub async fn run_accept_loop(
    listener: TcpListener,
    routes: Arc<RouteTable>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(stream, Arc::clone(&routes));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                drop(listener);
                return;
            }
        }
    }
}
