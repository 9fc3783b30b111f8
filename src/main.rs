use std::sync::Arc;
use tokio::sync::Notify;

mod config;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr();

    // Binding failure is fatal: the error propagates out of main
    let listener = server::create_listener(addr)?;

    let routes = Arc::new(routing::RouteTable::new());
    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown));

    logger::log_server_start(cfg.port);

    server::run_accept_loop(listener, routes, shutdown).await;

    logger::log_shutdown();
    Ok(())
}
