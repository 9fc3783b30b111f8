// Server module entry point
// Listener construction, accept loop, connection serving, signal handling

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword and cannot name a module, so map the file to server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used entry points
pub use listener::create_listener;
pub use server_loop::run_accept_loop;
pub use signal::start_signal_handler;
