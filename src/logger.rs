// Logger module
// Lifecycle logging only; per-request access logging is suppressed

pub fn log_server_start(port: u16) {
    println!("Port-first demo running on http://localhost:{port}");
}

pub fn log_shutdown() {
    println!("Shutting down");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}
