// Server module entry point
// Listener setup, the accept loop, and graceful shutdown

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::create_reusable_listener;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::time::Instant;

use crate::config::AppState;
use crate::logger;
use connection::accept_connection;

/// How often the drain phase rechecks the connection count
const DRAIN_POLL: Duration = Duration::from_millis(50);

/// Accept connections until `shutdown` is notified, then wait up to
/// `performance.write_timeout` seconds for open connections to finish.
///
/// Must run inside a `LocalSet`; connections are served with `spawn_local`.
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notified() => break,
        }
    }

    drop(listener);
    logger::log_shutdown(active_connections.load(Ordering::SeqCst));

    let deadline = Instant::now() + Duration::from_secs(state.config.performance.write_timeout);
    while active_connections.load(Ordering::SeqCst) > 0 && Instant::now() < deadline {
        tokio::time::sleep(DRAIN_POLL).await;
    }
}
