//! Acceptor: binds the control port and spawns one [`control_loop::run`] per
//! accepted connection.

use crate::config::Config;
use crate::server::control_loop;
use crate::storage::FileManager;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Binds `config.pi_port` and serves connections until a non-recoverable
/// accept error occurs. Transient errors (resource exhaustion) are logged
/// and the loop continues, matching the accept-loop convention used
/// throughout the reference corpus this crate follows.
pub async fn run(config: Config, file_manager: Arc<dyn FileManager>) -> io::Result<()> {
    let config = Arc::new(config);
    let listener = TcpListener::bind(("0.0.0.0", config.pi_port)).await?;
    tracing::info!(port = config.pi_port, "listening for control connections");

    loop {
        match listener.accept().await {
            Ok((stream, _remote_addr)) => {
                let local_addr = match stream.local_addr() {
                    Ok(addr) => addr,
                    Err(e) => {
                        tracing::warn!(error = %e, "could not read local address of accepted socket, dropping connection");
                        continue;
                    }
                };
                let config = Arc::clone(&config);
                let file_manager = Arc::clone(&file_manager);
                tokio::spawn(async move {
                    control_loop::run(stream, local_addr, config, file_manager).await;
                });
            }
            Err(e) if is_temporary(&e) => {
                tracing::warn!(error = %e, "temporary accept error, continuing");
                continue;
            }
            Err(e) => {
                tracing::error!(error = %e, "fatal accept error, shutting down");
                return Err(e);
            }
        }
    }
}

fn is_temporary(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted | io::ErrorKind::ConnectionAborted)
}
