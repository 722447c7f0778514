//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGTERM/SIGINT (Ctrl+C on all platforms)
//! - Translate the first signal into a graceful child shutdown
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The supervisor owns the grace period; a child that ignores SIGTERM
//!   is killed after the deadline, so a second signal is not required

/// Wait until the process receives a termination signal.
///
/// Resolves on SIGINT everywhere, and additionally on SIGTERM on Unix.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("SIGINT received");
            }
            _ = sigterm.recv() => {
                tracing::info!("SIGTERM received");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Shutdown signal received");
    }
}
