//! Dashboard server supervision subsystem.
//!
//! # Data Flow
//! ```text
//! Application load (app.rs):
//!     Resolve source unit → verify it exists → AppDefinition
//!
//! Serve (mod.rs):
//!     Spawn child (own process group, piped output)
//!     → readiness probe vs. early exit
//!     → block on child, forwarding SIGTERM/SIGINT
//!     → mirror the child's exit code
//!
//! Child plumbing (child.rs):
//!     Process-group isolation, kill-on-drop guard, log streaming
//! ```
//!
//! # Design Decisions
//! - The launcher never restarts the server; supervision means handoff
//!   and signal forwarding, not a restart loop
//! - A child that exits before becoming reachable is the bind-failure
//!   path: its status is surfaced as the startup error
//! - On graceful shutdown the launcher exits 0 regardless of how the
//!   signalled child reports its own termination

mod child;

pub mod app;

pub use app::{AppDefinition, LoadError};

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::{ReadinessConfig, ServerConfig, ShutdownConfig};
use crate::health::ReadinessProbe;
use crate::supervisor::child::ChildGuard;

/// Error type for spawning and supervising the dashboard server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("could not spawn dashboard server '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dashboard server exited during startup with {status}")]
    ExitedEarly { status: std::process::ExitStatus },

    #[error("dashboard server not reachable on port {port} after {waited_secs}s")]
    NeverReady { port: u16, waited_secs: u64 },

    #[error("I/O error while supervising dashboard server: {0}")]
    Io(#[from] std::io::Error),
}

/// Spawns the dashboard server and blocks for its lifetime.
pub struct Supervisor {
    server: ServerConfig,
    readiness: ReadinessConfig,
    shutdown: ShutdownConfig,
    app: AppDefinition,
}

impl Supervisor {
    pub fn new(
        server: ServerConfig,
        readiness: ReadinessConfig,
        shutdown: ShutdownConfig,
        app: AppDefinition,
    ) -> Self {
        Self {
            server,
            readiness,
            shutdown,
            app,
        }
    }

    /// Spawn the server bound to the resolved port and block until it exits
    /// or the shutdown channel fires.
    ///
    /// Returns the process exit code the launcher should report: the child's
    /// own code when it exits on its own, 0 after a signal-initiated
    /// graceful shutdown.
    pub async fn serve(
        self,
        port: u16,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<i32, ServerError> {
        let mut command = Command::new(&self.app.command);
        command
            .arg(&self.app.source_unit)
            .args(&self.app.args)
            .arg("--host")
            .arg(&self.server.host)
            .arg("--port")
            .arg(port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if self.server.debug {
            command.arg("--debug");
        }
        if let Some(dir) = self.app.working_dir() {
            command.current_dir(dir);
        }
        child::isolate_process_group(&mut command);

        let spawned = command.spawn().map_err(|source| ServerError::Spawn {
            command: self.app.command.clone(),
            source,
        })?;
        let mut guard = ChildGuard::new(spawned);
        child::stream_output(guard.child_mut());

        tracing::info!(
            command = %self.app.command,
            source_unit = %self.app.source_unit.display(),
            host = %self.server.host,
            port,
            "Dashboard server spawned"
        );

        // A child that dies before the probe succeeds is the bind-failure
        // path; its exit status is the only diagnostic available.
        let probe = ReadinessProbe::new(&self.readiness, port);
        tokio::select! {
            ready = probe.wait_until_ready() => {
                let Some(elapsed) = ready else {
                    return Err(ServerError::NeverReady {
                        port,
                        waited_secs: self.readiness.max_wait_secs,
                    });
                };
                tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    url = %format!("http://{}:{}", self.server.host, port),
                    "Dashboard server ready"
                );
            }
            status = guard.child_mut().wait() => {
                let status = status?;
                guard.disarm();
                return Err(ServerError::ExitedEarly { status });
            }
        }

        tokio::select! {
            status = guard.child_mut().wait() => {
                let status = status?;
                guard.disarm();
                tracing::warn!(%status, "Dashboard server exited");
                Ok(status.code().unwrap_or(1))
            }
            _ = shutdown.recv() => {
                self.stop(&mut guard).await
            }
        }
    }

    /// Graceful shutdown: SIGTERM the group, wait out the grace period,
    /// then let the guard SIGKILL whatever is left.
    async fn stop(&self, guard: &mut ChildGuard) -> Result<i32, ServerError> {
        if let Some(pid) = guard.id() {
            tracing::info!(pid, "Stopping dashboard server");
            child::terminate_group(pid);
        }

        let grace = Duration::from_secs(self.shutdown.grace_period_secs);
        match time::timeout(grace, guard.child_mut().wait()).await {
            Ok(status) => {
                let status = status?;
                guard.disarm();
                tracing::info!(%status, "Dashboard server stopped");
            }
            Err(_) => {
                tracing::warn!(
                    grace_secs = self.shutdown.grace_period_secs,
                    "Grace period expired, killing dashboard process group"
                );
                // Guard drop delivers SIGKILL to the group.
            }
        }
        Ok(0)
    }
}
