//! Startup orchestration.
//!
//! # Responsibilities
//! - Drive the one-directional startup state machine
//! - Run each bootstrap step in dependency order
//! - Hand control to the supervisor for the terminal blocking phase
//!
//! # Design Decisions
//! - Fail fast: any step error is fatal and is propagated untranslated
//! - Steps run in order, never concurrently
//! - The server starts last (traffic only when everything is prepared)

use std::fmt;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::config::LauncherConfig;
use crate::environment::{ensure_runtime, sync_dependencies, RuntimeError, SyncError};
use crate::supervisor::{AppDefinition, LoadError, ServerError, Supervisor};

/// Startup state machine phases, in order. Transitions are one-directional
/// and unrecoverable on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    NotStarted,
    RuntimeReady,
    EnvironmentReady,
    ApplicationLoaded,
    ServerRunning,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::NotStarted => "not_started",
            Phase::RuntimeReady => "runtime_ready",
            Phase::EnvironmentReady => "environment_ready",
            Phase::ApplicationLoaded => "application_loaded",
            Phase::ServerRunning => "server_running",
        };
        f.write_str(name)
    }
}

/// Error type covering every fatal startup step.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("runtime setup failed: {0}")]
    Setup(#[from] RuntimeError),

    #[error("dependency resolution failed: {0}")]
    Sync(#[from] SyncError),

    #[error("application load failed: {0}")]
    Load(#[from] LoadError),

    #[error("dashboard server failed: {0}")]
    Server(#[from] ServerError),
}

/// Drives the bootstrap sequence:
/// probe runtime → sync environment → load application → serve.
pub struct Orchestrator {
    config: LauncherConfig,
    phase: Phase,
}

impl Orchestrator {
    pub fn new(config: LauncherConfig) -> Self {
        Self {
            config,
            phase: Phase::NotStarted,
        }
    }

    /// Current startup phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn advance(&mut self, to: Phase) {
        tracing::info!(from = %self.phase, to = %to, "Startup phase transition");
        self.phase = to;
    }

    /// Full environment preparation: runtime probe plus dependency sync.
    ///
    /// This is the `setup` command, and the `serve --sync` path.
    pub async fn prepare(&mut self) -> Result<(), StartupError> {
        self.ensure_ready(true).await
    }

    /// Bring the orchestrator to `EnvironmentReady`.
    ///
    /// The fast serve path probes the runtime but trusts that dependencies
    /// were already synced by an earlier `setup` run; `sync` restores the
    /// prepare-on-every-start behavior.
    pub async fn ensure_ready(&mut self, sync: bool) -> Result<(), StartupError> {
        ensure_runtime(&self.config.environment).await?;
        self.advance(Phase::RuntimeReady);

        if sync {
            sync_dependencies(
                &self.config.environment,
                self.config.app.working_dir.as_deref(),
            )
            .await?;
        } else {
            tracing::debug!("Skipping dependency sync (assumed satisfied)");
        }
        self.advance(Phase::EnvironmentReady);

        Ok(())
    }

    /// Load the application definition and block serving it on `port`.
    ///
    /// Terminal: on success this only returns once the dashboard server
    /// process has exited. The returned code is what the launcher exits with.
    pub async fn serve(
        mut self,
        port: u16,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<i32, StartupError> {
        debug_assert!(self.phase >= Phase::EnvironmentReady);

        let app = AppDefinition::load(&self.config.app)?;
        self.advance(Phase::ApplicationLoaded);

        let supervisor = Supervisor::new(
            self.config.server.clone(),
            self.config.readiness.clone(),
            self.config.shutdown.clone(),
            app,
        );

        self.advance(Phase::ServerRunning);
        let code = supervisor.serve(port, shutdown).await?;
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;
    use std::fs;
    use std::path::Path;

    fn test_config(dir: &Path) -> LauncherConfig {
        let mut config = LauncherConfig::default();
        config.app.working_dir = Some(dir.to_path_buf());
        config.environment.runtime_binary = "true".to_string();
        config.environment.probe_args = Vec::new();
        config.environment.sync_command = "true".to_string();
        config.environment.sync_args = Vec::new();
        config
    }

    fn write_manifests(dir: &Path) {
        fs::write(dir.join("Project.toml"), "name = \"demo\"\n").unwrap();
        fs::write(dir.join("Manifest.toml"), "# pinned\n").unwrap();
    }

    #[test]
    fn phases_are_ordered() {
        assert!(Phase::NotStarted < Phase::RuntimeReady);
        assert!(Phase::RuntimeReady < Phase::EnvironmentReady);
        assert!(Phase::EnvironmentReady < Phase::ApplicationLoaded);
        assert!(Phase::ApplicationLoaded < Phase::ServerRunning);
    }

    #[tokio::test]
    async fn prepare_reaches_environment_ready() {
        let dir = tempfile::tempdir().unwrap();
        write_manifests(dir.path());

        let mut orchestrator = Orchestrator::new(test_config(dir.path()));
        orchestrator.prepare().await.unwrap();
        assert_eq!(orchestrator.phase(), Phase::EnvironmentReady);
    }

    #[tokio::test]
    async fn missing_runtime_fails_before_anything_else() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.environment.runtime_binary = "no-such-runtime-binary".to_string();

        let mut orchestrator = Orchestrator::new(config);
        let err = orchestrator.prepare().await.unwrap_err();
        assert!(matches!(err, StartupError::Setup(_)));
        assert_eq!(orchestrator.phase(), Phase::NotStarted);
    }

    #[tokio::test]
    async fn failed_sync_stops_before_application_load() {
        let dir = tempfile::tempdir().unwrap();
        write_manifests(dir.path());
        // The application source unit is ALSO missing; a sync error must win
        // because the source unit is never touched when sync fails.
        let mut config = test_config(dir.path());
        config.environment.sync_command = "false".to_string();

        let mut orchestrator = Orchestrator::new(config);
        let err = orchestrator.prepare().await.unwrap_err();
        assert!(matches!(err, StartupError::Sync(_)));
        assert_eq!(orchestrator.phase(), Phase::RuntimeReady);
    }

    #[tokio::test]
    async fn missing_source_unit_fails_at_load_with_no_spawn() {
        let dir = tempfile::tempdir().unwrap();
        write_manifests(dir.path());

        let mut orchestrator = Orchestrator::new(test_config(dir.path()));
        orchestrator.ensure_ready(false).await.unwrap();

        let shutdown = crate::lifecycle::Shutdown::new();
        let err = orchestrator
            .serve(28099, shutdown.subscribe())
            .await
            .unwrap_err();
        assert!(matches!(err, StartupError::Load(LoadError::Missing(_))));
    }
}
