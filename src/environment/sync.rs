//! Lockfile-driven dependency synchronization.
//!
//! # Responsibilities
//! - Verify the package manifest/lockfile pair exists
//! - Run the configured sync command to completion
//!
//! # Design Decisions
//! - Sync output is inherited, not captured: package managers print
//!   progress that is useful verbatim during a long resolve
//! - No timeout; this step is allowed to dominate startup time

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use thiserror::Error;
use tokio::process::Command;

use crate::config::EnvironmentConfig;

/// Error type for dependency synchronization.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("package manifest not found at {0}")]
    ManifestMissing(PathBuf),

    #[error("lockfile not found at {0}")]
    LockfileMissing(PathBuf),

    #[error("could not launch dependency sync '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dependency sync exited with {0}")]
    Failed(std::process::ExitStatus),
}

fn resolve(base: Option<&Path>, path: &Path) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

/// Resolve and install the dashboard's declared dependencies.
///
/// Equivalent to a lockfile-driven sync scoped to the launcher's own
/// directory. Performs network I/O and may take substantially longer than
/// every other startup step; failure is fatal and happens before the
/// application source unit is evaluated.
pub async fn sync_dependencies(
    config: &EnvironmentConfig,
    working_dir: Option<&Path>,
) -> Result<(), SyncError> {
    let manifest = resolve(working_dir, &config.manifest_path);
    if !manifest.is_file() {
        return Err(SyncError::ManifestMissing(manifest));
    }
    let lockfile = resolve(working_dir, &config.lockfile_path);
    if !lockfile.is_file() {
        return Err(SyncError::LockfileMissing(lockfile));
    }

    tracing::info!(
        command = %config.sync_command,
        manifest = %manifest.display(),
        "Dependency sync starting"
    );
    let started = Instant::now();

    let mut command = Command::new(&config.sync_command);
    command
        .args(&config.sync_args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(dir) = working_dir {
        command.current_dir(dir);
    }

    let status = command
        .status()
        .await
        .map_err(|source| SyncError::Spawn {
            command: config.sync_command.clone(),
            source,
        })?;

    if !status.success() {
        return Err(SyncError::Failed(status));
    }

    tracing::info!(
        elapsed_secs = started.elapsed().as_secs(),
        "Dependency sync complete"
    );
    Ok(())
}
