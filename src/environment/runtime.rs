//! Runtime toolchain probing.
//!
//! # Responsibilities
//! - Confirm the configured runtime binary exists and executes
//! - Surface a clear error when the toolchain is absent

use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;

use crate::config::EnvironmentConfig;

/// Error type for the runtime probe.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime binary '{binary}' could not be executed: {source}")]
    NotFound {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("runtime probe '{binary}' exited with {status}")]
    ProbeFailed {
        binary: String,
        status: std::process::ExitStatus,
    },
}

/// Idempotently confirm the runtime toolchain is present.
///
/// Runs the configured probe (typically `<runtime> --version`) and logs the
/// reported version. Cheap when the runtime is installed; fatal when it is
/// not, since the launcher performs no installation itself.
pub async fn ensure_runtime(config: &EnvironmentConfig) -> Result<(), RuntimeError> {
    let output = Command::new(&config.runtime_binary)
        .args(&config.probe_args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .await
        .map_err(|source| RuntimeError::NotFound {
            binary: config.runtime_binary.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(RuntimeError::ProbeFailed {
            binary: config.runtime_binary.clone(),
            status: output.status,
        });
    }

    let version = String::from_utf8_lossy(&output.stdout);
    tracing::info!(
        binary = %config.runtime_binary,
        version = %version.lines().next().unwrap_or("").trim(),
        "Runtime toolchain present"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvironmentConfig;

    fn probe_config(binary: &str, args: &[&str]) -> EnvironmentConfig {
        EnvironmentConfig {
            runtime_binary: binary.to_string(),
            probe_args: args.iter().map(|s| s.to_string()).collect(),
            ..EnvironmentConfig::default()
        }
    }

    #[tokio::test]
    async fn present_runtime_probes_ok() {
        let config = probe_config("true", &[]);
        assert!(ensure_runtime(&config).await.is_ok());
    }

    #[tokio::test]
    async fn missing_runtime_is_not_found() {
        let config = probe_config("definitely-not-a-real-runtime-binary", &[]);
        let err = ensure_runtime(&config).await.unwrap_err();
        assert!(matches!(err, RuntimeError::NotFound { .. }));
    }

    #[tokio::test]
    async fn failing_probe_is_reported() {
        let config = probe_config("false", &[]);
        let err = ensure_runtime(&config).await.unwrap_err();
        assert!(matches!(err, RuntimeError::ProbeFailed { .. }));
    }
}
