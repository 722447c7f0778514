//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the launcher.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a missing `launcher.toml` is equivalent to an
//! empty one.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the dashboard launcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LauncherConfig {
    /// Dashboard server parameters (bind host, default port, debug mode).
    pub server: ServerConfig,

    /// The application to launch (command, source unit, extra args).
    pub app: AppConfig,

    /// Runtime toolchain and dependency-sync settings.
    pub environment: EnvironmentConfig,

    /// Readiness probing of the spawned server.
    pub readiness: ReadinessConfig,

    /// Shutdown handling for the child process.
    pub shutdown: ShutdownConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Dashboard server parameters, passed through to the child process.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host the dashboard binds to (e.g., "0.0.0.0").
    pub host: String,

    /// Port used when none is given on the command line.
    pub default_port: u16,

    /// Run the dashboard in debug mode.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            default_port: 8050,
            debug: false,
        }
    }
}

/// The application the launcher hands control to.
///
/// The child is invoked as:
/// `<command> <source_unit> [args..] --host <host> --port <port> [--debug]`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Command that executes the application source unit.
    pub command: String,

    /// Application-definition source unit, resolved relative to
    /// `working_dir` when not absolute. Its absence is a fatal load error.
    pub source_unit: PathBuf,

    /// Extra arguments inserted before the host/port pair.
    pub args: Vec<String>,

    /// Working directory for the child process and for relative paths.
    pub working_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            command: "julia".to_string(),
            source_unit: PathBuf::from("app.jl"),
            args: Vec::new(),
            working_dir: None,
        }
    }
}

/// Runtime toolchain and package environment settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Runtime binary probed for presence before anything else runs.
    pub runtime_binary: String,

    /// Arguments for the cheap presence probe.
    pub probe_args: Vec<String>,

    /// Package manifest that declares the dashboard's dependencies.
    pub manifest_path: PathBuf,

    /// Lockfile that pins resolved dependency versions.
    pub lockfile_path: PathBuf,

    /// Command that performs the lockfile-driven dependency sync.
    pub sync_command: String,

    /// Arguments for the dependency sync command.
    pub sync_args: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            runtime_binary: "julia".to_string(),
            probe_args: vec!["--version".to_string()],
            manifest_path: PathBuf::from("Project.toml"),
            lockfile_path: PathBuf::from("Manifest.toml"),
            sync_command: "julia".to_string(),
            sync_args: vec![
                "--project=.".to_string(),
                "-e".to_string(),
                "using Pkg; Pkg.instantiate()".to_string(),
            ],
        }
    }
}

/// Readiness probing of the spawned dashboard server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Host probed for readiness. The dashboard binds a wildcard address,
    /// so the probe targets loopback.
    pub probe_host: String,

    /// Delay between probe attempts in milliseconds.
    pub interval_ms: u64,

    /// Total time to wait for the server to accept a connection, in seconds.
    pub max_wait_secs: u64,

    /// Optional HTTP path to fetch once the TCP port accepts. Any response
    /// counts as ready; `None` stops at the TCP check.
    pub http_path: Option<String>,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            probe_host: "127.0.0.1".to_string(),
            interval_ms: 200,
            max_wait_secs: 30,
            http_path: None,
        }
    }
}

/// Shutdown handling for the child process.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Seconds to wait after SIGTERM before the process group is killed.
    pub grace_period_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_original_launcher() {
        let config = LauncherConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.default_port, 8050);
        assert!(!config.server.debug);
        assert_eq!(config.app.source_unit, PathBuf::from("app.jl"));
        assert_eq!(config.environment.manifest_path, PathBuf::from("Project.toml"));
    }

    #[test]
    fn empty_toml_deserializes_to_defaults() {
        let config: LauncherConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.default_port, 8050);
        assert_eq!(config.readiness.probe_host, "127.0.0.1");
        assert!(config.readiness.http_path.is_none());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: LauncherConfig = toml::from_str(
            r#"
            [server]
            default_port = 9000

            [app]
            command = "python3"
            source_unit = "dashboard.py"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.default_port, 9000);
        assert_eq!(config.app.command, "python3");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.environment.runtime_binary, "julia");
    }
}
