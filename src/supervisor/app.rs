//! Application definition resolution.
//!
//! The original launcher evaluated the application source unit inside an
//! embedded runtime. Here the source unit is resolved and verified up front,
//! and evaluation happens inside the child process; a missing or unreadable
//! unit is fatal before any spawn or bind attempt.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::AppConfig;

/// Error type for application load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("application source unit not found at {0}")]
    Missing(PathBuf),

    #[error("application source unit at {path} is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("application source unit at {path} is not readable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A resolved, verified application definition.
///
/// Opaque to the launcher beyond existence: the source unit's contents are
/// never inspected or mutated, only handed to the child command.
#[derive(Debug, Clone)]
pub struct AppDefinition {
    /// Command that executes the source unit.
    pub command: String,

    /// Resolved path to the application-definition source unit.
    pub source_unit: PathBuf,

    /// Extra arguments inserted before the host/port pair.
    pub args: Vec<String>,

    /// Working directory for the child process.
    pub working_dir: Option<PathBuf>,
}

impl AppDefinition {
    /// Resolve the application definition from config and verify the source
    /// unit exists.
    pub fn load(config: &AppConfig) -> Result<Self, LoadError> {
        let source_unit = match &config.working_dir {
            Some(dir) if config.source_unit.is_relative() => dir.join(&config.source_unit),
            _ => config.source_unit.clone(),
        };

        let metadata = fs::metadata(&source_unit).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::Missing(source_unit.clone())
            } else {
                LoadError::Unreadable {
                    path: source_unit.clone(),
                    source,
                }
            }
        })?;
        if !metadata.is_file() {
            return Err(LoadError::NotAFile { path: source_unit });
        }

        tracing::info!(source_unit = %source_unit.display(), "Application definition loaded");

        Ok(Self {
            command: config.command.clone(),
            source_unit,
            args: config.args.clone(),
            working_dir: config.working_dir.clone(),
        })
    }

    /// The directory paths in the child resolve against.
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}
