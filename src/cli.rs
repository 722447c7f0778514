//! Command-line surface.
//!
//! # Responsibilities
//! - Parse `dash-launcher [PORT]` and the explicit subcommands
//! - Validate the port argument at parse time
//! - Resolve the listen port exactly once, before startup
//!
//! # Design Decisions
//! - A bare `dash-launcher [PORT]` is shorthand for `serve [PORT]`
//! - Malformed ports fail fast with a clear error; there is no silent
//!   fallback to the default port

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ServerConfig;

#[derive(Parser)]
#[command(name = "dash-launcher")]
#[command(
    about = "Launches a web-dashboard server with its runtime environment prepared",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Listen port for the dashboard server (1-65535); defaults to the
    /// configured port (8050)
    #[arg(value_parser = parse_port)]
    pub port: Option<u16>,

    /// Path to the launcher configuration file
    #[arg(short, long, global = true, default_value = "launcher.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prepare the dashboard environment (runtime probe + dependency sync)
    Setup,
    /// Launch the dashboard server, assuming dependencies are satisfied
    Serve {
        /// Listen port (1-65535)
        #[arg(value_parser = parse_port)]
        port: Option<u16>,

        /// Run the dependency sync before launching
        #[arg(long)]
        sync: bool,
    },
    /// Verify the toolchain, manifests and application source unit
    Check {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse and range-check a port argument.
fn parse_port(raw: &str) -> Result<u16, String> {
    let port: u16 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a valid port number (expected 1-65535)"))?;
    if port == 0 {
        return Err("port must be between 1 and 65535".to_string());
    }
    Ok(port)
}

/// Resolve the listen port from an explicit argument or the configured
/// default. Called exactly once, before startup; the result never changes
/// for the process lifetime.
pub fn resolve_port(explicit: Option<u16>, server: &ServerConfig) -> u16 {
    let port = explicit.unwrap_or(server.default_port);
    tracing::info!(port, explicit = explicit.is_some(), "Listen port resolved");
    port
}
