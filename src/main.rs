//! Dashboard Launcher binary.
//!
//! Thin dispatch over the library: parse the CLI, load config, initialize
//! logging, then either prepare the environment (`setup`), report on it
//! (`check`), or launch and supervise the dashboard server (`serve`, the
//! default). The process exit code mirrors the dashboard server's own exit
//! code; any startup failure exits non-zero with the underlying diagnostic.

use std::path::{Path, PathBuf};

use clap::Parser;

use dash_launcher::cli::{resolve_port, Cli, Commands};
use dash_launcher::config::{load_or_default, LauncherConfig};
use dash_launcher::environment::ensure_runtime;
use dash_launcher::lifecycle::signals;
use dash_launcher::{observability, Orchestrator, Shutdown, StartupError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    observability::logging::init(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "dash-launcher starting");

    let code = match run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            1
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli, config: LauncherConfig) -> Result<i32, StartupError> {
    match cli.command {
        Some(Commands::Setup) => {
            let mut orchestrator = Orchestrator::new(config);
            orchestrator.prepare().await?;
            tracing::info!("Environment ready");
            Ok(0)
        }
        Some(Commands::Check { json }) => Ok(run_check(&config, json).await),
        Some(Commands::Serve { port, sync }) => serve(config, port, sync).await,
        None => serve(config, cli.port, false).await,
    }
}

/// The end-to-end handoff: resolve the port once, bring the environment up,
/// then block for the server's lifetime.
async fn serve(config: LauncherConfig, explicit: Option<u16>, sync: bool) -> Result<i32, StartupError> {
    let port = resolve_port(explicit, &config.server);
    let mut orchestrator = Orchestrator::new(config);
    orchestrator.ensure_ready(sync).await?;

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    orchestrator.serve(port, receiver).await
}

/// Everything `check` reports on, in one serializable struct.
#[derive(serde::Serialize)]
struct CheckReport {
    runtime_binary: String,
    runtime_ok: bool,
    manifest: PathBuf,
    manifest_present: bool,
    lockfile: PathBuf,
    lockfile_present: bool,
    source_unit: PathBuf,
    source_unit_present: bool,
}

impl CheckReport {
    fn all_ok(&self) -> bool {
        self.runtime_ok
            && self.manifest_present
            && self.lockfile_present
            && self.source_unit_present
    }
}

/// Verify the toolchain and sibling files without launching anything.
async fn run_check(config: &LauncherConfig, json: bool) -> i32 {
    let base = config.app.working_dir.as_deref();
    let resolve = |path: &Path| -> PathBuf {
        match base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    };

    let manifest = resolve(&config.environment.manifest_path);
    let lockfile = resolve(&config.environment.lockfile_path);
    let source_unit = resolve(&config.app.source_unit);

    let report = CheckReport {
        runtime_binary: config.environment.runtime_binary.clone(),
        runtime_ok: ensure_runtime(&config.environment).await.is_ok(),
        manifest_present: manifest.is_file(),
        manifest,
        lockfile_present: lockfile.is_file(),
        lockfile,
        source_unit_present: source_unit.is_file(),
        source_unit,
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("Failed to serialize report: {e}"),
        }
    } else {
        let mark = |ok: bool| if ok { "ok" } else { "MISSING" };
        println!("runtime '{}': {}", report.runtime_binary, mark(report.runtime_ok));
        println!("manifest {}: {}", report.manifest.display(), mark(report.manifest_present));
        println!("lockfile {}: {}", report.lockfile.display(), mark(report.lockfile_present));
        println!(
            "application source unit {}: {}",
            report.source_unit.display(),
            mark(report.source_unit_present)
        );
    }

    if report.all_ok() {
        0
    } else {
        1
    }
}
