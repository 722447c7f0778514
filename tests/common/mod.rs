//! Shared helpers for launcher integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Path to the launcher binary under test.
pub const LAUNCHER_BIN: &str = env!("CARGO_BIN_EXE_dash-launcher");

/// Path to the stand-in dashboard server.
pub const MOCK_DASHBOARD_BIN: &str = env!("CARGO_BIN_EXE_mock-dashboard");

/// Create the sibling files the launcher expects: application source unit
/// plus the manifest/lockfile pair.
pub fn provision(dir: &Path) {
    fs::write(dir.join("app.jl"), "# dashboard definition\n").unwrap();
    fs::write(dir.join("Project.toml"), "name = \"demo\"\n").unwrap();
    fs::write(dir.join("Manifest.toml"), "# pinned\n").unwrap();
}

/// Write a launcher config into the directory and return its path.
pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("launcher.toml");
    fs::write(&path, body).unwrap();
    path
}

/// Config that launches the mock dashboard binary as the application.
pub fn mock_config(dir: &Path) -> String {
    format!(
        r#"
[server]
host = "127.0.0.1"

[app]
command = "{mock}"
source_unit = "app.jl"
working_dir = "{dir}"

[environment]
runtime_binary = "{mock}"
probe_args = ["--version"]
sync_command = "true"
sync_args = []

[readiness]
interval_ms = 100
max_wait_secs = 20
"#,
        mock = MOCK_DASHBOARD_BIN,
        dir = dir.display()
    )
}

/// Mock-dashboard config whose application accepts the handoff but never
/// binds, with a short readiness window.
pub fn holding_config(dir: &Path) -> String {
    format!(
        r#"
[server]
host = "127.0.0.1"

[app]
command = "{mock}"
source_unit = "app.jl"
args = ["--hold"]
working_dir = "{dir}"

[environment]
runtime_binary = "{mock}"
probe_args = ["--version"]
sync_command = "true"
sync_args = []

[readiness]
interval_ms = 100
max_wait_secs = 3
"#,
        mock = MOCK_DASHBOARD_BIN,
        dir = dir.display()
    )
}

/// Config whose toolchain steps always succeed without doing anything,
/// for exercising failures later in the sequence.
pub fn stub_config(dir: &Path, app_command: &str) -> String {
    format!(
        r#"
[app]
command = "{app_command}"
source_unit = "app.jl"
working_dir = "{dir}"

[environment]
runtime_binary = "true"
probe_args = []
sync_command = "true"
sync_args = []

[readiness]
interval_ms = 100
max_wait_secs = 3
"#,
        dir = dir.display()
    )
}

/// Poll a URL until it answers, returning the response body.
pub async fn wait_for_http(url: &str, timeout: Duration) -> Option<String> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Ok(response) = reqwest::get(url).await {
            if let Ok(text) = response.text().await {
                return Some(text);
            }
        }
        tokio::time::sleep(Duration::from_millis(150)).await;
    }
    None
}
