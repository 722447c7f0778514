//! End-to-end launch tests against the mock dashboard server.

use std::process::{Command, Stdio};
use std::time::Duration;

use predicates::prelude::*;

mod common;

#[tokio::test]
async fn serve_hands_off_to_a_reachable_server() {
    let dir = tempfile::tempdir().unwrap();
    common::provision(dir.path());
    let config = common::write_config(dir.path(), &common::mock_config(dir.path()));

    let mut launcher = Command::new(common::LAUNCHER_BIN)
        .args(["serve", "9000", "--config"])
        .arg(&config)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Proves the whole handoff: runtime probe, load, spawn, readiness, bind.
    let body = common::wait_for_http("http://127.0.0.1:9000/", Duration::from_secs(20))
        .await
        .expect("dashboard never became reachable");
    assert_eq!(body, "mock dashboard");

    // SIGTERM → graceful shutdown of launcher and child, exit code 0.
    #[cfg(unix)]
    unsafe {
        libc::kill(launcher.id() as i32, libc::SIGTERM);
    }
    let status = launcher.wait().unwrap();
    assert!(status.success(), "launcher exited with {status}");

    // The child went down with it.
    assert!(
        common::wait_for_http("http://127.0.0.1:9000/", Duration::from_millis(600))
            .await
            .is_none(),
        "dashboard still reachable after shutdown"
    );
}

#[tokio::test]
async fn bare_port_argument_is_shorthand_for_serve() {
    let dir = tempfile::tempdir().unwrap();
    common::provision(dir.path());
    let config = common::write_config(dir.path(), &common::mock_config(dir.path()));

    let mut launcher = Command::new(common::LAUNCHER_BIN)
        .args(["28472", "--config"])
        .arg(&config)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let body = common::wait_for_http("http://127.0.0.1:28472/", Duration::from_secs(20))
        .await
        .expect("dashboard never became reachable");
    assert_eq!(body, "mock dashboard");

    #[cfg(unix)]
    unsafe {
        libc::kill(launcher.id() as i32, libc::SIGTERM);
    }
    let status = launcher.wait().unwrap();
    assert!(status.success());
}

#[test]
fn crashing_server_surfaces_its_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    common::provision(dir.path());
    // `false` exits immediately without ever binding the port.
    let config = common::write_config(dir.path(), &common::stub_config(dir.path(), "false"));

    assert_cmd::Command::new(common::LAUNCHER_BIN)
        .args(["serve", "28473", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("exited during startup"));
}

#[test]
fn server_that_never_binds_times_out() {
    let dir = tempfile::tempdir().unwrap();
    common::provision(dir.path());
    // The held mock accepts the handoff but outlives the 3s readiness
    // window without binding anything.
    let config = common::write_config(dir.path(), &common::holding_config(dir.path()));

    assert_cmd::Command::new(common::LAUNCHER_BIN)
        .args(["serve", "28474", "--config"])
        .arg(&config)
        .timeout(Duration::from_secs(15))
        .assert()
        .failure()
        .stdout(predicate::str::contains("not reachable"));
}
