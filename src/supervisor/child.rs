//! Child process plumbing.
//!
//! # Responsibilities
//! - Keep the spawned server in its own process group
//! - Guarantee cleanup of the whole group if the supervisor unwinds
//! - Stream child stdout/stderr into structured logs

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};

/// RAII guard that kills the child's process group on drop.
///
/// Wraps the `Child` immediately after spawn so that an error or
/// cancellation anywhere in the supervisor cannot leak a running server.
/// Call `disarm()` once the child has exited.
pub(crate) struct ChildGuard {
    child: Option<Child>,
}

impl ChildGuard {
    pub(crate) fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    pub(crate) fn child_mut(&mut self) -> &mut Child {
        self.child.as_mut().expect("child present")
    }

    pub(crate) fn id(&self) -> Option<u32> {
        self.child.as_ref().and_then(|c| c.id())
    }

    pub(crate) fn disarm(&mut self) {
        self.child = None;
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        let Some(child) = self.child.as_mut() else {
            return;
        };
        #[cfg(unix)]
        {
            if let Some(pid) = child.id() {
                unsafe {
                    if libc::killpg(pid as i32, libc::SIGKILL) == -1 {
                        let _ = child.start_kill();
                    }
                }
            }
            let _ = child.try_wait();
        }
        #[cfg(not(unix))]
        {
            let _ = child.start_kill();
            let _ = child.try_wait();
        }
    }
}

/// Put the child in its own session so the entire process group can be
/// signalled together. On Linux the child additionally dies with the
/// launcher, closing the orphaned-server window even on SIGKILL.
#[cfg(unix)]
pub(crate) fn isolate_process_group(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    unsafe {
        command.as_std_mut().pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(std::io::Error::last_os_error());
            }
            #[cfg(target_os = "linux")]
            {
                if libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGKILL) == -1 {
                    return Err(std::io::Error::last_os_error());
                }
            }
            Ok(())
        });
    }
}

#[cfg(not(unix))]
pub(crate) fn isolate_process_group(_command: &mut Command) {}

/// Send SIGTERM to the child's process group.
#[cfg(unix)]
pub(crate) fn terminate_group(pid: u32) {
    unsafe {
        let _ = libc::killpg(pid as i32, libc::SIGTERM);
    }
}

#[cfg(not(unix))]
pub(crate) fn terminate_group(_pid: u32) {}

/// Stream the child's piped stdout/stderr line-by-line into tracing.
///
/// The dashboard keeps its own log format; lines pass through verbatim
/// tagged with the stream they came from.
pub(crate) fn stream_output(child: &mut Child) {
    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                tracing::info!(stream = "stdout", "dashboard: {line}");
            }
        });
    }
    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                tracing::warn!(stream = "stderr", "dashboard: {line}");
            }
        });
    }
}
