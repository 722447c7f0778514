//! Startup readiness probing.
//!
//! # Responsibilities
//! - Poll the spawned server until it accepts connections
//! - Bound the wait so a server that never binds is detected

use std::time::{Duration, Instant};

use tokio::net::TcpStream;
use tokio::time;

use crate::config::ReadinessConfig;

/// Polls a host/port pair until the server behind it is reachable.
pub struct ReadinessProbe {
    host: String,
    port: u16,
    interval: Duration,
    max_wait: Duration,
    http_path: Option<String>,
}

impl ReadinessProbe {
    pub fn new(config: &ReadinessConfig, port: u16) -> Self {
        Self {
            host: config.probe_host.clone(),
            port,
            interval: Duration::from_millis(config.interval_ms),
            max_wait: Duration::from_secs(config.max_wait_secs),
            http_path: config.http_path.clone(),
        }
    }

    /// Wait until the server is reachable.
    ///
    /// Returns the elapsed wait on success, or `None` once the configured
    /// deadline passes without a successful probe.
    pub async fn wait_until_ready(&self) -> Option<Duration> {
        let started = Instant::now();
        let deadline = started + self.max_wait;
        let mut ticker = time::interval(self.interval);

        loop {
            ticker.tick().await;
            if Instant::now() >= deadline {
                return None;
            }
            if self.probe_once().await {
                return Some(started.elapsed());
            }
        }
    }

    async fn probe_once(&self) -> bool {
        let addr = format!("{}:{}", self.host, self.port);
        match time::timeout(self.interval, TcpStream::connect(&addr)).await {
            Ok(Ok(_stream)) => {}
            Ok(Err(e)) => {
                tracing::debug!(addr = %addr, error = %e, "Readiness probe: connect refused");
                return false;
            }
            Err(_) => {
                tracing::debug!(addr = %addr, "Readiness probe: connect timeout");
                return false;
            }
        }

        let Some(path) = &self.http_path else {
            return true;
        };

        let url = format!("http://{}:{}{}", self.host, self.port, path);
        match reqwest::get(&url).await {
            Ok(response) => {
                tracing::debug!(url = %url, status = %response.status(), "Readiness probe: HTTP response");
                true
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Readiness probe: HTTP error");
                false
            }
        }
    }
}
