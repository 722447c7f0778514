//! Dashboard Launcher Library
//!
//! A supervisor for a web-dashboard server process, built with Tokio.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                 DASH LAUNCHER                     │
//!                    │                                                   │
//!   CLI args         │  ┌─────────┐    ┌─────────────┐    ┌──────────┐  │
//!   ─────────────────┼─▶│   cli   │───▶│  lifecycle  │───▶│environ-  │  │
//!                    │  │  parse  │    │  startup    │    │ ment     │  │
//!                    │  └─────────┘    └──────┬──────┘    │probe/sync│  │
//!                    │                        │           └──────────┘  │
//!                    │                        ▼                         │
//!                    │                ┌──────────────┐    ┌──────────┐  │
//!   HTTP traffic     │                │  supervisor  │───▶│  child   │──┼──▶ Dashboard
//!   (served by child)│                │ spawn/attach │    │ process  │  │    Server
//!                    │                └──────┬───────┘    └──────────┘  │
//!                    │                       │                          │
//!                    │                       ▼                          │
//!                    │                ┌──────────────┐                  │
//!                    │                │   health     │ (TCP/HTTP probe) │
//!                    │                │  readiness   │                  │
//!                    │                └──────────────┘                  │
//!                    │                                                  │
//!                    │  ┌────────────────────────────────────────────┐  │
//!                    │  │           Cross-Cutting Concerns            │  │
//!                    │  │  ┌─────────┐ ┌───────────────┐ ┌─────────┐ │  │
//!                    │  │  │ config  │ │ observability │ │lifecycle│ │  │
//!                    │  │  │         │ │   (tracing)   │ │ signals │ │  │
//!                    │  │  └─────────┘ └───────────────┘ └─────────┘ │  │
//!                    │  └────────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────────┘
//! ```
//!
//! The launcher itself serves no HTTP. It prepares the dashboard's runtime
//! environment, spawns the dashboard server as a managed subprocess bound to
//! `0.0.0.0:<port>`, waits for it to become reachable, and then blocks for its
//! lifetime while streaming its output and forwarding termination signals.

// Core subsystems
pub mod cli;
pub mod config;
pub mod environment;
pub mod supervisor;

// Cross-cutting concerns
pub mod health;
pub mod lifecycle;
pub mod observability;

pub use config::LauncherConfig;
pub use lifecycle::startup::{Orchestrator, Phase, StartupError};
pub use lifecycle::Shutdown;
