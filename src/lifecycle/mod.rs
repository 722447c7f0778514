//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Probe runtime → Sync dependencies → Load application → Spawn server
//!
//!     NotStarted → RuntimeReady → EnvironmentReady → ApplicationLoaded
//!         → ServerRunning (terminal, blocking)
//!
//! Shutdown (shutdown.rs):
//!     Signal received → SIGTERM to child group → Grace period → SIGKILL
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown of the child
//! ```
//!
//! # Design Decisions
//! - Transitions are one-directional; there is no retry or rollback at
//!   any stage, and every phase failure is fatal to the process
//! - The launcher never restarts the child; an exited server means exit

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
