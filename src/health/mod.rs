//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Readiness probe (readiness.rs):
//!     Periodic timer
//!     → TCP connect to the child's port
//!     → optional HTTP GET once the port accepts
//!     → Ready, or timed out after the configured deadline
//! ```
//!
//! # Design Decisions
//! - The probe targets loopback; the child binds a wildcard address
//! - Any HTTP response counts as ready regardless of status code;
//!   the launcher makes no claims about the dashboard's routes

pub mod readiness;

pub use readiness::ReadinessProbe;
