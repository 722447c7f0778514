//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Launcher subsystems  → structured tracing events → stdout
//! Dashboard child      → piped stdout/stderr       → re-emitted as events
//! ```
//!
//! # Design Decisions
//! - Log level comes from config, overridable via RUST_LOG
//! - Child output passes through verbatim; the launcher does not parse it

pub mod logging;
