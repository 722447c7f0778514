//! Runtime environment preparation subsystem.
//!
//! # Data Flow
//! ```text
//! Runtime probe (runtime.rs):
//!     Resolve runtime binary → run probe args → confirm it executes
//!
//! Dependency sync (sync.rs):
//!     Check manifest + lockfile exist
//!     → run sync command (network I/O, unbounded latency)
//!     → non-zero exit is fatal
//! ```
//!
//! # Design Decisions
//! - The probe is idempotent and cheap when the runtime is installed
//! - No timeout on the sync step; resolving packages may legitimately
//!   take far longer than every other startup step combined
//! - Sync failures abort startup before the application source unit is
//!   ever touched

pub mod runtime;
pub mod sync;

pub use runtime::{ensure_runtime, RuntimeError};
pub use sync::{sync_dependencies, SyncError};
