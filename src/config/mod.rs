//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! launcher.toml
//!     → loader.rs (parse & deserialize, defaults when absent)
//!     → validation.rs (semantic checks)
//!     → LauncherConfig (validated, immutable)
//!     → shared by reference with all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the listen port in particular is
//!   resolved exactly once before startup and never changes
//! - All fields have defaults so the config file is optional
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::AppConfig;
pub use schema::EnvironmentConfig;
pub use schema::LauncherConfig;
pub use schema::ObservabilityConfig;
pub use schema::ReadinessConfig;
pub use schema::ServerConfig;
pub use schema::ShutdownConfig;
