//! Paramset: Layered Parameter Sets
//!
//! Parameter sets loaded from JSON or INI text, files or streams, optionally
//! merged over typed defaults, and written back out as JSON or INI.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod logging;
pub mod merge;
pub mod settings;

pub use config::{Config, Defaults, NoDefaults};
pub use error::ParamError;
pub use format::Format;

/// Mapping of parameter names to values, in insertion order
pub type ParamMap = serde_json::Map<String, serde_json::Value>;
