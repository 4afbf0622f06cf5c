//! Tool settings for the `paramset` binary.
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! settings file (TOML or JSON, by extension), then `PARAMSET__*` environment
//! variables such as `PARAMSET__LOGGING__LEVEL=debug`. Parameter documents
//! loaded by the library never pass through this layer.

use crate::error::ParamError;
use crate::logging::LoggingConfig;
use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings of the command-line tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings, reading `path` when given. A missing file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ParamError> {
        let mut builder = builder_with_defaults()?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("PARAMSET")
                .prefix_separator("__")
                .separator("__"),
        );

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

/// Create a settings builder with the tool's defaults applied.
fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ParamError> {
    let builder = ::config::Config::builder()
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?;
    Ok(builder)
}
