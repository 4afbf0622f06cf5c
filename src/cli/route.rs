//! CLI route: single route table and run context.

use crate::cli::parse::Commands;
use crate::config::Config;
use crate::error::ParamError;
use crate::format::Format;
use crate::loader;
use crate::ParamMap;
use std::path::Path;
use tracing::debug;

/// Runtime context for CLI execution: the optional defaults document.
pub struct RunContext {
    defaults: Option<ParamMap>,
}

impl RunContext {
    /// Create run context, loading the defaults document when a path is given.
    pub fn new(defaults_path: Option<&Path>) -> Result<Self, ParamError> {
        let defaults = match defaults_path {
            Some(path) => {
                let (defaults, format) = loader::load_file(path)?;
                debug!(path = %path.display(), format = ?format, "Loaded defaults");
                Some(defaults)
            }
            None => None,
        };
        Ok(Self { defaults })
    }

    /// Execute a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, ParamError> {
        match command {
            Commands::Show { input } => Ok(self.load(input)?.to_string()),
            Commands::Keys { input } => Ok(self.load(input)?.keys().join("\n")),
            Commands::Get { input, key } => {
                let config = self.load(input)?;
                Ok(serde_json::to_string_pretty(config.get(key)?)?)
            }
            Commands::Convert {
                input,
                name,
                output_dir,
                ini,
            } => {
                let format = if *ini { Format::Ini } else { Format::Json };
                let path = self
                    .load(input)?
                    .save_params(name, output_dir.as_deref(), format)?;
                Ok(path.display().to_string())
            }
        }
    }

    fn load(&self, input: &Path) -> Result<Config, ParamError> {
        let (supplied, format) = loader::load_file(input)?;
        match &self.defaults {
            Some(defaults) => {
                Config::with_defaults(defaults.clone(), &supplied, format.values_as_strings())
            }
            None => Ok(Config::new(supplied, format.values_as_strings())),
        }
    }
}
