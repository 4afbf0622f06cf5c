//! Config Object
//!
//! A parameter set built from a mapping, a JSON or INI string, a stream or a
//! file, optionally layered over defaults supplied by a [`Defaults`] type.
//! Provides map-style access, mutation and serialization back to JSON or INI.

use crate::error::ParamError;
use crate::format::{ini, json, Format};
use crate::loader;
use crate::merge::merge_into;
use crate::ParamMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::marker::PhantomData;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Source of default parameters for default-seeded construction.
///
/// The provided `defaults` fails with [`ParamError::DefaultsNotImplemented`];
/// implementors override it to enable `from_default` and the `from_default`
/// flag of the other constructors.
pub trait Defaults {
    fn defaults() -> Result<ParamMap, ParamError> {
        Err(ParamError::DefaultsNotImplemented {
            type_name: std::any::type_name::<Self>(),
        })
    }
}

/// Marker for configs without defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDefaults;

impl Defaults for NoDefaults {}

/// A parameter set plus a record of whether its values came in as strings
pub struct Config<D = NoDefaults> {
    params: ParamMap,
    values_as_strings: bool,
    defaults: PhantomData<fn() -> D>,
}

impl<D> Config<D> {
    /// Wrap an existing parameter set
    pub fn new(params: ParamMap, values_as_strings: bool) -> Self {
        Self {
            params,
            values_as_strings,
            defaults: PhantomData,
        }
    }

    /// Merge `supplied` over an explicit set of defaults
    pub fn with_defaults(
        mut defaults: ParamMap,
        supplied: &ParamMap,
        values_as_strings: bool,
    ) -> Result<Self, ParamError> {
        merge_into(&mut defaults, supplied)?;
        Ok(Self::new(defaults, values_as_strings))
    }

    /// Top-level keys in insertion order
    pub fn keys(&self) -> Vec<&str> {
        self.params.keys().map(String::as_str).collect()
    }

    /// Look up a top-level parameter
    pub fn get(&self, key: &str) -> Result<&Value, ParamError> {
        self.params
            .get(key)
            .ok_or_else(|| ParamError::MissingKey(key.to_string()))
    }

    /// Overwrite or create a top-level parameter
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(key.into(), value.into());
    }

    /// True when the parameters were read from INI, so every leaf is a string
    pub fn values_as_strings(&self) -> bool {
        self.values_as_strings
    }

    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    pub fn into_params(self) -> ParamMap {
        self.params
    }

    /// Write the parameter set to `<output_dir>/<filename>.<ext>`.
    ///
    /// `output_dir` is created with its parents when missing. JSON output has
    /// keys sorted at every level; INI output requires every top-level value
    /// to be a mapping. Returns the path written.
    pub fn save_params(
        &self,
        filename: &str,
        output_dir: Option<&Path>,
        format: Format,
    ) -> Result<PathBuf, ParamError> {
        let file_name = format!("{}.{}", filename, format.extension());
        let path = match output_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                dir.join(file_name)
            }
            None => PathBuf::from(file_name),
        };

        let contents = match format {
            Format::Json => json::to_sorted_string(&self.params)?,
            Format::Ini => ini::to_string(&self.params)?,
        };
        std::fs::write(&path, contents)?;

        info!(path = %path.display(), format = ?format, "Saved parameters");
        Ok(path)
    }
}

impl<D: Defaults> Config<D> {
    /// Build from an in-memory mapping
    pub fn from_dict(dictionary: ParamMap, from_default: bool) -> Result<Self, ParamError> {
        let seed = Self::seed(from_default)?;
        Ok(Self::new(Self::layer(seed, dictionary)?, false))
    }

    /// Build from JSON or INI text
    pub fn from_string(text: &str, from_default: bool) -> Result<Self, ParamError> {
        let seed = Self::seed(from_default)?;
        let (supplied, format) = loader::parse_document(text)?;
        Self::from_loaded(seed, supplied, format)
    }

    /// Build from a reader yielding JSON or INI text
    pub fn from_stream<R: Read>(reader: R, from_default: bool) -> Result<Self, ParamError> {
        let seed = Self::seed(from_default)?;
        let (supplied, format) = loader::load_document(reader)?;
        Self::from_loaded(seed, supplied, format)
    }

    /// Build from a JSON or INI file
    pub fn from_file<P: AsRef<Path>>(path: P, from_default: bool) -> Result<Self, ParamError> {
        let seed = Self::seed(from_default)?;
        let (supplied, format) = loader::load_file(path.as_ref())?;
        Self::from_loaded(seed, supplied, format)
    }

    /// Build from the defaults alone
    pub fn from_default() -> Result<Self, ParamError> {
        Ok(Self::new(D::defaults()?, false))
    }

    /// Defaults are resolved before any input is read, so a missing
    /// `Defaults` implementation is reported ahead of parse errors.
    fn seed(from_default: bool) -> Result<Option<ParamMap>, ParamError> {
        if from_default {
            D::defaults().map(Some)
        } else {
            Ok(None)
        }
    }

    fn from_loaded(
        seed: Option<ParamMap>,
        supplied: ParamMap,
        format: Format,
    ) -> Result<Self, ParamError> {
        debug!(format = ?format, from_default = seed.is_some(), "Building config");
        Ok(Self::new(
            Self::layer(seed, supplied)?,
            format.values_as_strings(),
        ))
    }

    fn layer(seed: Option<ParamMap>, supplied: ParamMap) -> Result<ParamMap, ParamError> {
        match seed {
            Some(mut params) => {
                merge_into(&mut params, &supplied)?;
                Ok(params)
            }
            None => Ok(supplied),
        }
    }
}

impl<D: Defaults> FromStr for Config<D> {
    type Err = ParamError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_string(text, false)
    }
}

impl<D> Index<&str> for Config<D> {
    type Output = Value;

    /// Panics when `key` is absent; use [`Config::get`] to handle that case.
    fn index(&self, key: &str) -> &Value {
        &self.params[key]
    }
}

impl<D> Clone for Config<D> {
    fn clone(&self) -> Self {
        Self::new(self.params.clone(), self.values_as_strings)
    }
}

impl<D> PartialEq for Config<D> {
    fn eq(&self, other: &Self) -> bool {
        self.values_as_strings == other.values_as_strings && self.params == other.params
    }
}

impl<D> fmt::Debug for Config<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("params", &self.params)
            .field("values_as_strings", &self.values_as_strings)
            .finish()
    }
}

impl<D> fmt::Display for Config<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = serde_json::to_string_pretty(&self.params).map_err(|_| fmt::Error)?;
        write!(f, "Config object:\n{}", body)
    }
}

impl<D> Serialize for Config<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.params.serialize(serializer)
    }
}
