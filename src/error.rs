//! Error types for parameter set loading, merging and serialization.

use thiserror::Error;

/// Errors raised while building, reading or writing a parameter set
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("Expected a mapping in the source at key '{path}'")]
    TypeMismatch { path: String },

    #[error("Defaults are not implemented for {type_name}; override Defaults::defaults")]
    DefaultsNotImplemented { type_name: &'static str },

    #[error("Missing key: {0}")]
    MissingKey(String),

    #[error("INI parse error at line {line}, column {col}: {msg}")]
    Ini { line: usize, col: usize, msg: String },

    #[error("INI option found before any section header (line {line})")]
    MissingSectionHeader { line: usize },

    #[error("Duplicate INI section: [{0}]")]
    DuplicateSection(String),

    #[error("Duplicate INI option '{option}' in section [{section}]")]
    DuplicateOption { section: String, option: String },

    #[error("JSON document root must be an object, found {0}")]
    NotAMapping(&'static str),

    #[error("Cannot write '{0}' as an INI section: value is not a mapping")]
    IniShape(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl From<::config::ConfigError> for ParamError {
    fn from(err: ::config::ConfigError) -> Self {
        ParamError::Settings(err.to_string())
    }
}

impl From<::ini::ParseError> for ParamError {
    fn from(err: ::ini::ParseError) -> Self {
        ParamError::Ini {
            line: err.line,
            col: err.col,
            msg: err.msg.to_string(),
        }
    }
}
