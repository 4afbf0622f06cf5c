//! CLI parse: clap types for paramset. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paramset CLI - inspect and convert JSON/INI parameter files
#[derive(Parser)]
#[command(name = "paramset")]
#[command(about = "Inspect and convert JSON or INI parameter files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Defaults document; the input is merged over it
    #[arg(long, global = true)]
    pub defaults: Option<PathBuf>,

    /// Tool settings file (TOML or JSON)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the loaded parameter set
    Show {
        /// JSON or INI file
        input: PathBuf,
    },
    /// List top-level keys in order
    Keys {
        /// JSON or INI file
        input: PathBuf,
    },
    /// Print one top-level value as JSON
    Get {
        /// JSON or INI file
        input: PathBuf,
        /// Top-level key
        key: String,
    },
    /// Write the parameter set as JSON (default) or INI
    Convert {
        /// JSON or INI file
        input: PathBuf,
        /// Output file name, without extension
        #[arg(long)]
        name: String,
        /// Directory to write into (created when missing)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Write INI instead of JSON
        #[arg(long)]
        ini: bool,
    },
}
