//! Error types for configuration, probing, loading, and composition

use std::path::PathBuf;

use thiserror::Error;

/// Errors in a grid configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A grid needs at least one row and one column
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    /// Cell size, padding, or margin cannot produce a usable cell
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors from the dimension probe
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("could not read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed markup: {0}")]
    Parse(#[from] roxmltree::Error),

    /// A `width`/`height` attribute that is not a usable length
    #[error("invalid {axis} value '{value}'")]
    InvalidLength { axis: &'static str, value: String },
}

/// Errors loading an input document for composition
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: roxmltree::Error,
    },
}

impl SourceError {
    /// Path of the input that failed
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } => path,
            Self::Parse { path, .. } => path,
        }
    }
}

/// Errors that abort a composition run
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("invalid grid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors resolving command-line inputs
#[derive(Error, Debug)]
pub enum InputError {
    #[error("no valid SVG files found")]
    NoValidInputs,
}
