//! Error types for the trellis crate.
//!
//! The model itself never fails: bad addresses produce empty answers. These
//! errors belong to the layers around it.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected user input at the command layer.
///
/// The messages are written for end users and can be shown verbatim in a
/// warning dialog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// An add command was missing its name or its category.
    #[error("Please enter both name and category.")]
    MissingNameOrCategory,

    /// A remove command was missing the item name.
    #[error("Please enter the name of the item to remove.")]
    MissingName,
}

impl InputError {
    /// Title for a warning dialog showing this error.
    pub fn title(&self) -> &'static str {
        "Input Error"
    }
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`TrellisConfig`](crate::config::TrellisConfig).
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
