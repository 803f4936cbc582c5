//! Configuration for models, views and the command layer.
//!
//! Configuration is read from TOML. Every field is optional:
//!
//! ```toml
//! initial_mode = "grouped"      # "flat" (default) or "grouped"
//! expand_after_command = true   # re-expand the view after each command
//! tree_style = "ascii"          # "unicode" (default), "ascii" or "compact"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::model::{GroupingMode, TreeStyle};

/// Settings shared by [`GroupingModel`](crate::model::GroupingModel),
/// [`ExpandedTreeView`](crate::view::ExpandedTreeView) and
/// [`ItemCommands`](crate::commands::ItemCommands).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrellisConfig {
    /// Grouping mode of a freshly created model.
    pub initial_mode: GroupingMode,
    /// Whether the command layer expands every node after each command.
    pub expand_after_command: bool,
    /// Branch style used when printing the tree.
    pub tree_style: TreeStyle,
}

impl Default for TrellisConfig {
    fn default() -> Self {
        Self {
            initial_mode: GroupingMode::Flat,
            expand_after_command: true,
            tree_style: TreeStyle::Unicode,
        }
    }
}

impl TrellisConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        trellis_core::trellis_debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
