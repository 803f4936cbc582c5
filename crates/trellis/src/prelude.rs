//! Prelude module for Trellis.
//!
//! ```ignore
//! use trellis::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use crate::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    GroupingMode, GroupingModel, Item, ItemData, ItemFlags, ItemModel, ItemRole, ItemStore,
    ModelIndex, ModelSignals, ModelTreeDebug,
};

// ============================================================================
// View and Commands
// ============================================================================

pub use crate::commands::{Command, ItemCommands, Outcome};
pub use crate::view::ExpandedTreeView;

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::TrellisConfig;
pub use crate::error::{ConfigError, InputError};
