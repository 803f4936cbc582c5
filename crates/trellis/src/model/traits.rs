//! Core traits for the model/view contract.
//!
//! This module defines the indexed-tree-model capability set that views
//! consume: `index`, `parent`, `row_count`, `column_count` and `data`,
//! plus the layout-change signals that bracket every mutation.

use trellis_core::Signal;

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};

/// Flags indicating what a view may do with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    /// Node can be selected.
    pub selectable: bool,
    /// Node is enabled (can interact).
    pub enabled: bool,
    /// Node can never have children (lets views skip expand indicators).
    pub never_has_children: bool,
}

impl ItemFlags {
    /// Creates flags with all defaults (selectable and enabled only).
    pub fn new() -> Self {
        Self {
            selectable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// Creates flags for a disabled node.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Creates flags for a leaf node.
    pub fn leaf() -> Self {
        Self::new().with_never_has_children(true)
    }

    /// Sets the never-has-children flag.
    pub fn with_never_has_children(mut self, leaf: bool) -> Self {
        self.never_has_children = leaf;
        self
    }
}

/// The core trait for item models.
///
/// `ItemModel` lets a view walk a tree without knowing how it is stored.
/// Every query is infallible: out-of-range positions, unsupported roles and
/// stale indices yield `ModelIndex::invalid()`, `0`, or `ItemData::None`.
///
/// # Implementation Requirements
///
/// - [`row_count`](ItemModel::row_count) - Number of rows under a parent
/// - [`column_count`](ItemModel::column_count) - Number of columns
/// - [`data`](ItemModel::data) - Data for a given index and role
/// - [`index`](ItemModel::index) - Create an index for a position
/// - [`parent`](ItemModel::parent) - Get the parent of an index
/// - [`signals`](ItemModel::signals) - Change notifications
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows under the given parent.
    fn row_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the number of columns for children of the given parent.
    fn column_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the data stored under the given role for the node at index.
    ///
    /// Return `ItemData::None` if:
    /// - The index is invalid or stale
    /// - The role is not supported
    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData;

    /// Creates a model index for the given row and column under parent.
    ///
    /// Return `ModelIndex::invalid()` if the position is out of bounds.
    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex;

    /// Returns the parent of the given index.
    ///
    /// Return `ModelIndex::invalid()` for:
    /// - Root-level nodes
    /// - Invalid indices
    fn parent(&self, index: &ModelIndex) -> ModelIndex;

    /// Returns the signals for this model.
    fn signals(&self) -> &ModelSignals;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Returns the flags for the node at the given index.
    fn flags(&self, _index: &ModelIndex) -> ItemFlags {
        ItemFlags::new()
    }

    /// Returns `true` if the node at parent has any children.
    fn has_children(&self, parent: &ModelIndex) -> bool {
        self.row_count(parent) > 0
    }

    // -------------------------------------------------------------------------
    // Convenience methods
    // -------------------------------------------------------------------------

    /// Returns the display text for a node (convenience for `data(index, Display)`).
    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        self.data(index, ItemRole::Display).into_string()
    }

    /// Creates a sibling index at the given row and column.
    fn sibling(&self, index: &ModelIndex, row: usize, column: usize) -> ModelIndex {
        if !index.is_valid() {
            return ModelIndex::invalid();
        }
        self.index(row, column, &self.parent(index))
    }
}

/// Signals emitted by item models.
///
/// A model emits `layout_about_to_change` before it touches its data and
/// `layout_changed` afterwards. Between the two, views must not query the
/// model; after `layout_changed`, every index issued earlier is stale.
pub struct ModelSignals {
    /// Emitted before a layout change.
    pub layout_about_to_change: Signal<()>,

    /// Emitted after a layout change.
    pub layout_changed: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            layout_about_to_change: Signal::new(),
            layout_changed: Signal::new(),
        }
    }

    /// Emits signals for a layout change.
    ///
    /// Calls the provided function between the about_to_change and changed
    /// signals and returns its result.
    pub fn emit_layout_changed<F, R>(&self, change_fn: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.layout_about_to_change.emit(());
        let result = change_fn();
        self.layout_changed.emit(());
        result
    }
}
