//! Switchable flat/grouped projection of an [`ItemStore`].
//!
//! `GroupingModel` presents the same items either as a flat list or as a
//! two-level tree with one node per category. It owns no tree: every query
//! is answered from the store and the current layout, which consists of the
//! grouping mode, an epoch counter and an ordered snapshot of the category
//! set. The layout is rebuilt once per mutation, between the
//! `layout_about_to_change` and `layout_changed` signals, and stays fixed
//! until the next mutation.
//!
//! Indices carry the epoch they were issued in. Indices from an earlier
//! epoch are rejected by every query and behave like invalid indices.

use std::collections::HashSet;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use trellis_core::PerfSpan;
use trellis_core::logging::{span_names, targets};

use super::index::{ModelIndex, NodeRef};
use super::item_store::{Item, ItemStore};
use super::role::{ItemData, ItemRole};
use super::traits::{ItemFlags, ItemModel, ModelSignals};
use crate::config::TrellisConfig;

/// How the model arranges its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// One level: every item is a child of the root.
    #[default]
    Flat,
    /// Two levels: categories under the root, items under their category.
    Grouped,
}

impl GroupingMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GroupingMode::Flat => GroupingMode::Grouped,
            GroupingMode::Grouped => GroupingMode::Flat,
        }
    }
}

/// Layout fixed for the duration of one epoch.
#[derive(Debug)]
struct Layout {
    epoch: u64,
    mode: GroupingMode,
    /// Categories in order of first appearance in the item sequence.
    categories: Vec<String>,
}

#[derive(Debug)]
struct ModelState {
    store: ItemStore,
    layout: Layout,
}

impl ModelState {
    fn new(mode: GroupingMode) -> Self {
        Self {
            store: ItemStore::new(),
            layout: Layout {
                epoch: 1,
                mode,
                categories: Vec::new(),
            },
        }
    }

    /// Starts a new epoch and rebuilds the category snapshot.
    fn relayout(&mut self) {
        let mut seen = HashSet::new();
        let categories: Vec<String> = self
            .store
            .items()
            .iter()
            .filter(|item| seen.insert(item.category.as_str()))
            .map(|item| item.category.clone())
            .collect();
        debug_assert_eq!(categories.len(), self.store.category_count());

        self.layout.categories = categories;
        self.layout.epoch += 1;
        tracing::debug!(
            target: targets::MODEL,
            epoch = self.layout.epoch,
            mode = ?self.layout.mode,
            items = self.store.len(),
            categories = self.layout.categories.len(),
            "layout rebuilt"
        );
    }

    /// Resolves an index to the node it names in the current layout.
    ///
    /// The invalid index resolves to the root. Returns `None` for indices
    /// from another epoch and for references that do not exist in the
    /// current layout.
    fn resolve(&self, index: &ModelIndex) -> Option<NodeRef> {
        if !index.is_valid() {
            return Some(NodeRef::Root);
        }
        if index.epoch() != self.layout.epoch {
            tracing::trace!(
                target: targets::MODEL,
                index_epoch = index.epoch(),
                current_epoch = self.layout.epoch,
                "rejecting stale index"
            );
            return None;
        }
        match index.node() {
            // Category nodes only exist in grouped mode.
            NodeRef::Category(k)
                if self.layout.mode == GroupingMode::Grouped
                    && k < self.layout.categories.len() =>
            {
                Some(NodeRef::Category(k))
            }
            NodeRef::Item(i) if i < self.store.len() => Some(NodeRef::Item(i)),
            _ => None,
        }
    }

    fn category_position(&self, category: &str) -> Option<usize> {
        self.layout.categories.iter().position(|c| c == category)
    }

    fn create_index(&self, row: usize, node: NodeRef) -> ModelIndex {
        ModelIndex::new(row, 0, node, self.layout.epoch)
    }

    /// Index of the item at store position `position`, in the current mode.
    fn index_for_position(&self, position: usize) -> ModelIndex {
        let Some(item) = self.store.items().get(position) else {
            return ModelIndex::invalid();
        };
        match self.layout.mode {
            GroupingMode::Flat => self.create_index(position, NodeRef::Item(position)),
            GroupingMode::Grouped => self
                .store
                .positions_in(&item.category)
                .position(|(p, _)| p == position)
                .map_or_else(ModelIndex::invalid, |row| {
                    self.create_index(row, NodeRef::Item(position))
                }),
        }
    }
}

/// A model that shows one item collection flat or grouped by category.
///
/// Starts empty and flat. All mutators take `&self`; the model is
/// internally synchronized and can be shared behind an `Arc` with a view.
///
/// # Example
///
/// ```
/// use trellis::model::{GroupingModel, ItemModel, ModelIndex};
///
/// let model = GroupingModel::new();
/// model.add_item("Apple", "Fruit");
/// model.add_item("Carrot", "Veg");
/// model.add_item("Banana", "Fruit");
///
/// let root = ModelIndex::invalid();
/// assert_eq!(model.row_count(&root), 3);
///
/// model.toggle_grouping();
/// assert_eq!(model.row_count(&root), 2);
///
/// let fruit = model.index(0, 0, &root);
/// assert_eq!(model.display_text(&fruit).as_deref(), Some("Fruit"));
/// assert_eq!(model.row_count(&fruit), 2);
/// ```
pub struct GroupingModel {
    state: RwLock<ModelState>,
    signals: ModelSignals,
}

impl GroupingModel {
    /// Creates an empty model in flat mode.
    pub fn new() -> Self {
        Self::with_mode(GroupingMode::Flat)
    }

    /// Creates an empty model in the given mode.
    pub fn with_mode(mode: GroupingMode) -> Self {
        Self {
            state: RwLock::new(ModelState::new(mode)),
            signals: ModelSignals::new(),
        }
    }

    /// Creates an empty model configured from `config`.
    pub fn with_config(config: &TrellisConfig) -> Self {
        Self::with_mode(config.initial_mode)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Runs `change` on the state inside a layout-change bracket.
    ///
    /// The state lock is released before `layout_changed` is emitted, so
    /// slots may query the model.
    fn change_layout<R>(&self, change: impl FnOnce(&mut ModelState) -> R) -> R {
        let _perf = PerfSpan::new(span_names::LAYOUT_CHANGE);
        self.signals.emit_layout_changed(|| {
            let mut state = self.state.write();
            let result = change(&mut state);
            state.relayout();
            result
        })
    }

    /// Flips between flat and grouped mode.
    ///
    /// Invalidates every index issued before the call.
    pub fn toggle_grouping(&self) {
        self.change_layout(|state| {
            state.layout.mode = state.layout.mode.toggled();
        });
    }

    /// Switches to `mode`.
    ///
    /// Returns `false` without emitting any signal if the model is already
    /// in that mode.
    pub fn set_grouping_mode(&self, mode: GroupingMode) -> bool {
        if self.grouping_mode() == mode {
            return false;
        }
        self.change_layout(|state| state.layout.mode = mode);
        true
    }

    /// Appends an item.
    ///
    /// The model does not validate its input; see
    /// [`ItemCommands`](crate::commands::ItemCommands) for the checked entry
    /// point. Invalidates every index issued before the call.
    pub fn add_item(&self, name: impl Into<String>, category: impl Into<String>) {
        let (name, category) = (name.into(), category.into());
        self.change_layout(|state| state.store.add(name, category));
    }

    /// Removes the first item named `name`, if any.
    ///
    /// The layout-change bracket is emitted even when nothing matches.
    /// Invalidates every index issued before the call.
    pub fn remove_item(&self, name: &str) -> Option<Item> {
        self.change_layout(|state| state.store.remove(name))
    }

    /// Removes every item.
    pub fn clear(&self) {
        self.change_layout(|state| state.store.clear());
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the current grouping mode.
    pub fn grouping_mode(&self) -> GroupingMode {
        self.state.read().layout.mode
    }

    /// Returns `true` in grouped mode.
    pub fn is_grouped(&self) -> bool {
        self.grouping_mode() == GroupingMode::Grouped
    }

    /// Returns the current layout epoch.
    ///
    /// Incremented once by every mutation.
    pub fn epoch(&self) -> u64 {
        self.state.read().layout.epoch
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.state.read().store.len()
    }

    /// Returns the categories in the order used for row numbers this epoch.
    pub fn categories(&self) -> Vec<String> {
        self.state.read().layout.categories.clone()
    }

    /// Returns a copy of the items in insertion order.
    pub fn items(&self) -> Vec<Item> {
        self.state.read().store.items().to_vec()
    }

    /// Provides read access to the underlying store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ItemStore) -> R,
    {
        f(&self.state.read().store)
    }

    /// Returns the item an index refers to, if it is a current item leaf.
    pub fn item(&self, index: &ModelIndex) -> Option<Item> {
        let state = self.state.read();
        match state.resolve(index)? {
            NodeRef::Item(position) => state.store.items().get(position).cloned(),
            _ => None,
        }
    }

    /// Returns the category an index refers to, if it is a current category node.
    pub fn category(&self, index: &ModelIndex) -> Option<String> {
        let state = self.state.read();
        match state.resolve(index)? {
            NodeRef::Category(k) => state.layout.categories.get(k).cloned(),
            _ => None,
        }
    }

    /// Returns the index of the first item named `name` in the current mode.
    ///
    /// In grouped mode the index is a leaf under the item's category.
    pub fn index_of_item(&self, name: &str) -> ModelIndex {
        let state = self.state.read();
        state
            .store
            .position_of(name)
            .map_or_else(ModelIndex::invalid, |position| {
                state.index_for_position(position)
            })
    }

    /// Returns the category node index for `category` in grouped mode.
    pub fn index_of_category(&self, category: &str) -> ModelIndex {
        let state = self.state.read();
        if state.layout.mode != GroupingMode::Grouped {
            return ModelIndex::invalid();
        }
        state
            .category_position(category)
            .map_or_else(ModelIndex::invalid, |k| {
                state.create_index(k, NodeRef::Category(k))
            })
    }
}

impl Default for GroupingModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GroupingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("GroupingModel")
            .field("mode", &state.layout.mode)
            .field("epoch", &state.layout.epoch)
            .field("items", &state.store.len())
            .field("categories", &state.layout.categories)
            .finish()
    }
}

impl ItemModel for GroupingModel {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        if parent.column() > 0 {
            return 0;
        }
        let state = self.state.read();
        match (state.resolve(parent), state.layout.mode) {
            (Some(NodeRef::Root), GroupingMode::Flat) => state.store.len(),
            (Some(NodeRef::Root), GroupingMode::Grouped) => state.layout.categories.len(),
            (Some(NodeRef::Category(k)), GroupingMode::Grouped) => {
                state.store.category_len(&state.layout.categories[k])
            }
            _ => 0,
        }
    }

    fn column_count(&self, _parent: &ModelIndex) -> usize {
        1
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if role != ItemRole::Display {
            return ItemData::None;
        }
        let state = self.state.read();
        match state.resolve(index) {
            Some(NodeRef::Item(position)) => {
                ItemData::from(state.store.items()[position].name.as_str())
            }
            Some(NodeRef::Category(k)) => ItemData::from(state.layout.categories[k].as_str()),
            _ => ItemData::None,
        }
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if column != 0 {
            return ModelIndex::invalid();
        }
        let state = self.state.read();
        match (state.resolve(parent), state.layout.mode) {
            (Some(NodeRef::Root), GroupingMode::Flat) if row < state.store.len() => {
                state.create_index(row, NodeRef::Item(row))
            }
            (Some(NodeRef::Root), GroupingMode::Grouped) if row < state.layout.categories.len() => {
                state.create_index(row, NodeRef::Category(row))
            }
            (Some(NodeRef::Category(k)), GroupingMode::Grouped) => state
                .store
                .positions_in(&state.layout.categories[k])
                .nth(row)
                .map_or_else(ModelIndex::invalid, |(position, _)| {
                    state.create_index(row, NodeRef::Item(position))
                }),
            _ => ModelIndex::invalid(),
        }
    }

    fn parent(&self, index: &ModelIndex) -> ModelIndex {
        let state = self.state.read();
        match (state.resolve(index), state.layout.mode) {
            (Some(NodeRef::Item(position)), GroupingMode::Grouped) => {
                let category = &state.store.items()[position].category;
                state
                    .category_position(category)
                    .map_or_else(ModelIndex::invalid, |k| {
                        state.create_index(k, NodeRef::Category(k))
                    })
            }
            // Flat items and categories sit directly under the root.
            _ => ModelIndex::invalid(),
        }
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        let state = self.state.read();
        match state.resolve(index) {
            Some(NodeRef::Category(_)) => ItemFlags::new(),
            Some(NodeRef::Item(_)) => ItemFlags::leaf(),
            _ => ItemFlags::disabled(),
        }
    }
}

static_assertions::assert_impl_all!(GroupingModel: Send, Sync);
