//! Headless tree view over an [`ItemModel`].
//!
//! `ExpandedTreeView` is the consumer side of the layout-change protocol.
//! It keeps a cache of flattened, visible rows together with the indices it
//! obtained from the model. When the model announces
//! `layout_about_to_change`, the cache is marked stale and none of its
//! indices are used again; the next read after `layout_changed` re-walks
//! the model from the root.
//!
//! The view draws nothing. It produces the rows a renderer would paint,
//! plus a plain-text rendering for terminals and tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use trellis_core::logging::{span_names, targets};
use trellis_core::{ConnectionId, PerfSpan};

use crate::model::{ItemModel, ModelIndex};

/// A visible row in the flattened tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedRow {
    /// The model index for this row.
    pub index: ModelIndex,
    /// Depth in the tree (0 for top-level).
    pub depth: usize,
    /// Display text at the time the row was built.
    pub text: String,
    /// Whether the node has children.
    pub has_children: bool,
}

/// Layout-change bookkeeping shared with the model's signal slots.
#[derive(Debug, Default)]
struct ViewSync {
    /// Set by `layout_about_to_change`; cached indices must not be used.
    stale: AtomicBool,
    /// Set between `layout_about_to_change` and `layout_changed`.
    changing: AtomicBool,
    /// Number of completed layout changes seen.
    layout_changes: AtomicU64,
}

/// A fully synchronous, headless tree view.
///
/// Top-level nodes with children are either all expanded or all collapsed;
/// the default is expanded.
pub struct ExpandedTreeView {
    model: Arc<dyn ItemModel>,
    rows: Vec<FlattenedRow>,
    expanded: bool,
    sync: Arc<ViewSync>,
    about_to_change_id: ConnectionId,
    changed_id: ConnectionId,
}

impl ExpandedTreeView {
    /// Creates a view over `model` and subscribes to its layout signals.
    pub fn new(model: Arc<dyn ItemModel>) -> Self {
        let sync = Arc::new(ViewSync {
            stale: AtomicBool::new(true),
            ..Default::default()
        });

        let about = sync.clone();
        let about_to_change_id = model.signals().layout_about_to_change.connect(move |_| {
            about.stale.store(true, Ordering::SeqCst);
            about.changing.store(true, Ordering::SeqCst);
        });

        let done = sync.clone();
        let changed_id = model.signals().layout_changed.connect(move |_| {
            done.changing.store(false, Ordering::SeqCst);
            done.layout_changes.fetch_add(1, Ordering::SeqCst);
        });

        Self {
            model,
            rows: Vec::new(),
            expanded: true,
            sync,
            about_to_change_id,
            changed_id,
        }
    }

    /// Returns the model.
    pub fn model(&self) -> &Arc<dyn ItemModel> {
        &self.model
    }

    /// Returns `true` when the cached rows predate the model's layout.
    pub fn is_stale(&self) -> bool {
        self.sync.stale.load(Ordering::SeqCst)
    }

    /// Returns `true` while the model is between its two layout signals.
    pub fn is_layout_changing(&self) -> bool {
        self.sync.changing.load(Ordering::SeqCst)
    }

    /// Number of `layout_changed` notifications received so far.
    pub fn layout_change_count(&self) -> u64 {
        self.sync.layout_changes.load(Ordering::SeqCst)
    }

    /// Returns `true` if nodes with children are shown expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expands every node.
    pub fn expand_all(&mut self) {
        self.set_expanded(true);
    }

    /// Collapses every node, leaving only top-level rows visible.
    pub fn collapse_all(&mut self) {
        self.set_expanded(false);
    }

    fn set_expanded(&mut self, expanded: bool) {
        if self.expanded != expanded {
            self.expanded = expanded;
            self.sync.stale.store(true, Ordering::SeqCst);
        }
    }

    /// Returns the visible rows, rebuilding them if the cache is stale.
    pub fn rows(&mut self) -> &[FlattenedRow] {
        if self.is_stale() {
            self.rebuild();
        }
        &self.rows
    }

    /// Returns the number of visible rows.
    pub fn visible_row_count(&mut self) -> usize {
        self.rows().len()
    }

    /// Returns the model index shown at visual row `row`.
    pub fn index_at(&mut self, row: usize) -> ModelIndex {
        self.rows()
            .get(row)
            .map_or_else(ModelIndex::invalid, |r| r.index)
    }

    /// Renders the visible rows as indented text, one row per line.
    ///
    /// Collapsed nodes with children are marked `+`, expanded ones `-`.
    pub fn render(&mut self) -> String {
        let expanded = self.expanded;
        let mut output = String::new();
        for row in self.rows() {
            for _ in 0..row.depth {
                output.push_str("    ");
            }
            if row.has_children {
                output.push_str(if expanded { "- " } else { "+ " });
            }
            output.push_str(&row.text);
            output.push('\n');
        }
        output
    }

    fn rebuild(&mut self) {
        let _perf = PerfSpan::new(span_names::VIEW_REBUILD);
        self.rows.clear();
        let model = self.model.clone();
        self.collect(&*model, &ModelIndex::invalid(), 0);
        self.sync.stale.store(false, Ordering::SeqCst);
        tracing::debug!(target: targets::VIEW, rows = self.rows.len(), "view rows rebuilt");
    }

    fn collect(&mut self, model: &dyn ItemModel, parent: &ModelIndex, depth: usize) {
        for row in 0..model.row_count(parent) {
            let index = model.index(row, 0, parent);
            if !index.is_valid() {
                continue;
            }
            let has_children = model.has_children(&index);
            self.rows.push(FlattenedRow {
                index,
                depth,
                text: model.display_text(&index).unwrap_or_default(),
                has_children,
            });
            if has_children && self.expanded {
                self.collect(model, &index, depth + 1);
            }
        }
    }
}

impl Drop for ExpandedTreeView {
    fn drop(&mut self) {
        let signals = self.model.signals();
        signals.layout_about_to_change.disconnect(self.about_to_change_id);
        signals.layout_changed.disconnect(self.changed_id);
    }
}

impl std::fmt::Debug for ExpandedTreeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpandedTreeView")
            .field("rows", &self.rows.len())
            .field("expanded", &self.expanded)
            .field("stale", &self.is_stale())
            .finish()
    }
}
