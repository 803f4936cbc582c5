//! Text rendering of model trees for debugging.
//!
//! [`ModelTreeDebug`] walks any [`ItemModel`] through its public contract
//! (`row_count`, `index`, `display_text`) and prints the result, so the
//! output shows exactly what a view would see.
//!
//! ```
//! use trellis::model::{GroupingModel, ModelTreeDebug, TreeFormatOptions, TreeStyle};
//!
//! let model = GroupingModel::new();
//! model.add_item("Apple", "Fruit");
//! model.toggle_grouping();
//!
//! let debug = ModelTreeDebug::with_options(TreeFormatOptions {
//!     style: TreeStyle::Ascii,
//!     ..Default::default()
//! });
//! assert_eq!(debug.format(&model), "Fruit\n+-- Apple\n");
//! ```

use serde::{Deserialize, Serialize};

use super::index::ModelIndex;
use super::traits::ItemModel;

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact, indentation-free dashes.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to append `[row]` after each label.
    pub show_rows: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_rows: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_rows: true,
            ..Default::default()
        }
    }
}

/// Debug utility for printing a model as a tree.
#[derive(Debug, Clone, Default)]
pub struct ModelTreeDebug {
    options: TreeFormatOptions,
}

impl ModelTreeDebug {
    /// Create a debug printer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug printer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Create a debug printer using `style` and default options otherwise.
    pub fn with_style(style: TreeStyle) -> Self {
        Self::with_options(TreeFormatOptions {
            style,
            ..Default::default()
        })
    }

    /// Format the whole model. An empty model formats as `"(empty)\n"`.
    pub fn format(&self, model: &dyn ItemModel) -> String {
        let root = ModelIndex::invalid();
        let mut output = String::new();
        if model.row_count(&root) == 0 {
            output.push_str("(empty)\n");
            return output;
        }
        self.format_children(model, &root, 0, &mut Vec::new(), &mut output);
        output
    }

    /// `ancestors` holds, for each ancestor below the top level, whether it
    /// was the last child of its parent.
    fn format_children(
        &self,
        model: &dyn ItemModel,
        parent: &ModelIndex,
        depth: usize,
        ancestors: &mut Vec<bool>,
        output: &mut String,
    ) {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        let rows = model.row_count(parent);
        for row in 0..rows {
            let index = model.index(row, 0, parent);
            if !index.is_valid() {
                continue;
            }
            let is_last = row + 1 == rows;
            output.push_str(&self.build_prefix(ancestors, depth, is_last));
            output.push_str(model.display_text(&index).as_deref().unwrap_or("(unnamed)"));
            if self.options.show_rows {
                output.push_str(&format!(" [{}]", index.row()));
            }
            output.push('\n');

            if depth == 0 {
                self.format_children(model, &index, depth + 1, ancestors, output);
            } else {
                ancestors.push(is_last);
                self.format_children(model, &index, depth + 1, ancestors, output);
                ancestors.pop();
            }
        }
    }

    /// Build the prefix string for a node at `depth`.
    ///
    /// Ancestors that were last children get blank space instead of a
    /// continuation branch.
    fn build_prefix(&self, ancestors: &[bool], depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+-- ", "+-- "),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} "),
            TreeStyle::Compact => ("", "- ", "- "),
        };

        let indent = " ".repeat(self.options.indent_size);
        let mut prefix = String::new();
        for &ancestor_was_last in ancestors {
            if ancestor_was_last {
                prefix.push_str(&" ".repeat(branch.chars().count()));
            } else {
                prefix.push_str(branch);
            }
            prefix.push_str(&indent);
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupingModel, ItemData, ItemRole, ModelSignals, NodeRef};

    /// Fixed tree of `(name, parent)` nodes, for depths the grouping model
    /// never reaches.
    struct FixedTree {
        nodes: Vec<(&'static str, Option<usize>)>,
        signals: ModelSignals,
    }

    impl FixedTree {
        fn new(nodes: Vec<(&'static str, Option<usize>)>) -> Self {
            Self {
                nodes,
                signals: ModelSignals::new(),
            }
        }

        fn children(&self, parent: Option<usize>) -> impl Iterator<Item = usize> + '_ {
            (0..self.nodes.len()).filter(move |&id| self.nodes[id].1 == parent)
        }

        fn node_id(index: &ModelIndex) -> Option<usize> {
            match index.node() {
                NodeRef::Item(id) => Some(id),
                _ => None,
            }
        }
    }

    impl ItemModel for FixedTree {
        fn row_count(&self, parent: &ModelIndex) -> usize {
            self.children(Self::node_id(parent)).count()
        }

        fn column_count(&self, _parent: &ModelIndex) -> usize {
            1
        }

        fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
            match (Self::node_id(index), role) {
                (Some(id), ItemRole::Display) => ItemData::from(self.nodes[id].0),
                _ => ItemData::None,
            }
        }

        fn index(&self, row: usize, _column: usize, parent: &ModelIndex) -> ModelIndex {
            self.children(Self::node_id(parent))
                .nth(row)
                .map_or_else(ModelIndex::invalid, |id| {
                    ModelIndex::new(row, 0, NodeRef::Item(id), 1)
                })
        }

        fn parent(&self, index: &ModelIndex) -> ModelIndex {
            let Some(parent) = Self::node_id(index).and_then(|id| self.nodes[id].1) else {
                return ModelIndex::invalid();
            };
            let grandparent = self.nodes[parent].1;
            let row = self
                .children(grandparent)
                .position(|id| id == parent)
                .unwrap_or(0);
            ModelIndex::new(row, 0, NodeRef::Item(parent), 1)
        }

        fn signals(&self) -> &ModelSignals {
            &self.signals
        }
    }

    fn produce() -> GroupingModel {
        let model = GroupingModel::new();
        model.add_item("Apple", "Fruit");
        model.add_item("Carrot", "Veg");
        model.add_item("Banana", "Fruit");
        model
    }

    #[test]
    fn test_format_empty() {
        let model = GroupingModel::new();
        assert_eq!(ModelTreeDebug::new().format(&model), "(empty)\n");
    }

    #[test]
    fn test_format_flat() {
        let model = produce();
        let output = ModelTreeDebug::with_style(TreeStyle::Ascii).format(&model);
        assert_eq!(output, "Apple\nCarrot\nBanana\n");
    }

    #[test]
    fn test_format_grouped_unicode() {
        let model = produce();
        model.toggle_grouping();
        let output = ModelTreeDebug::new().format(&model);
        assert_eq!(
            output,
            "Fruit\n\u{251c}\u{2500}\u{2500} Apple\n\u{2514}\u{2500}\u{2500} Banana\nVeg\n\u{2514}\u{2500}\u{2500} Carrot\n"
        );
    }

    #[test]
    fn test_format_deep_tree_continuation() {
        let tree = FixedTree::new(vec![
            ("root", None),
            ("a", Some(0)),
            ("a1", Some(1)),
            ("b", Some(0)),
            ("b1", Some(3)),
            ("b1x", Some(4)),
        ]);
        let output = ModelTreeDebug::with_style(TreeStyle::Ascii).format(&tree);
        assert_eq!(
            output,
            "root\n+-- a\n|  +-- a1\n+-- b\n   +-- b1\n      +-- b1x\n"
        );
    }

    #[test]
    fn test_format_max_depth() {
        let model = produce();
        model.toggle_grouping();
        let debug = ModelTreeDebug::with_options(TreeFormatOptions {
            max_depth: Some(0),
            ..TreeFormatOptions::detailed()
        });
        assert_eq!(debug.format(&model), "Fruit [0]\nVeg [1]\n");
    }
}
