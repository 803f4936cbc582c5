//! Model index for addressing nodes in hierarchical models.
//!
//! A `ModelIndex` is a small `Copy` value: a position (`row`, `column`), a
//! tagged reference to the node it resolves to, and the layout epoch it
//! was issued in. It never borrows model data, so holding one across a
//! mutation cannot dangle; the model instead refuses to resolve indices
//! from an earlier epoch.

use std::fmt;

/// Tagged reference to the node an index resolves to.
///
/// The payload is an arena-style position, looked up again by the model on
/// every query:
///
/// - `Category(k)`: position `k` in the epoch's category snapshot
/// - `Item(i)`: position `i` in the item store's sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum NodeRef {
    /// The invisible root. Also used for the invalid (null) index.
    #[default]
    Root,
    /// A level-0 grouping node.
    Category(usize),
    /// A leaf that references a concrete item.
    Item(usize),
}

impl NodeRef {
    /// Returns `true` for [`NodeRef::Category`].
    #[inline]
    pub fn is_category(&self) -> bool {
        matches!(self, NodeRef::Category(_))
    }

    /// Returns `true` for [`NodeRef::Item`].
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, NodeRef::Item(_))
    }
}

/// Represents a position within an `ItemModel`.
///
/// `ModelIndex` is used by views and command glue to locate nodes within a
/// model. Each index contains:
/// - Row and column within the parent
/// - A [`NodeRef`] naming the node
/// - The layout epoch the index was issued in
///
/// # Index Validity
///
/// Model indices are valid only until the model's next layout change.
/// After any mutation or grouping toggle, previously obtained indices are
/// rejected by the model and behave like [`ModelIndex::invalid`].
///
/// # Example
///
/// ```ignore
/// use trellis::model::{ItemModel, ModelIndex};
///
/// // Get a root-level node
/// let index = model.index(0, 0, &ModelIndex::invalid());
///
/// // Get its first child
/// let child = model.index(0, 0, &index);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    node: NodeRef,
    epoch: u64,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// An invalid index is used to represent:
    /// - The root of the model (as a parent reference)
    /// - A non-existent or out-of-bounds node
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            node: NodeRef::Root,
            epoch: 0,
        }
    }

    /// Creates a new index.
    ///
    /// Models call this when answering `index` and `parent` queries; the
    /// result is invalid when `node` is [`NodeRef::Root`].
    #[inline]
    pub const fn new(row: usize, column: usize, node: NodeRef, epoch: u64) -> Self {
        match node {
            NodeRef::Root => Self::invalid(),
            _ => Self {
                row,
                column,
                node,
                epoch,
            },
        }
    }

    /// Returns `true` if this index addresses a node.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.node != NodeRef::Root
    }

    /// Returns the row of this index within its parent.
    ///
    /// Returns 0 for invalid indices.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this index within its parent.
    ///
    /// Returns 0 for invalid indices.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the node this index refers to.
    #[inline]
    pub fn node(&self) -> NodeRef {
        self.node
    }

    /// Returns the layout epoch this index was issued in.
    ///
    /// Returns 0 for invalid indices.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns `true` if this index addresses a category node.
    #[inline]
    pub fn is_category(&self) -> bool {
        self.node.is_category()
    }

    /// Returns `true` if this index addresses an item leaf.
    #[inline]
    pub fn is_item(&self) -> bool {
        self.node.is_item()
    }
}

impl fmt::Debug for ModelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.debug_struct("ModelIndex")
                .field("row", &self.row)
                .field("column", &self.column)
                .field("node", &self.node)
                .field("epoch", &self.epoch)
                .finish()
        } else {
            write!(f, "ModelIndex(invalid)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::invalid();
        assert!(!index.is_valid());
        assert_eq!(index.row(), 0);
        assert_eq!(index.column(), 0);
        assert_eq!(index.node(), NodeRef::Root);
        assert_eq!(index, ModelIndex::default());
    }

    #[test]
    fn test_valid_index() {
        let index = ModelIndex::new(5, 0, NodeRef::Item(7), 3);
        assert!(index.is_valid());
        assert!(index.is_item());
        assert!(!index.is_category());
        assert_eq!(index.row(), 5);
        assert_eq!(index.epoch(), 3);
    }

    #[test]
    fn test_root_node_is_always_invalid() {
        let index = ModelIndex::new(4, 2, NodeRef::Root, 9);
        assert!(!index.is_valid());
        assert_eq!(index, ModelIndex::invalid());
    }

    #[test]
    fn test_equality_includes_epoch() {
        let a = ModelIndex::new(1, 0, NodeRef::Category(1), 1);
        let b = ModelIndex::new(1, 0, NodeRef::Category(1), 2);
        assert_ne!(a, b);
        assert_eq!(a, ModelIndex::new(1, 0, NodeRef::Category(1), 1));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", ModelIndex::invalid()), "ModelIndex(invalid)");
        let index = ModelIndex::new(0, 0, NodeRef::Category(0), 1);
        assert!(format!("{index:?}").contains("Category(0)"));
    }
}
