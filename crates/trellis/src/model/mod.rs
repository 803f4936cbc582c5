//! Model layer for Trellis.
//!
//! A model answers structural questions about a tree of items: how many
//! children a node has, which index names the child at a given row, which
//! node is the parent of an index, and what text a node displays. Views ask
//! these questions through [`ItemModel`] and never see the storage behind
//! it.
//!
//! # Core Types
//!
//! - `ModelIndex`: Epoch-stamped address of a node
//! - `ItemRole` / `ItemData`: What to read from a node, and the answer
//! - `ItemModel`: The trait views query
//! - `ModelSignals`: The layout-change bracket around every mutation
//!
//! # Implementations
//!
//! - `ItemStore`: Ordered item sequence plus its category set
//! - `GroupingModel`: Projects a store flat or grouped by category
//!
//! # Signal Order
//!
//! ```text
//! mutator ──> layout_about_to_change ──> (store + layout rebuilt) ──> layout_changed
//! ```
//!
//! Indices obtained before `layout_about_to_change` must not be used after
//! it; the model rejects them once the new epoch starts.

mod debug;
mod grouping_model;
mod index;
mod item_store;
mod role;
mod traits;

pub use debug::{ModelTreeDebug, TreeFormatOptions, TreeStyle};
pub use grouping_model::{GroupingMode, GroupingModel};
pub use index::{ModelIndex, NodeRef};
pub use item_store::{Item, ItemStore};
pub use role::{ItemData, ItemRole};
pub use traits::{ItemFlags, ItemModel, ModelSignals};
