//! Trellis - switchable flat/grouped item models with stable addressing.
//!
//! The crate is layered the way a model/view toolkit is:
//!
//! - [`model`]: the item store, the grouping model and the index contract
//! - [`view`]: a headless tree view driven by the model's layout signals
//! - [`commands`]: validated add/remove/toggle entry points
//! - [`config`]: TOML configuration
//!
//! Signals and logging conventions live in `trellis-core` and are
//! re-exported here.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis::prelude::*;
//!
//! let model = Arc::new(GroupingModel::new());
//! let mut view = ExpandedTreeView::new(model.clone());
//!
//! model.add_item("Apple", "Fruit");
//! model.add_item("Carrot", "Veg");
//! model.toggle_grouping();
//!
//! assert_eq!(view.render(), "- Fruit\n    Apple\n- Veg\n    Carrot\n");
//! ```

pub use trellis_core::*;

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod view;
