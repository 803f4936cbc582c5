//! Flat storage for named, categorized items.
//!
//! `ItemStore` owns the item sequence and the set of distinct categories
//! derived from it. It knows nothing about rows, parents or grouping; the
//! [`GroupingModel`](super::GroupingModel) projects it into a tree.

use std::collections::HashMap;

use trellis_core::logging::targets;

/// A named, categorized record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Category the item is grouped under.
    pub category: String,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Ordered item sequence plus the derived category set.
///
/// Insertion order is the canonical iteration order. The category set
/// always equals `{ item.category : item in items }`: it is updated on
/// every add and remove, never recomputed lazily.
///
/// The store performs no validation; empty names and categories are
/// accepted as-is. Rejecting them is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    /// Member count per category. A category is present iff its count is > 0.
    categories: HashMap<String, usize>,
}

impl ItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the end of the sequence.
    ///
    /// The item's category joins the category set if it was absent.
    pub fn add(&mut self, name: impl Into<String>, category: impl Into<String>) {
        let item = Item::new(name, category);
        *self.categories.entry(item.category.clone()).or_insert(0) += 1;
        tracing::debug!(
            target: targets::STORE,
            name = %item.name,
            category = %item.category,
            position = self.items.len(),
            "item added"
        );
        self.items.push(item);
    }

    /// Removes the first item (in insertion order) whose name equals `name`.
    ///
    /// Only one item is removed even when several share the name. Returns
    /// the removed item, or `None` when no item has that name. If the
    /// removed item was the last member of its category, the category
    /// leaves the category set.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let Some(position) = self.position_of(name) else {
            tracing::trace!(target: targets::STORE, name, "remove: no such item");
            return None;
        };
        let item = self.items.remove(position);

        if let Some(count) = self.categories.get_mut(&item.category) {
            *count -= 1;
            if *count == 0 {
                self.categories.remove(&item.category);
                tracing::debug!(
                    target: targets::STORE,
                    category = %item.category,
                    "category emptied"
                );
            }
        }

        tracing::debug!(
            target: targets::STORE,
            name = %item.name,
            category = %item.category,
            position,
            "item removed"
        );
        Some(item)
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.categories.clear();
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the distinct categories.
    ///
    /// Enumeration order is unspecified and may differ between calls on
    /// different store states. Callers that need positions must build
    /// their own ordered snapshot.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if at least one item belongs to `category`.
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Returns the number of items in `category`.
    pub fn category_len(&self, category: &str) -> usize {
        self.categories.get(category).copied().unwrap_or(0)
    }

    /// Iterates the items of `category`, preserving insertion order.
    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Iterates `(position, item)` pairs for `category`, preserving insertion order.
    ///
    /// `position` indexes into [`items`](Self::items).
    pub fn positions_in<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Item)> + 'a {
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, item)| item.category == category)
    }

    /// Returns the position of the first item named `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }
}
