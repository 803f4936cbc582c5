//! Tests for the grouping model's structural contract.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use trellis::model::{GroupingMode, GroupingModel, Item, ItemModel, ModelIndex};

fn root() -> ModelIndex {
    ModelIndex::invalid()
}

fn produce() -> GroupingModel {
    let model = GroupingModel::new();
    model.add_item("Apple", "Fruit");
    model.add_item("Carrot", "Veg");
    model.add_item("Banana", "Fruit");
    model
}

/// Children of `parent`, as display text.
fn child_texts(model: &GroupingModel, parent: &ModelIndex) -> Vec<String> {
    (0..model.row_count(parent))
        .map(|row| {
            let index = model.index(row, 0, parent);
            model.display_text(&index).unwrap_or_default()
        })
        .collect()
}

fn assert_category_set_matches_items(model: &GroupingModel) {
    let derived: HashSet<String> = model.items().into_iter().map(|i| i.category).collect();
    let tracked: HashSet<String> =
        model.with_store(|store| store.categories().map(str::to_string).collect());
    assert_eq!(tracked, derived);
    let snapshot: HashSet<String> = model.categories().into_iter().collect();
    assert_eq!(snapshot, derived);
}

#[test]
fn test_category_set_tracks_items_through_mutations() {
    let model = GroupingModel::new();
    assert_category_set_matches_items(&model);

    let steps: [(&str, Option<&str>); 8] = [
        ("Apple", Some("Fruit")),
        ("Carrot", Some("Veg")),
        ("Banana", Some("Fruit")),
        ("Apple", None),
        ("Steak", Some("Meat")),
        ("Carrot", None),
        ("Ghost", None),
        ("Banana", None),
    ];
    for (name, category) in steps {
        match category {
            Some(category) => model.add_item(name, category),
            None => {
                model.remove_item(name);
            }
        }
        assert_category_set_matches_items(&model);
    }
    assert_eq!(model.categories(), vec!["Meat"]);
}

#[test]
fn test_grouped_row_counts_sum_to_item_count() {
    let model = produce();
    model.add_item("Steak", "Meat");
    model.add_item("Leek", "Veg");
    model.toggle_grouping();

    let total: usize = (0..model.row_count(&root()))
        .map(|row| model.row_count(&model.index(row, 0, &root())))
        .sum();
    assert_eq!(total, model.item_count());
}

#[test]
fn test_parent_round_trip() {
    let model = produce();
    model.add_item("Leek", "Veg");
    model.toggle_grouping();

    for category_row in 0..model.row_count(&root()) {
        let category = model.index(category_row, 0, &root());
        for row in 0..model.row_count(&category) {
            let leaf = model.index(row, 0, &category);
            let parent = model.parent(&leaf);
            assert_eq!(parent, category);

            let again = model.index(leaf.row(), 0, &parent);
            assert_eq!(again, leaf);
            assert_eq!(model.item(&again), model.item(&leaf));
        }
    }
}

#[test]
fn test_double_toggle_restores_mode_and_counts() {
    let model = produce();
    let before: Vec<usize> = (0..model.row_count(&root()))
        .map(|row| model.row_count(&model.index(row, 0, &root())))
        .collect();
    let root_before = model.row_count(&root());

    model.toggle_grouping();
    model.toggle_grouping();

    assert_eq!(model.grouping_mode(), GroupingMode::Flat);
    assert_eq!(model.row_count(&root()), root_before);
    let after: Vec<usize> = (0..model.row_count(&root()))
        .map(|row| model.row_count(&model.index(row, 0, &root())))
        .collect();
    assert_eq!(after, before);
}

#[test]
fn test_ordering_stable_within_epoch() {
    let model = produce();
    model.add_item("Steak", "Meat");
    model.toggle_grouping();

    let first: Vec<ModelIndex> = (0..model.row_count(&root()))
        .map(|row| model.index(row, 0, &root()))
        .collect();
    for _ in 0..10 {
        let again: Vec<ModelIndex> = (0..model.row_count(&root()))
            .map(|row| model.index(row, 0, &root()))
            .collect();
        assert_eq!(again, first);
    }
    // First-appearance order in the item sequence.
    assert_eq!(child_texts(&model, &root()), vec!["Fruit", "Veg", "Meat"]);
}

#[test]
fn test_produce_scenario() {
    let model = produce();
    assert_eq!(model.row_count(&root()), 3);

    model.toggle_grouping();
    assert_eq!(model.row_count(&root()), 2);

    let fruit = model.index_of_category("Fruit");
    assert_eq!(model.row_count(&fruit), 2);
    assert_eq!(child_texts(&model, &fruit), vec!["Apple", "Banana"]);

    model.remove_item("Apple");
    let fruit = model.index_of_category("Fruit");
    assert_eq!(model.row_count(&fruit), 1);

    model.remove_item("Banana");
    assert!(!model.categories().contains(&"Fruit".to_string()));
    assert!(!model.index_of_category("Fruit").is_valid());
    assert_eq!(model.row_count(&root()), 1);
    assert_eq!(child_texts(&model, &root()), vec!["Veg"]);
}

#[test]
fn test_remove_missing_name_leaves_store_unchanged() {
    for grouped in [false, true] {
        let model = produce();
        if grouped {
            model.toggle_grouping();
        }
        let items = model.items();
        let categories = model.categories();

        assert_eq!(model.remove_item("Ghost"), None);
        assert_eq!(model.items(), items);
        assert_eq!(model.categories(), categories);
    }
}

#[test]
fn test_duplicate_names_remove_first_inserted() {
    let model = GroupingModel::new();
    model.add_item("X", "A");
    model.add_item("X", "B");

    assert_eq!(model.remove_item("X"), Some(Item::new("X", "A")));

    model.toggle_grouping();
    assert_eq!(model.categories(), vec!["B"]);
    let b = model.index_of_category("B");
    let leaf = model.index(0, 0, &b);
    assert_eq!(model.item(&leaf), Some(Item::new("X", "B")));
}

#[test]
fn test_indices_from_previous_epoch_are_rejected() {
    let model = produce();
    model.toggle_grouping();
    let fruit = model.index(0, 0, &root());
    let apple = model.index(0, 0, &fruit);

    model.add_item("Leek", "Veg");

    assert_eq!(model.row_count(&fruit), 0);
    assert!(!model.index(0, 0, &fruit).is_valid());
    assert!(!model.parent(&apple).is_valid());
    assert!(model.display_text(&apple).is_none());
    assert!(!model.has_children(&fruit));
}

#[test]
fn test_layout_signals_bracket_every_mutation() {
    let model = Arc::new(GroupingModel::new());
    let events = Arc::new(Mutex::new(Vec::new()));

    let log = events.clone();
    let observed = model.clone();
    model.signals().layout_about_to_change.connect(move |_| {
        log.lock().push(("about", observed.epoch()));
    });
    let log = events.clone();
    let observed = model.clone();
    model.signals().layout_changed.connect(move |_| {
        // The model is readable from inside the slot.
        log.lock()
            .push(("changed", observed.row_count(&ModelIndex::invalid()) as u64));
    });

    model.add_item("Apple", "Fruit");
    model.toggle_grouping();
    model.remove_item("Ghost");

    let events = events.lock().clone();
    assert_eq!(
        events,
        vec![
            ("about", 1),
            ("changed", 1),
            ("about", 2),
            ("changed", 1),
            ("about", 3),
            ("changed", 1),
        ]
    );
    assert_eq!(model.epoch(), 4);
}

#[test]
fn test_empty_strings_accepted_by_model() {
    let model = GroupingModel::new();
    model.add_item("", "");
    model.toggle_grouping();

    let category = model.index(0, 0, &root());
    assert_eq!(model.display_text(&category).as_deref(), Some(""));
    assert_eq!(model.row_count(&category), 1);
}
