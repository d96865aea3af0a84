use packlist_core::{Item, PackingApp, PackingStats, SortCriterion};

fn add(app: &mut PackingApp, description: &str, quantity: u32) -> u64 {
    app.form_mut().set_description(description);
    app.form_mut().set_quantity(quantity).unwrap();
    app.submit_entry().expect("valid entry should be added")
}

#[test]
fn submit_adds_items_with_unique_ids() {
    let mut app = PackingApp::new();
    let first = add(&mut app, "Passport", 1);
    let second = add(&mut app, "Socks", 6);
    let third = add(&mut app, "Socks", 6);

    assert_eq!(app.store().len(), 3);
    assert!(first != second && second != third && first != third);
    assert!(app.store().items().iter().all(|item| !item.packed));
}

#[test]
fn empty_submission_leaves_item_count_unchanged() {
    let mut app = PackingApp::new();
    add(&mut app, "Passport", 1);

    app.form_mut().set_description("");
    assert_eq!(app.submit_entry(), None);
    assert_eq!(app.store().len(), 1);
}

#[test]
fn edit_flow_updates_item_and_preserves_packed() {
    let mut app = PackingApp::new();
    let id = add(&mut app, "Hat", 1);
    add(&mut app, "Map", 1);
    assert!(app.toggle(id));

    assert!(app.request_edit(id));
    assert_eq!(app.form().description(), "Hat");
    app.form_mut().set_description("Sun Hat");
    app.form_mut().set_quantity(2).unwrap();
    assert_eq!(app.submit_entry(), Some(id));

    assert_eq!(
        app.store().get(id),
        Some(&Item {
            id,
            description: "Sun Hat".to_string(),
            quantity: 2,
            packed: true,
        })
    );
    assert_eq!(app.store().len(), 2);
    assert!(!app.form().is_updating());
    assert_eq!(app.form().description(), "");
    assert_eq!(app.form().quantity(), 1);
}

#[test]
fn request_edit_on_missing_item_is_noop() {
    let mut app = PackingApp::new();
    assert!(!app.request_edit(404));
    assert!(!app.form().is_updating());
}

#[test]
fn editing_a_deleted_item_does_not_resurrect_it() {
    let mut app = PackingApp::new();
    let id = add(&mut app, "Umbrella", 1);
    app.request_edit(id);
    app.delete(id);

    app.form_mut().set_description("Big umbrella");
    assert_eq!(app.submit_entry(), Some(id));
    assert!(app.store().is_empty());
    assert!(!app.form().is_updating());
}

#[test]
fn ids_are_not_reused_after_clear() {
    let mut app = PackingApp::new();
    let before = add(&mut app, "Tent", 1);
    app.clear();
    app.clear();
    assert!(app.store().is_empty());

    let after = add(&mut app, "Tent", 1);
    assert!(after > before);
}

#[test]
fn visible_items_follow_active_sort() {
    let mut app = PackingApp::new();
    let boots = add(&mut app, "boots", 1);
    let adapter = add(&mut app, "Adapter", 1);
    let camera = add(&mut app, "camera", 1);
    app.toggle(adapter);

    assert_eq!(app.sort(), SortCriterion::Input);
    app.set_sort(SortCriterion::Description);
    let view: Vec<u64> = app.visible_items().iter().map(|item| item.id).collect();
    assert_eq!(view, vec![adapter, boots, camera]);

    app.set_sort(SortCriterion::Packed);
    let view: Vec<u64> = app.visible_items().iter().map(|item| item.id).collect();
    assert_eq!(view, vec![boots, camera, adapter]);

    let stored: Vec<u64> = app.store().items().iter().map(|item| item.id).collect();
    assert_eq!(stored, vec![boots, adapter, camera]);
}

#[test]
fn stats_track_progress() {
    let mut app = PackingApp::new();
    assert_eq!(app.stats(), PackingStats::Empty);

    let ids: Vec<u64> = ["a", "b", "c", "d"]
        .iter()
        .map(|description| add(&mut app, description, 1))
        .collect();
    app.toggle(ids[0]);
    app.toggle(ids[3]);

    assert_eq!(
        app.stats(),
        PackingStats::Summary {
            total: 4,
            packed: 2,
            percentage: 50,
        }
    );
}
