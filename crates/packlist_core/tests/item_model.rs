use packlist_core::{Item, ItemValidationError, SortCriterion, QUANTITY_MAX, QUANTITY_MIN};

#[test]
fn item_new_starts_unpacked() {
    let item = Item::new(42, "Sunglasses", 2);

    assert_eq!(item.id, 42);
    assert_eq!(item.description, "Sunglasses");
    assert_eq!(item.quantity, 2);
    assert!(!item.packed);
    assert!(item.validate().is_ok());
}

#[test]
fn quantity_bounds_match_form_range() {
    assert_eq!(QUANTITY_MIN, 1);
    assert_eq!(QUANTITY_MAX, 20);
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let mut item = Item::new(7, "Hat", 1);
    item.packed = true;

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 7,
            "description": "Hat",
            "quantity": 1,
            "packed": true
        })
    );

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn validation_errors_have_readable_messages() {
    assert_eq!(
        ItemValidationError::EmptyDescription.to_string(),
        "item description cannot be empty"
    );
    assert!(ItemValidationError::QuantityOutOfRange(0)
        .to_string()
        .contains("1..=20"));
}

#[test]
fn sort_criterion_serializes_as_lowercase_name() {
    let json = serde_json::to_value(SortCriterion::Description).unwrap();
    assert_eq!(json, "description");
    let decoded: SortCriterion = serde_json::from_value(serde_json::json!("packed")).unwrap();
    assert_eq!(decoded, SortCriterion::Packed);
}
