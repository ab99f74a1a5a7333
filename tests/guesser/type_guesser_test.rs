//! Schema-driven guessing against the item fixture.

use formguess::metadata::InMemorySchema;
use formguess::{Confidence, FieldType, TypeGuesser};
use insta::assert_snapshot;

const ITEM: &str = r"App\Fixtures\Item";
const UNKNOWN_ITEM: &str = r"App\Fixtures\UnknownItem";

fn guesser() -> TypeGuesser<InMemorySchema> {
    let schema = InMemorySchema::from_toml_str(include_str!("../fixtures/item_schema.toml"))
        .expect("fixture schema parses");
    TypeGuesser::new(schema)
}

// ============================================================================
// guess_max_length / guess_pattern
// ============================================================================

#[test]
fn test_guess_max_length_with_text() {
    let guess = guesser().guess_max_length(ITEM, "value").unwrap();
    assert_eq!(*guess.value(), Some(255));
    assert_eq!(guess.confidence(), Confidence::High);
}

#[test]
fn test_guess_max_length_with_float() {
    let guess = guesser().guess_max_length(ITEM, "price").unwrap();
    assert!(guess.value().is_none());
}

#[test]
fn test_guess_max_length_unknown_property() {
    assert!(guesser().guess_max_length(ITEM, "property").is_none());
    assert!(guesser().guess_max_length(UNKNOWN_ITEM, "value").is_none());
}

#[test]
fn test_guess_pattern_with_text() {
    assert!(guesser().guess_pattern(ITEM, "value").is_none());
}

#[test]
fn test_guess_pattern_with_float() {
    let guess = guesser().guess_pattern(ITEM, "price").unwrap();
    assert!(guess.value().is_none());
}

// ============================================================================
// guess_required
// ============================================================================

#[test]
fn test_guess_required() {
    let guess = guesser().guess_required(ITEM, "id").unwrap();
    assert!(*guess.value());
    assert_eq!(guess.confidence(), Confidence::High);
}

#[test]
fn test_guess_required_with_nullable_column() {
    let guess = guesser().guess_required(ITEM, "value").unwrap();
    assert!(!*guess.value());
}

#[test]
fn test_guess_required_unknown_property() {
    assert!(guesser().guess_required(ITEM, "property").is_none());
    assert!(guesser().guess_required(UNKNOWN_ITEM, "id").is_none());
}

// ============================================================================
// guess_type
// ============================================================================

#[test]
fn test_guess_type_without_table() {
    let guess = guesser().guess_type(UNKNOWN_ITEM, "property");
    assert_eq!(guess.field_type(), FieldType::Text);
    assert_eq!(guess.confidence(), Confidence::Low);
}

#[test]
fn test_guess_type_without_column() {
    let guess = guesser().guess_type(ITEM, "property");
    assert_eq!(guess.field_type(), FieldType::Text);
    assert_eq!(guess.confidence(), Confidence::Low);
}

#[test]
fn test_guess_type_columns() {
    let cases = [
        ("is_active", FieldType::Checkbox, Confidence::High),
        ("enabled", FieldType::Checkbox, Confidence::High),
        ("id", FieldType::Integer, Confidence::Medium),
        ("value", FieldType::Text, Confidence::Medium),
        ("price", FieldType::Number, Confidence::Medium),
        ("updated_at", FieldType::DateTime, Confidence::High),
        ("isActive", FieldType::Checkbox, Confidence::High),
        ("updatedAt", FieldType::DateTime, Confidence::High),
        ("description", FieldType::Textarea, Confidence::Medium),
        ("status", FieldType::Choice, Confidence::Medium),
        ("is_published", FieldType::Checkbox, Confidence::High),
        ("quantity", FieldType::Integer, Confidence::Medium),
    ];

    let guesser = guesser();
    for (property, field_type, confidence) in cases {
        let guess = guesser.guess_type(ITEM, property);
        assert_eq!(guess.field_type(), field_type, "type of {}", property);
        assert_eq!(guess.confidence(), confidence, "confidence of {}", property);
    }
}

#[test]
fn test_guess_type_relations() {
    let cases = [("Authors", true), ("Resellers", true), ("MainAuthor", false)];

    let guesser = guesser();
    for (property, multiple) in cases {
        let guess = guesser.guess_type(ITEM, property);
        assert_eq!(guess.field_type(), FieldType::Model, "type of {}", property);
        assert_eq!(guess.confidence(), Confidence::High, "confidence of {}", property);
        assert_eq!(guess.value().multiple(), Some(multiple), "multiple of {}", property);
    }
}

#[test]
fn test_guess_type_short_model_name() {
    let guess = guesser().guess_type("Item", "price");
    assert_eq!(guess.field_type(), FieldType::Number);
}

#[test]
fn test_guess_type_rendering() {
    let guesser = guesser();
    assert_snapshot!(
        guesser.guess_type(ITEM, "Authors").to_string(),
        @r#"model {"class":"Author","multiple":true} (high)"#
    );
    assert_snapshot!(
        guesser.guess_type(ITEM, "MainAuthor").to_string(),
        @r#"model {"class":"Author","multiple":false} (high)"#
    );
    assert_snapshot!(
        guesser.guess_type(ITEM, "status").to_string(),
        @r#"choice {"choices":{"archived":"Archived","draft":"Draft","published":"Published"}} (medium)"#
    );
    assert_snapshot!(guesser.guess_type(ITEM, "property").to_string(), @"text (low)");
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_price() {
    let guesser = guesser();

    let ty = guesser.guess_type(ITEM, "price");
    assert_eq!(ty.field_type(), FieldType::Number);
    assert_eq!(ty.confidence(), Confidence::Medium);

    assert!(!*guesser.guess_required(ITEM, "price").unwrap().value());
    assert!(guesser.guess_max_length(ITEM, "price").unwrap().value().is_none());
    assert!(guesser.guess_pattern(ITEM, "price").unwrap().value().is_none());
}

#[test]
fn test_scenario_value() {
    let guesser = guesser();

    let ty = guesser.guess_type(ITEM, "value");
    assert_eq!(ty.field_type(), FieldType::Text);
    assert_eq!(ty.confidence(), Confidence::Medium);

    assert_eq!(
        guesser.guess_max_length(ITEM, "value").unwrap().into_value(),
        Some(255)
    );
    assert!(guesser.guess_pattern(ITEM, "value").is_none());
}

#[test]
fn test_scenario_id() {
    let guesser = guesser();

    let ty = guesser.guess_type(ITEM, "id");
    assert_eq!(ty.field_type(), FieldType::Integer);
    assert_eq!(ty.confidence(), Confidence::Medium);
    assert!(*guesser.guess_required(ITEM, "id").unwrap().value());
}
