//! Schema documents and provider lookups.

use formguess::metadata::{
    ColumnMetadata, InMemorySchema, RelationKind, RelationMetadata, SchemaError, SchemaProvider,
    SqlType, TableMetadata,
};

const ITEM: &str = r"App\Fixtures\Item";

fn fixture() -> InMemorySchema {
    InMemorySchema::from_toml_str(include_str!("../fixtures/item_schema.toml"))
        .expect("fixture schema parses")
}

#[test]
fn test_fixture_models() {
    let schema = fixture();
    assert_eq!(
        schema.models(),
        vec![r"App\Fixtures\Author", r"App\Fixtures\Item", r"App\Fixtures\Reseller"]
    );
}

#[test]
fn test_fixture_from_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/item_schema.toml");
    let schema = InMemorySchema::from_file(path).unwrap();
    assert_eq!(schema.len(), 3);
}

#[test]
fn test_column_metadata() {
    let schema = fixture();

    let status = schema.lookup_column(ITEM, "status").unwrap();
    assert_eq!(status.sql_type, SqlType::Enum);
    assert!(status.not_null);
    assert_eq!(status.value_set, vec!["draft", "published", "archived"]);

    let price = schema.lookup_column(ITEM, "item.price").unwrap();
    assert!(price.is_nullable());
    assert_eq!(price.size, None);
}

#[test]
fn test_table_prefix_must_name_the_model() {
    let schema = fixture();
    assert!(schema.lookup_column(ITEM, "author.price").is_none());
    assert!(schema.lookup_relation(ITEM, "reseller.Authors").is_none());
    assert!(schema.lookup_relation(ITEM, "item.Authors").is_some());
}

#[test]
fn test_relation_metadata() {
    let schema = fixture();

    let resellers = schema.lookup_relation(ITEM, "Resellers").unwrap();
    assert_eq!(resellers.kind, RelationKind::ManyToMany);
    assert_eq!(resellers.target, "Reseller");
    assert_eq!(resellers.property_name(), "Resellers");

    let main_author = schema.lookup_relation(ITEM, "mainauthor").unwrap();
    assert_eq!(main_author.kind, RelationKind::ManyToOne);
    assert!(!main_author.kind.is_to_many());
}

#[test]
fn test_unknown_model_and_property() {
    let schema = fixture();
    assert!(!schema.has_model(r"App\Fixtures\UnknownItem"));
    assert!(schema.lookup_column(r"App\Fixtures\UnknownItem", "id").is_none());
    assert!(schema.lookup_column(ITEM, "property").is_none());
    assert!(schema.lookup_relation(ITEM, "property").is_none());
}

#[test]
fn test_explicit_plural_name() {
    let table = TableMetadata::new("Shop").with_relation(
        RelationMetadata::new("Person", "Person", RelationKind::OneToMany)
            .with_plural_name("Staff"),
    );
    let schema = InMemorySchema::from_tables([table]).unwrap();

    assert!(schema.lookup_relation("Shop", "Staff").is_some());
    assert!(schema.lookup_relation("Shop", "People").is_none());
}

#[test]
fn test_explicit_php_name() {
    let table = TableMetadata::new("Shop").with_column(
        ColumnMetadata::new("shop_nm", SqlType::Varchar).with_php_name("Name"),
    );
    let schema = InMemorySchema::from_tables([table]).unwrap();

    assert!(schema.lookup_column("Shop", "name").is_some());
    assert!(schema.lookup_column("Shop", "shop_nm").is_some());
    assert!(schema.lookup_column("Shop", "shopNm").is_some());
}

#[test]
fn test_invalid_documents() {
    assert!(matches!(
        InMemorySchema::from_toml_str("[[models]]\ncolumns = 3"),
        Err(SchemaError::TomlError(_))
    ));
    assert!(matches!(
        InMemorySchema::from_json_str("{"),
        Err(SchemaError::JsonError(_))
    ));
}

#[test]
fn test_table_name() {
    let schema = fixture();
    let item = schema.table(ITEM).unwrap();
    assert_eq!(item.table_name(), "item");
    assert_eq!(item.primary_key().len(), 1);
}
