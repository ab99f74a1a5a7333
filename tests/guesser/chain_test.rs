//! Combining explicit overrides with schema guesses.

use formguess::guesser::ExplicitGuesser;
use formguess::metadata::{CachedProvider, InMemorySchema};
use formguess::{Confidence, FieldType, FormTypeGuesser, Guess, GuesserChain, TypeGuess, TypeGuesser};

const ITEM: &str = r"App\Fixtures\Item";

fn schema() -> InMemorySchema {
    InMemorySchema::from_toml_str(include_str!("../fixtures/item_schema.toml"))
        .expect("fixture schema parses")
}

/// Answers every question with a fixed confidence.
struct FixedGuesser(Confidence);

impl FormTypeGuesser for FixedGuesser {
    fn guess_type(&self, _model: &str, _property: &str) -> Option<TypeGuess> {
        Some(Guess::new(FieldType::Textarea.into(), self.0))
    }

    fn guess_required(&self, _model: &str, _property: &str) -> Option<Guess<bool>> {
        Some(Guess::new(true, self.0))
    }

    fn guess_max_length(&self, _model: &str, _property: &str) -> Option<Guess<Option<u32>>> {
        Some(Guess::new(Some(10), self.0))
    }

    fn guess_pattern(&self, _model: &str, _property: &str) -> Option<Guess<Option<String>>> {
        Some(Guess::new(Some("[a-z]+".to_string()), self.0))
    }
}

#[test]
fn test_empty_chain_has_no_opinion() {
    let chain = GuesserChain::new();
    assert!(chain.is_empty());
    assert!(chain.guess_type(ITEM, "price").is_none());
    assert!(chain.guess_required(ITEM, "price").is_none());
}

#[test]
fn test_explicit_override_wins() {
    let chain = GuesserChain::new()
        .with(TypeGuesser::new(schema()))
        .with(ExplicitGuesser::new().with(ITEM, "price", FieldType::Integer));

    let guess = chain.guess_type(ITEM, "price").unwrap();
    assert_eq!(guess.field_type(), FieldType::Integer);
    assert_eq!(guess.confidence(), Confidence::VeryHigh);

    // Other questions still come from the schema.
    let max_length = chain.guess_max_length(ITEM, "price").unwrap();
    assert!(max_length.value().is_none());
}

#[test]
fn test_higher_confidence_wins() {
    let chain = GuesserChain::new()
        .with(TypeGuesser::new(schema()))
        .with(FixedGuesser(Confidence::Medium));

    // Schema answers High for timestamps, beating the fixed Medium guess.
    let updated = chain.guess_type(ITEM, "updated_at").unwrap();
    assert_eq!(updated.field_type(), FieldType::DateTime);

    // Unknown property: schema falls back to Low, the fixed guess wins.
    let unknown = chain.guess_type(ITEM, "property").unwrap();
    assert_eq!(unknown.field_type(), FieldType::Textarea);

    // Schema has no max length opinion on integers.
    let max_length = chain.guess_max_length(ITEM, "id").unwrap();
    assert_eq!(max_length.into_value(), Some(10));
}

#[test]
fn test_first_guesser_wins_ties() {
    let chain = GuesserChain::new()
        .with(TypeGuesser::new(schema()))
        .with(FixedGuesser(Confidence::High));

    // Both answer High; the schema was added first.
    let required = chain.guess_required(ITEM, "value").unwrap();
    assert!(!*required.value());

    let pattern = chain.guess_pattern(ITEM, "value").unwrap();
    assert_eq!(pattern.value().as_deref(), Some("[a-z]+"));
}

#[test]
fn test_cached_provider_gives_same_answers() {
    let plain = TypeGuesser::new(schema());
    let cached = TypeGuesser::new(CachedProvider::new(schema()));

    for property in ["id", "value", "price", "isActive", "Authors", "MainAuthor", "property"] {
        assert_eq!(
            plain.guess_type(ITEM, property),
            cached.guess_type(ITEM, property),
            "{}",
            property
        );
        assert_eq!(
            plain.guess_required(ITEM, property),
            cached.guess_required(ITEM, property)
        );
    }
    assert!(!cached.provider().is_empty());
}
