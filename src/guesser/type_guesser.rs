//! Schema-driven type guesser.

use tracing::debug;

use super::rules::{self, BooleanNameRules};
use super::FormTypeGuesser;
use crate::config::{Settings, SettingsError};
use crate::form::{FieldType, FieldTypeSpec};
use crate::guess::{Confidence, Guess, TypeGuess};
use crate::metadata::{CachedProvider, SchemaProvider};

/// Guesses form fields from the schema metadata of a model.
///
/// Every operation is a pure function of `(model, property)` and the
/// provider's answers. Unknown models and properties never fail: type guesses
/// fall back to a low-confidence text field, value guesses to `None`.
#[derive(Debug, Clone)]
pub struct TypeGuesser<P> {
    provider: P,
    boolean_names: BooleanNameRules,
}

impl<P: SchemaProvider> TypeGuesser<P> {
    /// Create a guesser with the default boolean name rules.
    pub fn new(provider: P) -> Self {
        Self::with_rules(provider, BooleanNameRules::default())
    }

    pub fn with_rules(provider: P, boolean_names: BooleanNameRules) -> Self {
        Self {
            provider,
            boolean_names,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Guess the form field type of a property.
    ///
    /// Relations are checked first, then columns. Flag-named columns with an
    /// ambiguous type become checkboxes before the type rules run.
    pub fn guess_type(&self, model: &str, property: &str) -> TypeGuess {
        if let Some(relation) = self.provider.lookup_relation(model, property) {
            debug!(model, property, kind = %relation.kind, "relation guess");
            return rules::relation_guess(&relation);
        }

        let Some(column) = self.provider.lookup_column(model, property) else {
            debug!(model, property, "no metadata, falling back to text");
            return Guess::new(FieldTypeSpec::new(FieldType::Text), Confidence::Low);
        };

        if let Some(guess) = self.boolean_names.apply(&column) {
            debug!(model, property, sql_type = ?column.sql_type, "boolean name override");
            return guess;
        }

        let guess = rules::column_guess(&column);
        debug!(model, property, sql_type = ?column.sql_type, %guess, "column guess");
        guess
    }

    /// Guess whether a property is required: `true` iff its column is NOT NULL.
    pub fn guess_required(&self, model: &str, property: &str) -> Option<Guess<bool>> {
        let column = self.provider.lookup_column(model, property)?;
        Some(Guess::new(column.not_null, Confidence::High))
    }

    /// Guess the maximum length of a property.
    ///
    /// Text columns yield their declared size. Float columns yield a guess
    /// whose value is `None`: no length constraint applies.
    pub fn guess_max_length(&self, model: &str, property: &str) -> Option<Guess<Option<u32>>> {
        let column = self.provider.lookup_column(model, property)?;
        if column.sql_type.is_text() {
            return Some(Guess::new(column.size, Confidence::High));
        }
        if column.sql_type.is_float() {
            return Some(Guess::new(None, Confidence::Medium));
        }
        None
    }

    /// Guess a client-side validation pattern.
    ///
    /// Only float columns are considered, and no pattern can be derived for
    /// them, so the guess carries `None`. Everything else yields no guess.
    pub fn guess_pattern(&self, model: &str, property: &str) -> Option<Guess<Option<String>>> {
        let column = self.provider.lookup_column(model, property)?;
        if column.sql_type.is_float() {
            return Some(Guess::new(None, Confidence::Medium));
        }
        None
    }
}

impl TypeGuesser<Box<dyn SchemaProvider>> {
    /// Build a guesser from settings: loads the configured schema, wraps it in
    /// a cache when enabled, and compiles the boolean name rules.
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        let schema = settings.schema.load_schema()?;
        let provider: Box<dyn SchemaProvider> = if settings.schema.cache {
            Box::new(CachedProvider::new(schema))
        } else {
            Box::new(schema)
        };
        let boolean_names = settings.guesser.boolean_name_rules()?;
        Ok(Self::with_rules(provider, boolean_names))
    }
}

impl<P: SchemaProvider> FormTypeGuesser for TypeGuesser<P> {
    fn guess_type(&self, model: &str, property: &str) -> Option<TypeGuess> {
        Some(TypeGuesser::guess_type(self, model, property))
    }

    fn guess_required(&self, model: &str, property: &str) -> Option<Guess<bool>> {
        TypeGuesser::guess_required(self, model, property)
    }

    fn guess_max_length(&self, model: &str, property: &str) -> Option<Guess<Option<u32>>> {
        TypeGuesser::guess_max_length(self, model, property)
    }

    fn guess_pattern(&self, model: &str, property: &str) -> Option<Guess<Option<String>>> {
        TypeGuesser::guess_pattern(self, model, property)
    }
}
