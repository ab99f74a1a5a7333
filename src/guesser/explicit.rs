//! User-defined field types.
//!
//! An [`ExplicitGuesser`] answers only for properties it was configured with,
//! always at [`Confidence::VeryHigh`], so it wins any [`GuesserChain`](super::GuesserChain)
//! it is part of.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::FormTypeGuesser;
use crate::form::{FieldType, FieldTypeSpec};
use crate::guess::{Confidence, Guess, TypeGuess};
use crate::metadata::inflection;

/// One configured field type.
///
/// ```toml
/// [[guesser.overrides]]
/// model = "Item"
/// property = "price"
/// type = "integer"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldOverride {
    pub model: String,
    pub property: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl FieldOverride {
    fn spec(&self) -> FieldTypeSpec {
        self.options
            .iter()
            .fold(FieldTypeSpec::new(self.field_type), |spec, (k, v)| {
                spec.with_option(k.clone(), v.clone())
            })
    }
}

/// Guesser backed by explicit per-property field types.
#[derive(Debug, Clone, Default)]
pub struct ExplicitGuesser {
    fields: HashMap<(String, String), FieldTypeSpec>,
}

// Models are keyed by short name so `App\Fixtures\Item` and `Item` agree.
fn key(model: &str, property: &str) -> (String, String) {
    (
        inflection::short_model_name(model).to_lowercase(),
        inflection::strip_table_prefix(property).to_lowercase(),
    )
}

impl ExplicitGuesser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a property's field type. Replaces an earlier entry.
    pub fn set(&mut self, model: &str, property: &str, spec: impl Into<FieldTypeSpec>) {
        self.fields.insert(key(model, property), spec.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, model: &str, property: &str, spec: impl Into<FieldTypeSpec>) -> Self {
        self.set(model, property, spec);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> FromIterator<&'a FieldOverride> for ExplicitGuesser {
    fn from_iter<I: IntoIterator<Item = &'a FieldOverride>>(iter: I) -> Self {
        let mut guesser = Self::new();
        for o in iter {
            guesser.set(&o.model, &o.property, o.spec());
        }
        guesser
    }
}

impl FormTypeGuesser for ExplicitGuesser {
    fn guess_type(&self, model: &str, property: &str) -> Option<TypeGuess> {
        self.fields
            .get(&key(model, property))
            .map(|spec| Guess::new(spec.clone(), Confidence::VeryHigh))
    }

    fn guess_required(&self, _model: &str, _property: &str) -> Option<Guess<bool>> {
        None
    }

    fn guess_max_length(&self, _model: &str, _property: &str) -> Option<Guess<Option<u32>>> {
        None
    }

    fn guess_pattern(&self, _model: &str, _property: &str) -> Option<Guess<Option<String>>> {
        None
    }
}
