//! Guessing rules.
//!
//! Column rules dispatch on the column's [`TypeCategory`]; relation rules on
//! the relation's cardinality. Boolean name rules override ambiguously typed
//! columns whose names read like flags (`is_active`, `enabled`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::form::{FieldType, FieldTypeSpec};
use crate::guess::{Confidence, Guess, TypeGuess};
use crate::metadata::{inflection, ColumnMetadata, RelationMetadata, SqlType, TypeCategory};

/// A boolean name pattern failed to compile.
#[derive(Debug, thiserror::Error)]
#[error("invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

static DEFAULT_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    BooleanNameRules::DEFAULT_PATTERNS
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
});

/// Name patterns that mark a column as a flag.
///
/// Patterns are matched against the snake-cased column name, so `isActive`
/// and `is_active` behave the same.
#[derive(Debug, Clone)]
pub struct BooleanNameRules {
    patterns: Vec<Regex>,
}

impl BooleanNameRules {
    pub const DEFAULT_PATTERNS: &'static [&'static str] = &[
        r"^(is|has|can|should|allow|allows)_",
        r"^(enabled|disabled|active|visible|hidden|published|deleted|locked|archived)$",
    ];

    /// Compile a set of patterns.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|source| PatternError {
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Rules that never match.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether a property or column name reads like a flag.
    pub fn matches(&self, name: &str) -> bool {
        let snake = inflection::to_column_name(inflection::strip_table_prefix(name));
        self.patterns.iter().any(|re| re.is_match(&snake))
    }

    /// Checkbox guess for a flag-named column with an ambiguous type.
    pub fn apply(&self, column: &ColumnMetadata) -> Option<TypeGuess> {
        if is_ambiguous_boolean(column) && self.matches(&column.name) {
            return Some(Guess::new(
                FieldTypeSpec::new(FieldType::Checkbox),
                Confidence::High,
            ));
        }
        None
    }
}

impl Default for BooleanNameRules {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_RULES.to_vec(),
        }
    }
}

/// Types that databases commonly use to store flags.
pub fn is_ambiguous_boolean(column: &ColumnMetadata) -> bool {
    match column.sql_type {
        SqlType::TinyInt => true,
        SqlType::Char | SqlType::Varchar => column.size == Some(1),
        _ => false,
    }
}

/// Model field guess for a relation.
pub fn relation_guess(relation: &RelationMetadata) -> TypeGuess {
    let spec = FieldTypeSpec::new(FieldType::Model)
        .with_option("class", relation.target.clone())
        .with_option("multiple", relation.kind.is_to_many());
    Guess::new(spec, Confidence::High)
}

/// Field guess for a column, from its declared type alone.
pub fn column_guess(column: &ColumnMetadata) -> TypeGuess {
    let (spec, confidence): (FieldTypeSpec, Confidence) = match column.sql_type.category() {
        TypeCategory::Boolean => (FieldType::Checkbox.into(), Confidence::High),
        TypeCategory::Integer => (FieldType::Integer.into(), Confidence::Medium),
        TypeCategory::Float => (FieldType::Number.into(), Confidence::Medium),
        TypeCategory::Timestamp | TypeCategory::Date => {
            (FieldType::DateTime.into(), Confidence::High)
        }
        TypeCategory::Time => (FieldType::Time.into(), Confidence::High),
        TypeCategory::Enum | TypeCategory::Text if !column.value_set.is_empty() => {
            (choice_spec(&column.value_set), Confidence::Medium)
        }
        TypeCategory::LongText => (FieldType::Textarea.into(), Confidence::Medium),
        TypeCategory::Text | TypeCategory::Enum | TypeCategory::Binary | TypeCategory::Opaque => {
            (FieldType::Text.into(), Confidence::Medium)
        }
    };
    Guess::new(spec, confidence)
}

fn choice_spec(values: &[String]) -> FieldTypeSpec {
    let choices: Map<String, Value> = values
        .iter()
        .map(|v| (v.clone(), Value::from(upper_first(v))))
        .collect();
    FieldTypeSpec::new(FieldType::Choice).with_option("choices", Value::Object(choices))
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
