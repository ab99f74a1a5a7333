//! Form field types proposed by the guessers.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The closed set of form field types a guesser can propose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Checkbox,
    Integer,
    Number,
    #[serde(rename = "datetime", alias = "date_time")]
    DateTime,
    Time,
    Choice,
    /// Select one or many related model instances.
    Model,
}

impl FieldType {
    /// Registry name of the field type.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Checkbox => "checkbox",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::DateTime => "datetime",
            FieldType::Time => "time",
            FieldType::Choice => "choice",
            FieldType::Model => "model",
        }
    }

    /// Parse a field type from its registry name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(FieldType::Text),
            "textarea" => Some(FieldType::Textarea),
            "checkbox" => Some(FieldType::Checkbox),
            "integer" => Some(FieldType::Integer),
            "number" => Some(FieldType::Number),
            "datetime" | "date_time" => Some(FieldType::DateTime),
            "time" => Some(FieldType::Time),
            "choice" => Some(FieldType::Choice),
            "model" => Some(FieldType::Model),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field type together with the options the form should be built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTypeSpec {
    field_type: FieldType,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    options: Map<String, Value>,
}

impl FieldTypeSpec {
    /// A field type without options.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            options: Map::new(),
        }
    }

    /// Add an option (builder style).
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Look up a single option.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// The `multiple` option of a model field, if set.
    pub fn multiple(&self) -> Option<bool> {
        self.options.get("multiple").and_then(Value::as_bool)
    }
}

impl From<FieldType> for FieldTypeSpec {
    fn from(field_type: FieldType) -> Self {
        Self::new(field_type)
    }
}

impl fmt::Display for FieldTypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_type)?;
        if !self.options.is_empty() {
            write!(f, " {}", Value::Object(self.options.clone()))?;
        }
        Ok(())
    }
}
