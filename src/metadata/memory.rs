//! In-memory schema provider.
//!
//! Holds a fixed set of [`TableMetadata`] values, either built in code or
//! parsed from a schema document:
//!
//! ```toml
//! [[models]]
//! name = "Item"
//! table = "item"
//!
//! [[models.columns]]
//! name = "id"
//! type = "INTEGER"
//! primary_key = true
//!
//! [[models.relations]]
//! name = "Author"
//! target = "Author"
//! kind = "one_to_many"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::inflection;
use super::provider::SchemaProvider;
use super::types::TableMetadata;

/// Error type for schema loading.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read schema file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML schema: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Failed to parse JSON schema: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Duplicate model: {0}")]
    DuplicateModel(String),
}

/// Schema document layout.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub models: Vec<TableMetadata>,
}

/// A provider backed by a fixed map of models.
///
/// Models are registered under their full identifier and, when unambiguous,
/// under their short name (`App\Fixtures\Item` is also reachable as `Item`).
#[derive(Debug, Clone, Default)]
pub struct InMemorySchema {
    tables: HashMap<String, TableMetadata>,
    short_names: HashMap<String, Option<String>>,
}

impl InMemorySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from a list of models.
    pub fn from_tables<I>(tables: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = TableMetadata>,
    {
        let mut schema = Self::new();
        for table in tables {
            schema.insert(table)?;
        }
        Ok(schema)
    }

    /// Register a model. Fails if a model with the same identifier exists.
    pub fn insert(&mut self, table: TableMetadata) -> Result<(), SchemaError> {
        let key = table.name.to_lowercase();
        if self.tables.contains_key(&key) {
            return Err(SchemaError::DuplicateModel(table.name));
        }

        let short = inflection::short_model_name(&table.name).to_lowercase();
        if short != key {
            self.short_names
                .entry(short)
                .and_modify(|existing| *existing = None)
                .or_insert_with(|| Some(key.clone()));
        }

        self.tables.insert(key, table);
        Ok(())
    }

    /// Parse a TOML schema document.
    pub fn from_toml_str(content: &str) -> Result<Self, SchemaError> {
        let doc: SchemaDocument = toml::from_str(content)?;
        Self::from_tables(doc.models)
    }

    /// Parse a JSON schema document.
    pub fn from_json_str(content: &str) -> Result<Self, SchemaError> {
        let doc: SchemaDocument = serde_json::from_str(content)?;
        Self::from_tables(doc.models)
    }

    /// Load a schema document from disk; `.json` files are parsed as JSON,
    /// anything else as TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SchemaError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let schema = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };

        tracing::debug!(path = %path.display(), models = schema.len(), "loaded schema");
        Ok(schema)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Model identifiers, sorted.
    pub fn models(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.values().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    fn get(&self, model: &str) -> Option<&TableMetadata> {
        let key = model.to_lowercase();
        if let Some(table) = self.tables.get(&key) {
            return Some(table);
        }
        let full = self.short_names.get(&key)?.as_ref()?;
        self.tables.get(full)
    }
}

impl SchemaProvider for InMemorySchema {
    fn table(&self, model: &str) -> Option<TableMetadata> {
        self.get(model).cloned()
    }

    fn lookup_column(&self, model: &str, property: &str) -> Option<super::ColumnMetadata> {
        self.get(model)?.column(property).cloned()
    }

    fn lookup_relation(&self, model: &str, property: &str) -> Option<super::RelationMetadata> {
        self.get(model)?.relation(property).cloned()
    }

    fn has_model(&self, model: &str) -> bool {
        self.get(model).is_some()
    }
}
