//! SchemaProvider trait definition.
//!
//! The SchemaProvider trait abstracts over where model metadata comes from:
//! an ORM's generated table maps, a schema document, or a test fixture. The
//! guessers only ever read through this trait.

use std::sync::Arc;

use super::types::{ColumnMetadata, RelationMetadata, TableMetadata};

/// Read-only access to model schema metadata.
///
/// Every lookup returns `None` for an unknown model or property; providers
/// never fail.
pub trait SchemaProvider: Send + Sync {
    /// Get complete metadata for a model.
    fn table(&self, model: &str) -> Option<TableMetadata>;

    /// Look up a column by property name.
    fn lookup_column(&self, model: &str, property: &str) -> Option<ColumnMetadata> {
        self.table(model)?.column(property).cloned()
    }

    /// Look up a relation by property name.
    ///
    /// To-many relations are matched by their plural name.
    fn lookup_relation(&self, model: &str, property: &str) -> Option<RelationMetadata> {
        self.table(model)?.relation(property).cloned()
    }

    /// Whether the provider knows the model at all.
    fn has_model(&self, model: &str) -> bool {
        self.table(model).is_some()
    }
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for &P {
    fn table(&self, model: &str) -> Option<TableMetadata> {
        (**self).table(model)
    }

    fn lookup_column(&self, model: &str, property: &str) -> Option<ColumnMetadata> {
        (**self).lookup_column(model, property)
    }

    fn lookup_relation(&self, model: &str, property: &str) -> Option<RelationMetadata> {
        (**self).lookup_relation(model, property)
    }
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for Arc<P> {
    fn table(&self, model: &str) -> Option<TableMetadata> {
        (**self).table(model)
    }

    fn lookup_column(&self, model: &str, property: &str) -> Option<ColumnMetadata> {
        (**self).lookup_column(model, property)
    }

    fn lookup_relation(&self, model: &str, property: &str) -> Option<RelationMetadata> {
        (**self).lookup_relation(model, property)
    }
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for Box<P> {
    fn table(&self, model: &str) -> Option<TableMetadata> {
        (**self).table(model)
    }

    fn lookup_column(&self, model: &str, property: &str) -> Option<ColumnMetadata> {
        (**self).lookup_column(model, property)
    }

    fn lookup_relation(&self, model: &str, property: &str) -> Option<RelationMetadata> {
        (**self).lookup_relation(model, property)
    }
}
