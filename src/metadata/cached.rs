//! Memoizing provider wrapper.
//!
//! Resolving a model can be expensive for providers that introspect a live
//! ORM. [`CachedProvider`] remembers the tables it has resolved and every
//! column and relation lookup against them, misses included, keyed by
//! `(model, property)`.

use dashmap::DashMap;

use super::provider::SchemaProvider;
use super::types::{ColumnMetadata, RelationMetadata, TableMetadata};

type PropertyKey = (String, String);

/// Wraps a provider and caches its answers.
///
/// Safe to share between threads; the wrapped provider must be read-only for
/// the lifetime of the cache. Lookups against models the provider does not
/// know are passed through uncached, so the cache is bounded by the known
/// models and the property names asked about them.
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    tables: DashMap<String, TableMetadata>,
    columns: DashMap<PropertyKey, Option<ColumnMetadata>>,
    relations: DashMap<PropertyKey, Option<RelationMetadata>>,
}

impl<P: SchemaProvider> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            tables: DashMap::new(),
            columns: DashMap::new(),
            relations: DashMap::new(),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached entries across all lookup kinds.
    pub fn len(&self) -> usize {
        self.tables.len() + self.columns.len() + self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.tables.clear();
        self.columns.clear();
        self.relations.clear();
    }

    // Misses are only worth keeping for models that exist.
    fn remember<T: Clone>(
        &self,
        map: &DashMap<PropertyKey, Option<T>>,
        key: PropertyKey,
        value: &Option<T>,
    ) {
        if value.is_some() || self.has_model(&key.0) {
            map.insert(key, value.clone());
        }
    }
}

impl<P: SchemaProvider> SchemaProvider for CachedProvider<P> {
    fn table(&self, model: &str) -> Option<TableMetadata> {
        if let Some(hit) = self.tables.get(model) {
            return Some(hit.value().clone());
        }
        let table = self.inner.table(model)?;
        self.tables.insert(model.to_string(), table.clone());
        Some(table)
    }

    fn lookup_column(&self, model: &str, property: &str) -> Option<ColumnMetadata> {
        let key = (model.to_string(), property.to_string());
        if let Some(hit) = self.columns.get(&key) {
            return hit.value().clone();
        }
        let value = self.inner.lookup_column(model, property);
        tracing::trace!(model, property, found = value.is_some(), "column lookup");
        self.remember(&self.columns, key, &value);
        value
    }

    fn lookup_relation(&self, model: &str, property: &str) -> Option<RelationMetadata> {
        let key = (model.to_string(), property.to_string());
        if let Some(hit) = self.relations.get(&key) {
            return hit.value().clone();
        }
        let value = self.inner.lookup_relation(model, property);
        tracing::trace!(model, property, found = value.is_some(), "relation lookup");
        self.remember(&self.relations, key, &value);
        value
    }
}
