//! Schema metadata module.
//!
//! This module describes models the way an ORM's generated table maps do and
//! provides the lookups the guessers depend on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      SchemaProvider                             │
//! │  - table(model)                                                 │
//! │  - lookup_column(model, property)                               │
//! │  - lookup_relation(model, property)                             │
//! └─────────────────────────────────────────────────────────────────┘
//!           ▲                                   ▲
//!           │                                   │
//! ┌──────────────────────┐          ┌──────────────────────────────┐
//! │    InMemorySchema    │          │  CachedProvider<P>           │
//! │  (code, TOML, JSON)  │          │  (memoizes any provider)     │
//! └──────────────────────┘          └──────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use formguess::metadata::{CachedProvider, InMemorySchema, SchemaProvider};
//!
//! let schema = CachedProvider::new(InMemorySchema::from_file("schema.toml")?);
//! let column = schema.lookup_column("Item", "updatedAt");
//! ```

mod cached;
pub mod inflection;
mod memory;
mod provider;
mod types;

pub use cached::CachedProvider;
pub use memory::{InMemorySchema, SchemaDocument, SchemaError};
pub use provider::SchemaProvider;
pub use types::*;
