//! # formguess
//!
//! Guesses form field types, required-ness and length constraints from ORM
//! schema metadata.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Schema metadata (tables, columns, relations)    │
//! │          InMemorySchema / CachedProvider / your ORM      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [SchemaProvider]
//! ┌─────────────────────────────────────────────────────────┐
//! │                     TypeGuesser                          │
//! │   relation rules → boolean name rules → column rules     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [FormTypeGuesser]
//! ┌─────────────────────────────────────────────────────────┐
//! │          GuesserChain (best guess by confidence)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │      Guess<FieldTypeSpec> / Guess<bool> / Guess<...>     │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod form;
pub mod guess;
pub mod guesser;
pub mod metadata;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::{Settings, SettingsError};
    pub use crate::form::{FieldType, FieldTypeSpec};
    pub use crate::guess::{Confidence, Guess, TypeGuess};
    pub use crate::guesser::{
        BooleanNameRules, ExplicitGuesser, FormTypeGuesser, GuesserChain, TypeGuesser,
    };
    pub use crate::metadata::{
        CachedProvider, ColumnMetadata, InMemorySchema, RelationKind, RelationMetadata,
        SchemaProvider, SqlType, TableMetadata,
    };
}

// Also export at crate root for convenience
pub use form::{FieldType, FieldTypeSpec};
pub use guess::{Confidence, Guess, TypeGuess};
pub use guesser::{FormTypeGuesser, GuesserChain, TypeGuesser};
pub use metadata::SchemaProvider;
