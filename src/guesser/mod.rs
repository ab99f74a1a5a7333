//! Form type guessing.
//!
//! A guesser answers four questions about a model property: which form field
//! type fits it, whether it is required, its maximum length, and a validation
//! pattern. Answers are [`Guess`]es; no answer is an error.
//!
//! # Example
//!
//! ```ignore
//! use formguess::guesser::{ExplicitGuesser, FormTypeGuesser, GuesserChain, TypeGuesser};
//! use formguess::metadata::InMemorySchema;
//!
//! let schema = InMemorySchema::from_file("schema.toml")?;
//! let chain = GuesserChain::new()
//!     .with(ExplicitGuesser::new().with("Item", "price", FieldType::Integer))
//!     .with(TypeGuesser::new(schema));
//!
//! let guess = chain.guess_type("Item", "updatedAt");
//! ```

mod chain;
mod explicit;
mod rules;
mod type_guesser;

pub use chain::GuesserChain;
pub use explicit::{ExplicitGuesser, FieldOverride};
pub use rules::{column_guess, is_ambiguous_boolean, relation_guess, BooleanNameRules, PatternError};
pub use type_guesser::TypeGuesser;

use crate::guess::{Guess, TypeGuess};

/// Something that can guess form field settings for model properties.
pub trait FormTypeGuesser: Send + Sync {
    /// Guess the form field type, or `None` if this guesser has no opinion.
    fn guess_type(&self, model: &str, property: &str) -> Option<TypeGuess>;

    /// Guess whether the property is required.
    fn guess_required(&self, model: &str, property: &str) -> Option<Guess<bool>>;

    /// Guess the maximum length; a guess carrying `None` means no limit applies.
    fn guess_max_length(&self, model: &str, property: &str) -> Option<Guess<Option<u32>>>;

    /// Guess a validation pattern; a guess carrying `None` means the property
    /// was considered but no pattern could be derived.
    fn guess_pattern(&self, model: &str, property: &str) -> Option<Guess<Option<String>>>;
}
