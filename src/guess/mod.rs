//! Guess values and confidence levels.
//!
//! A guess is an advisory answer: a proposed value plus a [`Confidence`]
//! saying how specific the rule that produced it was. Callers combine guesses
//! from several sources with [`Guess::best`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::FieldTypeSpec;

/// How strongly a guess should be trusted.
///
/// Levels are ordered: `Low < Medium < High < VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Fallback guess; nothing specific was known.
    Low,
    /// Inferred from a broad type family.
    Medium,
    /// Derived from an exact type or relation match.
    High,
    /// Certain; reserved for explicit user configuration.
    VeryHigh,
}

impl Confidence {
    /// Numeric level (0 for `Low` up to 3 for `VeryHigh`).
    pub fn level(self) -> u8 {
        match self {
            Confidence::Low => 0,
            Confidence::Medium => 1,
            Confidence::High => 2,
            Confidence::VeryHigh => 3,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
            Confidence::VeryHigh => write!(f, "very_high"),
        }
    }
}

/// An immutable guess: a proposed value and its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess<T> {
    value: T,
    confidence: Confidence,
}

/// Guess for a form field type.
pub type TypeGuess = Guess<FieldTypeSpec>;

impl<T> Guess<T> {
    /// Create a new guess.
    pub fn new(value: T, confidence: Confidence) -> Self {
        Self { value, confidence }
    }

    /// The proposed value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the guess and return its value.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Pick the guess with the highest confidence.
    ///
    /// When several guesses share the highest confidence the first one wins.
    /// Returns `None` for an empty input.
    pub fn best<I>(guesses: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut best: Option<Self> = None;
        for guess in guesses {
            let stronger = best
                .as_ref()
                .map_or(true, |current| guess.confidence > current.confidence);
            if stronger {
                best = Some(guess);
            }
        }
        best
    }
}

impl TypeGuess {
    /// Shorthand for the field type of a type guess.
    pub fn field_type(&self) -> crate::form::FieldType {
        self.value.field_type()
    }
}

impl<T: fmt::Display> fmt::Display for Guess<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.confidence)
    }
}
