//! Combining several guessers.

use super::{ExplicitGuesser, FormTypeGuesser, TypeGuesser};
use crate::config::{Settings, SettingsError};
use crate::guess::{Guess, TypeGuess};

/// Asks every guesser and keeps the best answer.
///
/// The guess with the highest confidence wins; on a tie the guesser added
/// first wins.
#[derive(Default)]
pub struct GuesserChain {
    guessers: Vec<Box<dyn FormTypeGuesser>>,
}

impl GuesserChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, guesser: impl FormTypeGuesser + 'static) {
        self.guessers.push(Box::new(guesser));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, guesser: impl FormTypeGuesser + 'static) -> Self {
        self.push(guesser);
        self
    }

    /// The standard chain: configured overrides first, then the schema.
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        let mut chain = Self::new();
        let explicit: ExplicitGuesser = settings.guesser.overrides.iter().collect();
        if !explicit.is_empty() {
            chain.push(explicit);
        }
        chain.push(TypeGuesser::from_settings(settings)?);
        Ok(chain)
    }

    pub fn len(&self) -> usize {
        self.guessers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guessers.is_empty()
    }
}

impl std::fmt::Debug for GuesserChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuesserChain")
            .field("guessers", &self.guessers.len())
            .finish()
    }
}

impl FormTypeGuesser for GuesserChain {
    fn guess_type(&self, model: &str, property: &str) -> Option<TypeGuess> {
        Guess::best(self.guessers.iter().filter_map(|g| g.guess_type(model, property)))
    }

    fn guess_required(&self, model: &str, property: &str) -> Option<Guess<bool>> {
        Guess::best(
            self.guessers
                .iter()
                .filter_map(|g| g.guess_required(model, property)),
        )
    }

    fn guess_max_length(&self, model: &str, property: &str) -> Option<Guess<Option<u32>>> {
        Guess::best(
            self.guessers
                .iter()
                .filter_map(|g| g.guess_max_length(model, property)),
        )
    }

    fn guess_pattern(&self, model: &str, property: &str) -> Option<Guess<Option<String>>> {
        Guess::best(
            self.guessers
                .iter()
                .filter_map(|g| g.guess_pattern(model, property)),
        )
    }
}
