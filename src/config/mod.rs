//! Configuration module for formguess.
//!
//! Handles the schema source and the guessing rule settings.

mod settings;

pub use settings::{expand_env_vars, GuesserSettings, SchemaSettings, Settings, SettingsError};
