//! TOML-based configuration for formguess.
//!
//! Supports a config file (formguess.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [schema]
//! path = "${APP_ROOT}/config/schema.toml"
//! cache = true
//!
//! [guesser]
//! name_override = true
//! boolean_name_patterns = [
//!     "^(is|has|can)_",
//!     "^(enabled|active|visible)$",
//! ]
//!
//! [[guesser.overrides]]
//! model = "Item"
//! property = "description"
//! type = "textarea"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::guesser::{BooleanNameRules, FieldOverride, PatternError};
use crate::metadata::{InMemorySchema, SchemaError};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid boolean name pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    #[error("No schema path configured")]
    NoSchema,

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Schema source.
    pub schema: SchemaSettings,

    /// Guessing rules.
    pub guesser: GuesserSettings,
}

/// Where model metadata comes from.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SchemaSettings {
    /// Path to a TOML or JSON schema document (supports ${ENV_VAR} expansion).
    pub path: Option<String>,

    /// Memoize lookups.
    pub cache: bool,
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            path: None,
            cache: true,
        }
    }
}

impl SchemaSettings {
    /// Get the schema path with environment variables expanded.
    pub fn resolved_path(&self) -> Result<Option<PathBuf>, SettingsError> {
        self.path
            .as_deref()
            .map(|p| expand_env_vars(p).map(PathBuf::from))
            .transpose()
    }

    /// Load the configured schema document.
    pub fn load_schema(&self) -> Result<InMemorySchema, SettingsError> {
        let path = self.resolved_path()?.ok_or(SettingsError::NoSchema)?;
        Ok(InMemorySchema::from_file(path)?)
    }
}

/// Guessing rule configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GuesserSettings {
    /// Guess checkboxes for ambiguously typed columns with boolean-ish names.
    pub name_override: bool,

    /// Regular expressions matched against snake-cased column names.
    pub boolean_name_patterns: Vec<String>,

    /// Explicit field types, guessed with very high confidence.
    pub overrides: Vec<FieldOverride>,
}

impl Default for GuesserSettings {
    fn default() -> Self {
        Self {
            name_override: true,
            boolean_name_patterns: BooleanNameRules::DEFAULT_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            overrides: Vec::new(),
        }
    }
}

impl GuesserSettings {
    /// Compile the configured patterns.
    ///
    /// Returns empty rules when the name override is disabled.
    pub fn boolean_name_rules(&self) -> Result<BooleanNameRules, SettingsError> {
        if !self.name_override {
            return Ok(BooleanNameRules::empty());
        }
        Ok(BooleanNameRules::new(&self.boolean_name_patterns)?)
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML and validate the boolean name patterns.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.guesser.boolean_name_rules()?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `FORMGUESS_CONFIG`
    /// 2. `./formguess.toml`
    /// 3. `~/.config/formguess/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("FORMGUESS_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("formguess.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("formguess").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Settings::default())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let mut var_name = String::new();
        if chars.peek() == Some(&'{') {
            chars.next();
            for ch in chars.by_ref() {
                if ch == '}' {
                    break;
                }
                var_name.push(ch);
            }
        } else {
            while let Some(&ch) = chars.peek() {
                if !(ch.is_alphanumeric() || ch == '_') {
                    break;
                }
                var_name.push(ch);
                chars.next();
            }
            if var_name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
        }

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
