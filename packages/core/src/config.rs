//! Split Configuration
//!
//! Serializable tokenizer settings with validation, for callers that keep
//! their separator choice in a settings file rather than in code.

use serde::{Deserialize, Serialize};

use crate::error::{SplitError, SplitResult};
use crate::separators::SeparatorSet;
use crate::tokenizer::Tokenizer;

/// Separators used when a configuration omits them
pub const DEFAULT_SEPARATORS: &str = " ";

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid split configuration: {0}")]
    Split(#[from] SplitError),

    #[error("Malformed configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Split` if the separators could never be
    /// used to split: empty, or containing the quote character.
    fn validate(&self) -> ConfigResult<()>;
}

/// Tokenizer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Every character of this string is a separator
    pub separators: String,
    /// Drop zero-length tokens
    pub remove_empty: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_owned(),
            remove_empty: true,
        }
    }
}

impl SplitConfig {
    /// Create a configuration from explicit settings
    pub fn new(separators: impl Into<String>, remove_empty: bool) -> Self {
        Self {
            separators: separators.into(),
            remove_empty,
        }
    }

    /// Parse and validate a JSON configuration document
    ///
    /// Missing fields fall back to [`SplitConfig::default`].
    ///
    /// # Errors
    ///
    /// - `ConfigurationError::Parse` if `json` is not a valid document
    /// - `ConfigurationError::Split` if the separators are invalid
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration as JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Parse` if serialization fails.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build a tokenizer from these settings
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidSeparators` if the separators are invalid.
    pub fn build_tokenizer(&self) -> SplitResult<Tokenizer<char>> {
        let tokenizer = Tokenizer::from_chars(&self.separators, self.remove_empty)?;
        log::debug!(
            "built tokenizer with {} distinct separators (remove_empty={})",
            tokenizer.separators().len(),
            self.remove_empty
        );
        Ok(tokenizer)
    }
}

impl Validator for SplitConfig {
    fn validate(&self) -> ConfigResult<()> {
        SeparatorSet::from_chars(&self.separators)?;
        Ok(())
    }
}
