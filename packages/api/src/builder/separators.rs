//! Separator configuration functionality
//!
//! Methods for replacing or extending the separator characters of a
//! [`SplitBuilder`], from strings, single characters, slices or presets.

use crate::builder::builder_core::{Preset, SplitBuilder};

/// Helper type for separator methods that accept strings, chars and presets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeparatorsValue {
    /// Every character of the string is a separator
    String(String),
    /// Preset separator set
    Preset(Preset),
}

impl SeparatorsValue {
    /// Convert to the separator characters
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SeparatorsValue::String(s) => s,
            SeparatorsValue::Preset(preset) => preset.as_str(),
        }
    }
}

impl From<&str> for SeparatorsValue {
    fn from(s: &str) -> Self {
        SeparatorsValue::String(s.to_string())
    }
}

impl From<String> for SeparatorsValue {
    fn from(s: String) -> Self {
        SeparatorsValue::String(s)
    }
}

impl From<char> for SeparatorsValue {
    fn from(c: char) -> Self {
        SeparatorsValue::String(c.to_string())
    }
}

impl From<&[char]> for SeparatorsValue {
    fn from(chars: &[char]) -> Self {
        SeparatorsValue::String(chars.iter().collect())
    }
}

impl<const N: usize> From<[char; N]> for SeparatorsValue {
    fn from(chars: [char; N]) -> Self {
        SeparatorsValue::String(chars.iter().collect())
    }
}

impl From<Preset> for SeparatorsValue {
    fn from(preset: Preset) -> Self {
        SeparatorsValue::Preset(preset)
    }
}

impl SplitBuilder {
    /// Replace the separator set
    ///
    /// # Arguments
    /// * `separators` - Every character becomes a separator
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn separators(mut self, separators: impl Into<SeparatorsValue>) -> Self {
        self.separators = Some(separators.into().as_str().to_owned());
        self
    }

    /// Add separators to the existing set
    ///
    /// Starts a new set when none is configured yet.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn also_on(mut self, separators: impl Into<SeparatorsValue>) -> Self {
        let value = separators.into();
        self.separators
            .get_or_insert_with(String::new)
            .push_str(value.as_str());
        self
    }

    /// Replace the separator set with a preset
    ///
    /// Shorthand for `separators(preset)`
    #[must_use]
    pub fn preset(self, preset: Preset) -> Self {
        self.separators(preset)
    }
}
