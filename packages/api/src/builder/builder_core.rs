//! Core `SplitBuilder` structure and base functionality
//!
//! Contains the builder itself, the separator presets and the toggles for
//! empty-token handling and debug logging.

use std::fmt;

use qsplit_core::SplitConfig;

/// Common separator sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Space, tab, carriage return and line feed
    Whitespace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `,` and `;`
    CommaOrSemicolon,
    /// `\t`
    Tab,
    /// Sentence punctuation plus space: `,`, `.` and ` `
    Words,
}

impl Preset {
    /// Separator characters of this preset
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Whitespace => " \t\r\n",
            Preset::Comma => ",",
            Preset::Semicolon => ";",
            Preset::CommaOrSemicolon => ",;",
            Preset::Tab => "\t",
            Preset::Words => ",. ",
        }
    }
}

/// Fluent builder for quote-aware splits
///
/// Separators start unset; splitting before any are configured fails with
/// `SplitError::InvalidSeparators`. Empty tokens are removed by default.
#[derive(Clone, PartialEq, Eq)]
pub struct SplitBuilder {
    /// Separator characters, `None` until configured
    pub(crate) separators: Option<String>,
    /// Drop zero-length tokens
    pub(crate) remove_empty: bool,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl Default for SplitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitBuilder {
    /// Start building a split with no separators configured
    #[must_use]
    pub fn new() -> Self {
        Self {
            separators: None,
            remove_empty: true,
            debug_enabled: false,
        }
    }

    /// Start building from a configuration
    #[must_use]
    pub fn from_config(config: &SplitConfig) -> Self {
        Self {
            separators: Some(config.separators.clone()),
            remove_empty: config.remove_empty,
            debug_enabled: false,
        }
    }

    /// Snapshot the builder settings as a configuration
    ///
    /// Unset separators become an empty string, which fails validation.
    #[must_use]
    pub fn to_config(&self) -> SplitConfig {
        SplitConfig::new(self.separators.clone().unwrap_or_default(), self.remove_empty)
    }

    /// Drop zero-length tokens from the result (the default)
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn remove_empty(mut self, remove: bool) -> Self {
        self.remove_empty = remove;
        self
    }

    /// Keep zero-length tokens, one per boundary crossing
    ///
    /// Shorthand for `remove_empty(false)`
    #[must_use]
    pub fn keep_empty(self) -> Self {
        self.remove_empty(false)
    }

    /// Enable debug logging for this split
    ///
    /// When enabled, the configuration and the outcome of each split are
    /// logged at debug level.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Configured separator characters, if any
    #[must_use]
    pub fn separator_chars(&self) -> Option<&str> {
        self.separators.as_deref()
    }

    /// Whether zero-length tokens will be dropped
    #[must_use]
    pub fn removes_empty(&self) -> bool {
        self.remove_empty
    }
}

impl fmt::Debug for SplitBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitBuilder")
            .field("separators", &self.separators)
            .field("remove_empty", &self.remove_empty)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
