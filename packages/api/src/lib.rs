//! qsplit Public API
//!
//! Quote-aware separator tokenizer with a fluent builder. Text is split on
//! any separator character except inside `"..."` spans, which stay whole.
//!
//! ```
//! use qsplit::Split;
//!
//! let tokens = Split::on(",. ")
//!     .split(r#"many tokens, even "quoted tokens" and "(a,b,c)"."#)?;
//! assert_eq!(
//!     tokens,
//!     ["many", "tokens", "even", r#""quoted tokens""#, "and", r#""(a,b,c)""#]
//! );
//! # Ok::<(), qsplit::SplitError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from the core package
pub use qsplit_core::{
    CharUnit, ConfigurationError, ErrorKind, SeparatorProblem, SeparatorSet, SplitConfig,
    SplitError, SplitResult, SplitState, SplitStats, Tokenizer, Transition, Validator, split,
    split_bytes, split_wide,
};

// Main builder type alias for convenience
pub use builder::builder_core::SplitBuilder;

/// Main entry point providing static builder methods
pub struct Split;

impl Split {
    /// Start a builder splitting on every character of `separators`
    ///
    /// Shorthand for `SplitBuilder::new().separators(separators)`
    pub fn on(separators: impl Into<SeparatorsValue>) -> SplitBuilder {
        SplitBuilder::new().separators(separators)
    }

    /// Start a builder splitting on ASCII whitespace
    ///
    /// Shorthand for `SplitBuilder::new().preset(Preset::Whitespace)`
    #[must_use]
    pub fn whitespace() -> SplitBuilder {
        SplitBuilder::new().preset(Preset::Whitespace)
    }

    /// Start a builder from a loaded configuration
    ///
    /// # Arguments
    /// * `config` - Separator and empty-token settings
    ///
    /// # Returns
    /// `SplitBuilder` for method chaining
    #[must_use]
    pub fn with_config(config: &SplitConfig) -> SplitBuilder {
        SplitBuilder::from_config(config)
    }
}

/// Start a builder splitting on every character of `separators`
///
/// Shorthand for `Split::on(separators)`
pub fn on(separators: impl Into<SeparatorsValue>) -> SplitBuilder {
    Split::on(separators)
}

/// Start a builder splitting on ASCII whitespace
///
/// Shorthand for `Split::whitespace()`
#[must_use]
pub fn whitespace() -> SplitBuilder {
    Split::whitespace()
}
