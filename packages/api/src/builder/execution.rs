//! Split execution
//!
//! Terminal builder methods: validate the separators, run the split and
//! optionally log the outcome.

use qsplit_core::{SplitResult, SplitStats, Tokenizer, error::empty_separators};

use crate::builder::builder_core::SplitBuilder;

impl SplitBuilder {
    /// Validate the configuration and produce a reusable tokenizer
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidSeparators` if no separators were
    /// configured, the configured set is empty, or it contains `"`.
    pub fn tokenizer(&self) -> SplitResult<Tokenizer<char>> {
        let separators = self.separators.as_deref().ok_or_else(empty_separators)?;
        let tokenizer = Tokenizer::from_chars(separators, self.remove_empty);
        if self.debug_enabled {
            match &tokenizer {
                Ok(_) => log::debug!(
                    "qsplit: separators={separators:?} remove_empty={}",
                    self.remove_empty
                ),
                Err(e) => log::debug!("qsplit: rejected separators {separators:?}: {e}"),
            }
        }
        tokenizer
    }

    /// Split `text` into owned tokens
    ///
    /// # Errors
    ///
    /// - `SplitError::InvalidSeparators` if the separators are unusable
    /// - `SplitError::UnterminatedQuote` if `text` ends inside a quoted span
    pub fn split(&self, text: &str) -> SplitResult<Vec<String>> {
        Ok(self
            .split_borrowed(text)?
            .into_iter()
            .map(str::to_owned)
            .collect())
    }

    /// Split `text` into slices borrowed from it
    ///
    /// # Errors
    ///
    /// Same conditions as [`SplitBuilder::split`].
    pub fn split_borrowed<'a>(&self, text: &'a str) -> SplitResult<Vec<&'a str>> {
        self.split_with_stats(text).map(|(tokens, _)| tokens)
    }

    /// Split `text` and report scanning counters
    ///
    /// # Errors
    ///
    /// Same conditions as [`SplitBuilder::split`].
    pub fn split_with_stats<'a>(&self, text: &'a str) -> SplitResult<(Vec<&'a str>, SplitStats)> {
        let result = self.tokenizer()?.split_str_with_stats(text);
        if self.debug_enabled {
            match &result {
                Ok((tokens, stats)) => log::debug!(
                    "qsplit: {} tokens from {} chars ({} empty suppressed)",
                    tokens.len(),
                    stats.units_scanned,
                    stats.empty_suppressed
                ),
                Err(e) => log::debug!("qsplit: split failed: {e}"),
            }
        }
        result
    }
}
