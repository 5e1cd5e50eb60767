//! Error constructor helpers
//!
//! Shorthands used throughout the crate so call sites stay one line.

use super::types::{SeparatorProblem, SplitError};

/// Separator set had no characters in it
#[must_use]
pub fn empty_separators() -> SplitError {
    SplitError::InvalidSeparators(SeparatorProblem::Empty)
}

/// Separator set contained the quote character
#[must_use]
pub fn quote_separator() -> SplitError {
    SplitError::InvalidSeparators(SeparatorProblem::ContainsQuote)
}

/// Input ended while the quoted span opened at `opened_at` was still open
#[must_use]
pub fn unterminated_quote(opened_at: usize) -> SplitError {
    SplitError::UnterminatedQuote { opened_at }
}
