//! Split Error Types
//!
//! Core error types for separator validation and token scanning.

/// Classification of split failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied an unusable separator set
    InvalidSeparators,
    /// The input ended inside a quoted span
    UnterminatedQuote,
}

/// Why a separator set was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorProblem {
    /// No separator characters were supplied
    Empty,
    /// The quote character was listed as a separator
    ContainsQuote,
}

impl std::fmt::Display for SeparatorProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeparatorProblem::Empty => f.write_str("separator set is empty"),
            SeparatorProblem::ContainsQuote => {
                f.write_str("quotation mark cannot be used as a separator")
            }
        }
    }
}

/// Errors returned by every split operation
///
/// A failed split never yields tokens: the whole call fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("Invalid separators: {0}")]
    InvalidSeparators(SeparatorProblem),

    #[error("Unterminated quote: span opened at offset {opened_at} is never closed")]
    UnterminatedQuote {
        /// Unit offset of the opening quote
        opened_at: usize,
    },
}

/// Result type for split operations
pub type SplitResult<T> = Result<T, SplitError>;

impl SplitError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplitError::InvalidSeparators(_) => ErrorKind::InvalidSeparators,
            SplitError::UnterminatedQuote { .. } => ErrorKind::UnterminatedQuote,
        }
    }

    /// Whether the failure is a caller contract violation rather than bad input
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidSeparators)
    }

    /// Whether the failure was caused by malformed input text
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnterminatedQuote)
    }
}
