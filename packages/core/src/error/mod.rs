//! Tokenizer error handling module
//!
//! Error types, classification and constructor helpers shared by the
//! separator set, the state machine and the tokenizer engine.

pub mod constructors;
mod types;

pub use constructors::{empty_separators, quote_separator, unterminated_quote};
pub use types::{ErrorKind, SeparatorProblem, SplitError, SplitResult};
