//! # qsplit core
//!
//! Quote-aware separator tokenizer. Input is split on any character of a
//! caller-supplied separator set, except inside `"..."` spans, which are
//! kept whole with their quotes.
//!
//! ## Features
//!
//! - **Explicit two-state machine** (`InToken` / `InQuote`) with a pure
//!   transition function
//! - **Width generic**: bytes, UTF-16, UTF-32 and `char` through one algorithm
//! - **Borrowed output**: tokens are slices of the input
//! - **All-or-nothing errors**: a failed split never yields partial tokens
//!
//! ## Usage
//!
//! ```
//! use qsplit_core::{split, SplitError};
//!
//! let tokens = split(r#"  a;"test;sample";  "quoted text""#, "; ", true)?;
//! assert_eq!(tokens, ["a", r#""test;sample""#, r#""quoted text""#]);
//!
//! assert!(matches!(
//!     split(r#"open "quote"#, " ", true),
//!     Err(SplitError::UnterminatedQuote { .. })
//! ));
//! # Ok::<(), SplitError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod separators;
pub mod state_machine;
pub mod tokenizer;
pub mod unit;

pub use config::{ConfigResult, ConfigurationError, SplitConfig, Validator};
pub use error::{ErrorKind, SeparatorProblem, SplitError, SplitResult};
pub use separators::SeparatorSet;
pub use state_machine::{SplitState, SplitStats, Transition};
pub use tokenizer::{Tokenizer, split, split_bytes, split_wide};
pub use unit::CharUnit;
