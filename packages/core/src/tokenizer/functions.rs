//! One-shot split functions
//!
//! Validate the separators and run a single split; build a
//! [`Tokenizer`] instead when the same separators are used repeatedly.

use super::engine::Tokenizer;
use crate::error::SplitResult;

/// Split `text` on any character of `separators`, keeping `"..."` spans whole
///
/// # Errors
///
/// - `SplitError::InvalidSeparators` if `separators` is empty or contains `"`
/// - `SplitError::UnterminatedQuote` if `text` ends inside a quoted span
///
/// # Examples
///
/// ```
/// let tokens = qsplit_core::split(r#"a "b c" d"#, " ", true).unwrap();
/// assert_eq!(tokens, ["a", "\"b c\"", "d"]);
/// ```
pub fn split(text: &str, separators: &str, remove_empty: bool) -> SplitResult<Vec<String>> {
    let tokenizer = Tokenizer::from_chars(separators, remove_empty)?;
    Ok(tokenizer
        .split_str(text)?
        .into_iter()
        .map(str::to_owned)
        .collect())
}

/// Split a single-byte character sequence
///
/// # Errors
///
/// Same conditions as [`split`].
pub fn split_bytes(text: &[u8], separators: &[u8], remove_empty: bool) -> SplitResult<Vec<Vec<u8>>> {
    Tokenizer::from_units(separators, remove_empty)?.split_owned(text)
}

/// Split a wide (UTF-16 code unit) character sequence
///
/// # Errors
///
/// Same conditions as [`split`].
pub fn split_wide(text: &[u16], separators: &[u16], remove_empty: bool) -> SplitResult<Vec<Vec<u16>>> {
    Tokenizer::from_units(separators, remove_empty)?.split_owned(text)
}
