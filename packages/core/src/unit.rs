//! Character unit abstraction
//!
//! The tokenizer never interprets characters beyond equality, so it runs
//! unchanged over bytes, UTF-16 code units, UTF-32 code units and `char`.

use std::fmt::Debug;
use std::hash::Hash;

/// Element type the tokenizer compares and slices
pub trait CharUnit: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The quotation mark `"` in this width
    const QUOTE: Self;

    /// Whether this unit is the quotation mark
    #[inline]
    fn is_quote(self) -> bool {
        self == Self::QUOTE
    }
}

impl CharUnit for u8 {
    const QUOTE: Self = b'"';
}

impl CharUnit for u16 {
    const QUOTE: Self = b'"' as u16;
}

impl CharUnit for u32 {
    const QUOTE: Self = b'"' as u32;
}

impl CharUnit for char {
    const QUOTE: Self = '"';
}
