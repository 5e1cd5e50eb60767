//! Validated separator sets
//!
//! A [`SeparatorSet`] is the only way separators reach the state machine, so
//! an empty set or one containing the quote character cannot be scanned with.

use hashbrown::HashSet;

use crate::error::{SplitResult, empty_separators, quote_separator};
use crate::unit::CharUnit;

/// Non-empty set of separator units that excludes the quote character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet<U: CharUnit> {
    units: HashSet<U>,
}

impl<U: CharUnit> SeparatorSet<U> {
    /// Build a separator set from any collection of units
    ///
    /// Duplicate units collapse into one entry; order is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidSeparators` if:
    /// - no units are supplied
    /// - any unit is the quote character
    pub fn new<I>(units: I) -> SplitResult<Self>
    where
        I: IntoIterator<Item = U>,
    {
        let mut set = HashSet::new();
        for unit in units {
            if unit.is_quote() {
                return Err(quote_separator());
            }
            set.insert(unit);
        }

        if set.is_empty() {
            return Err(empty_separators());
        }

        Ok(Self { units: set })
    }

    /// Build a separator set from a slice of units
    ///
    /// # Errors
    ///
    /// Same conditions as [`SeparatorSet::new`].
    pub fn from_units(units: &[U]) -> SplitResult<Self> {
        Self::new(units.iter().copied())
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, unit: U) -> bool {
        self.units.contains(&unit)
    }

    /// Number of distinct separators
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate the separators in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = U> + '_ {
        self.units.iter().copied()
    }
}

impl SeparatorSet<char> {
    /// Build a separator set from the characters of a string
    ///
    /// # Errors
    ///
    /// Same conditions as [`SeparatorSet::new`].
    pub fn from_chars(separators: &str) -> SplitResult<Self> {
        Self::new(separators.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, SeparatorProblem, SplitError};

    #[test]
    fn empty_set_is_rejected() {
        let err = SeparatorSet::<char>::from_chars("").unwrap_err();
        assert_eq!(err, SplitError::InvalidSeparators(SeparatorProblem::Empty));
    }

    #[test]
    fn quote_is_rejected_even_among_valid_separators() {
        let err = SeparatorSet::from_units(b" ,\";").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSeparators);
        assert_eq!(
            err,
            SplitError::InvalidSeparators(SeparatorProblem::ContainsQuote)
        );
    }

    #[test]
    fn duplicates_collapse() {
        let set = SeparatorSet::from_chars(";;  ;").expect("valid separators");
        assert_eq!(set.len(), 2);
        assert!(set.contains(';'));
        assert!(set.contains(' '));
        assert!(!set.contains(','));
    }

    #[test]
    fn order_does_not_matter() {
        let ab = SeparatorSet::from_chars("AB").expect("valid separators");
        let ba = SeparatorSet::from_chars("BA").expect("valid separators");
        assert_eq!(ab, ba);
    }
}
