//! State transition implementations
//!
//! Pure functions only: the scanner in `tokenizer` owns the cursor and the
//! token start marker and reacts to the transitions reported here.

use super::types::{EndOfInput, SplitState, Transition};
use crate::separators::SeparatorSet;
use crate::unit::CharUnit;

impl SplitState {
    /// Advance the machine by one unit
    ///
    /// Returns the next state together with what the unit does to the
    /// pending token. Separators are only meaningful in `InToken`.
    #[inline]
    #[must_use]
    pub fn step<U: CharUnit>(self, unit: U, separators: &SeparatorSet<U>) -> (SplitState, Transition) {
        match self {
            SplitState::InToken => {
                if unit.is_quote() {
                    (SplitState::InQuote, Transition::EnterQuote)
                } else if separators.contains(unit) {
                    (SplitState::InToken, Transition::Boundary)
                } else {
                    (SplitState::InToken, Transition::Accumulate)
                }
            }
            SplitState::InQuote => {
                if unit.is_quote() {
                    (SplitState::InToken, Transition::LeaveQuote)
                } else {
                    (SplitState::InQuote, Transition::Accumulate)
                }
            }
        }
    }

    /// Resolve end of input in this state
    #[inline]
    #[must_use]
    pub fn finish(self) -> EndOfInput {
        match self {
            SplitState::InToken => EndOfInput::EmitFinal,
            SplitState::InQuote => EndOfInput::Unterminated,
        }
    }

    /// Whether the machine is inside a quoted span
    #[inline]
    #[must_use]
    pub fn in_quote(self) -> bool {
        matches!(self, SplitState::InQuote)
    }
}

/// Check if a transition ends the pending token
#[inline]
#[must_use]
pub fn is_boundary(transition: Transition) -> bool {
    matches!(transition, Transition::Boundary)
}

/// Check if a transition switches between quoted and unquoted scanning
#[inline]
#[must_use]
pub fn is_state_change(transition: Transition) -> bool {
    matches!(transition, Transition::EnterQuote | Transition::LeaveQuote)
}
