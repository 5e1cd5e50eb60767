//! Quote-aware splitting state machine
//!
//! Two states drive the scan: outside quotes (`InToken`) separators close
//! the pending token, inside quotes (`InQuote`) every unit except the quote
//! character is inert content.
//!
//! # Architecture
//!
//! - `types`: states, transition outcomes and statistics
//! - `transitions`: the pure per-unit transition function and end-of-input rule
//!
//! | State   | Unit          | Transition   | Next    |
//! |---------|---------------|--------------|---------|
//! | InToken | end-of-input  | emit final   | done    |
//! | InToken | quote         | `EnterQuote` | InQuote |
//! | InToken | separator     | `Boundary`   | InToken |
//! | InToken | other         | `Accumulate` | InToken |
//! | InQuote | end-of-input  | unterminated | failed  |
//! | InQuote | quote         | `LeaveQuote` | InToken |
//! | InQuote | other         | `Accumulate` | InQuote |

mod transitions;
mod types;

pub use transitions::{is_boundary, is_state_change};
pub use types::{EndOfInput, SplitState, SplitStats, Transition};
