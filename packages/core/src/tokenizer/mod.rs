//! Separator tokenizer implementation
//!
//! Drives the [`SplitState`](crate::state_machine::SplitState) machine over
//! an input sequence and turns boundary transitions into token spans.

mod engine;
mod functions;

pub use engine::Tokenizer;
pub use functions::{split, split_bytes, split_wide};
