//! State machine types and data structures

/// Scanning state of the splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitState {
    /// Outside a quoted span; separators end the pending token
    #[default]
    InToken,
    /// Inside a quoted span; only a quote character leaves this state
    InQuote,
}

/// What a single unit does to the pending token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Unit becomes part of the pending token
    Accumulate,
    /// Opening quote; kept in the token, scanning enters the quoted span
    EnterQuote,
    /// Closing quote; kept in the token, scanning leaves the quoted span
    LeaveQuote,
    /// Separator outside quotes; the pending token ends before this unit
    Boundary,
}

/// Outcome of reaching the end of input in a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfInput {
    /// The pending token is complete and may be emitted
    EmitFinal,
    /// A quoted span was still open
    Unterminated,
}

/// Counters gathered during one split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitStats {
    /// Units examined by the scanner
    pub units_scanned: usize,
    /// Tokens placed in the result
    pub tokens_emitted: usize,
    /// Zero-length tokens dropped because suppression was enabled
    pub empty_suppressed: usize,
    /// Quoted spans opened and closed
    pub quoted_spans: usize,
    /// Changes between `InToken` and `InQuote`
    pub state_transitions: usize,
}
