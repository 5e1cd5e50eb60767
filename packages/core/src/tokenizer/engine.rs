//! Core tokenizer types and scanning logic

use std::ops::Range;

use crate::error::{SplitResult, unterminated_quote};
use crate::separators::SeparatorSet;
use crate::state_machine::{EndOfInput, SplitState, SplitStats, Transition, is_state_change};
use crate::unit::CharUnit;

/// Validated, reusable splitter
///
/// Holds no per-call state, so one instance can be shared freely between
/// threads and reused for any number of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer<U: CharUnit> {
    separators: SeparatorSet<U>,
    remove_empty: bool,
}

impl<U: CharUnit> Tokenizer<U> {
    /// Create a tokenizer from an already validated separator set
    #[inline]
    #[must_use]
    pub fn new(separators: SeparatorSet<U>, remove_empty: bool) -> Self {
        Self {
            separators,
            remove_empty,
        }
    }

    /// Create a tokenizer from raw separator units
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidSeparators` if `separators` is empty or
    /// contains the quote character.
    pub fn from_units(separators: &[U], remove_empty: bool) -> SplitResult<Self> {
        Ok(Self::new(SeparatorSet::from_units(separators)?, remove_empty))
    }

    /// Separator set in use
    #[inline]
    #[must_use]
    pub fn separators(&self) -> &SeparatorSet<U> {
        &self.separators
    }

    /// Whether zero-length tokens are dropped
    #[inline]
    #[must_use]
    pub fn removes_empty(&self) -> bool {
        self.remove_empty
    }

    /// Token boundaries as index ranges into `input`
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnterminatedQuote` if `input` ends inside a
    /// quoted span.
    pub fn spans(&self, input: &[U]) -> SplitResult<Vec<Range<usize>>> {
        let mut stats = SplitStats::default();
        self.scan(slice_units(input), input.len(), &mut stats)
    }

    /// Split `input` into borrowed token slices
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnterminatedQuote` if `input` ends inside a
    /// quoted span.
    pub fn split_units<'a>(&self, input: &'a [U]) -> SplitResult<Vec<&'a [U]>> {
        Ok(self
            .spans(input)?
            .into_iter()
            .map(|span| &input[span])
            .collect())
    }

    /// Split `input` into owned tokens
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnterminatedQuote` if `input` ends inside a
    /// quoted span.
    pub fn split_owned(&self, input: &[U]) -> SplitResult<Vec<Vec<U>>> {
        Ok(self
            .split_units(input)?
            .into_iter()
            .map(<[U]>::to_vec)
            .collect())
    }

    /// Split `input` and report scanning counters alongside the tokens
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnterminatedQuote` if `input` ends inside a
    /// quoted span.
    pub fn split_with_stats<'a>(&self, input: &'a [U]) -> SplitResult<(Vec<&'a [U]>, SplitStats)> {
        let mut stats = SplitStats::default();
        let spans = self.scan(slice_units(input), input.len(), &mut stats)?;
        let tokens = spans.into_iter().map(|span| &input[span]).collect();
        Ok((tokens, stats))
    }

    /// Run the state machine over `(start, unit, next)` triples
    ///
    /// `next` is the offset just past the unit; `end` is the offset of
    /// end-of-input. Offsets are in whatever index space the caller slices
    /// with, so the same scan serves `&[U]` and `&str`.
    pub(crate) fn scan<I>(
        &self,
        units: I,
        end: usize,
        stats: &mut SplitStats,
    ) -> SplitResult<Vec<Range<usize>>>
    where
        I: IntoIterator<Item = (usize, U, usize)>,
    {
        let mut state = SplitState::default();
        let mut token_start = 0;
        let mut quote_opened_at = 0;
        let mut spans = Vec::new();

        for (start, unit, next) in units {
            stats.units_scanned += 1;
            let (next_state, transition) = state.step(unit, &self.separators);

            match transition {
                Transition::Boundary => {
                    self.emit(&mut spans, token_start..start, stats);
                    token_start = next;
                }
                Transition::EnterQuote => quote_opened_at = start,
                Transition::LeaveQuote => stats.quoted_spans += 1,
                Transition::Accumulate => {}
            }

            if is_state_change(transition) {
                stats.state_transitions += 1;
            }
            state = next_state;
        }

        match state.finish() {
            EndOfInput::EmitFinal => {
                self.emit(&mut spans, token_start..end, stats);
                tracing::debug!(
                    tokens = stats.tokens_emitted,
                    suppressed = stats.empty_suppressed,
                    units = stats.units_scanned,
                    "split complete"
                );
                Ok(spans)
            }
            EndOfInput::Unterminated => {
                tracing::debug!(opened_at = quote_opened_at, "split failed: unterminated quote");
                Err(unterminated_quote(quote_opened_at))
            }
        }
    }

    fn emit(&self, spans: &mut Vec<Range<usize>>, span: Range<usize>, stats: &mut SplitStats) {
        if span.is_empty() && self.remove_empty {
            stats.empty_suppressed += 1;
            return;
        }
        tracing::trace!(start = span.start, end = span.end, "token");
        stats.tokens_emitted += 1;
        spans.push(span);
    }
}

impl Tokenizer<char> {
    /// Create a tokenizer whose separators are the characters of `separators`
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidSeparators` if `separators` is empty or
    /// contains `"`.
    pub fn from_chars(separators: &str, remove_empty: bool) -> SplitResult<Self> {
        Ok(Self::new(SeparatorSet::from_chars(separators)?, remove_empty))
    }

    /// Token boundaries as byte ranges into `text`
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnterminatedQuote` if `text` ends inside a
    /// quoted span.
    pub fn str_spans(&self, text: &str) -> SplitResult<Vec<Range<usize>>> {
        let mut stats = SplitStats::default();
        self.scan(str_units(text), text.len(), &mut stats)
    }

    /// Split `text` into borrowed string slices
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnterminatedQuote` if `text` ends inside a
    /// quoted span.
    pub fn split_str<'a>(&self, text: &'a str) -> SplitResult<Vec<&'a str>> {
        Ok(self
            .str_spans(text)?
            .into_iter()
            .map(|span| &text[span])
            .collect())
    }

    /// Split `text` and report scanning counters alongside the tokens
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnterminatedQuote` if `text` ends inside a
    /// quoted span.
    pub fn split_str_with_stats<'a>(&self, text: &'a str) -> SplitResult<(Vec<&'a str>, SplitStats)> {
        let mut stats = SplitStats::default();
        let spans = self.scan(str_units(text), text.len(), &mut stats)?;
        let tokens = spans.into_iter().map(|span| &text[span]).collect();
        Ok((tokens, stats))
    }
}

#[inline]
fn slice_units<U: CharUnit>(input: &[U]) -> impl Iterator<Item = (usize, U, usize)> + '_ {
    input
        .iter()
        .copied()
        .enumerate()
        .map(|(index, unit)| (index, unit, index + 1))
}

// Byte offsets keep every span on a char boundary.
#[inline]
fn str_units(text: &str) -> impl Iterator<Item = (usize, char, usize)> + '_ {
    text.char_indices()
        .map(|(offset, ch)| (offset, ch, offset + ch.len_utf8()))
}
