//! Playback state for stepping through a trace
//!
//! A [`Replay`] owns one [`Trace`] and a cursor counting how many steps have
//! been revealed. The cursor starts at zero (nothing shown yet) and moves
//! between `0` and `trace.len()`. Resetting playback is done by dropping the
//! `Replay`.

use crate::trace::{Step, Trace};
use thiserror::Error;

/// Navigation past either end of the trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("Already at the beginning of the trace")]
    AtStart,

    #[error("Already at the end of the trace")]
    AtEnd,
}

#[derive(Debug, Clone)]
pub struct Replay {
    trace: Trace,
    cursor: usize,
}

impl Replay {
    pub fn new(trace: Trace) -> Self {
        Replay { trace, cursor: 0 }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Number of revealed steps
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.trace.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.trace.len()
    }

    /// The most recently revealed step
    pub fn current(&self) -> Option<&Step> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.trace.steps.get(index))
    }

    pub fn revealed(&self) -> &[Step] {
        &self.trace.steps[..self.cursor]
    }

    pub fn step_forward(&mut self) -> Result<&Step, ReplayError> {
        if self.is_finished() {
            return Err(ReplayError::AtEnd);
        }
        self.cursor += 1;
        Ok(&self.trace.steps[self.cursor - 1])
    }

    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        if self.cursor == 0 {
            return Err(ReplayError::AtStart);
        }
        self.cursor -= 1;
        Ok(())
    }

    /// Reveal up to `n` more steps, returning how many were revealed
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let moved = n.min(self.trace.len() - self.cursor);
        self.cursor += moved;
        moved
    }

    pub fn rewind_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.trace.len();
    }
}
