//! Bracket matching trace generation
//!
//! [`evaluate`] scans the input once, left to right, keeping an explicit stack
//! of opening brackets. Every character produces a [`Step`]; a closing bracket
//! that cannot be matched ends the scan immediately, and brackets left open at
//! the end produce one trailing step.
//!
//! Failures are reported as data: the last step of an invalid trace has
//! [`StepStatus::Error`]. Nothing in this module can fail.

pub mod bracket;
pub mod step;

pub use bracket::{classify, pairs_with, BracketKind, Token};
pub use step::{Step, StepKind, StepStatus};

use serde::Serialize;
use tracing::debug;

/// Result of evaluating one input string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub is_valid: bool,
}

/// Number of steps per status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub unset: usize,
    pub valid: usize,
    pub error: usize,
}

impl Trace {
    /// The terminal error step, if the input is not balanced
    pub fn failure(&self) -> Option<&Step> {
        self.steps.last().filter(|step| step.status.is_error())
    }

    /// The open-bracket stack once every step has been applied
    pub fn final_stack(&self) -> Vec<char> {
        self.steps
            .last()
            .map(Step::stack_after)
            .unwrap_or_default()
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for step in &self.steps {
            match step.status {
                StepStatus::Unset => counts.unset += 1,
                StepStatus::Valid => counts.valid += 1,
                StepStatus::Error => counts.error += 1,
            }
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Evaluate `input` and record every decision of the matching algorithm
pub fn evaluate(input: &str) -> Trace {
    let mut stack: Vec<char> = Vec::new();
    let mut steps = Vec::new();
    let mut length = 0;

    for (index, c) in input.chars().enumerate() {
        length = index + 1;
        match classify(c) {
            Token::Open(_) => {
                steps.push(Step::push(index, c, &stack));
                stack.push(c);
            }
            Token::Close(_) => {
                let Some(top) = stack.pop() else {
                    steps.push(Step::unmatched_closer(index, c));
                    return finish(steps, false);
                };

                if !pairs_with(top, c) {
                    steps.push(Step::mismatch(index, c, top, &stack));
                    return finish(steps, false);
                }

                steps.push(Step::pop(index, c, top, &stack));
            }
            Token::Other => steps.push(Step::skip(index, c, &stack)),
        }
    }

    if !stack.is_empty() {
        steps.push(Step::unclosed(length, &stack));
        return finish(steps, false);
    }

    finish(steps, true)
}

fn finish(steps: Vec<Step>, is_valid: bool) -> Trace {
    debug!(steps = steps.len(), is_valid, "evaluated bracket trace");
    Trace { steps, is_valid }
}
