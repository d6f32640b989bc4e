//! Step records produced by the trace generator

use serde::{Serialize, Serializer};
use std::fmt;

/// Outcome recorded for a step
///
/// Characters that are not brackets leave the status [`StepStatus::Unset`],
/// which is neither a success nor a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StepStatus {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "valid")]
    Valid,
    #[serde(rename = "error")]
    Error,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Unset => "",
            StepStatus::Valid => "valid",
            StepStatus::Error => "error",
        }
    }

    pub fn is_error(self) -> bool {
        self == StepStatus::Error
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decision a step reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    /// An opening bracket was pushed
    Push,
    /// A closing bracket matched and popped `opener`
    Pop { opener: char },
    /// Not a bracket; the stack is untouched
    Skip,
    /// A closing bracket arrived with nothing open
    UnmatchedCloser,
    /// A closing bracket did not close `opener`, which was popped
    Mismatch { opener: char },
    /// Input ended with brackets still open
    Unclosed,
}

/// One recorded decision point in the trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Char position in the input, or the input length for the trailing step
    pub index: usize,

    /// The scanned character; `None` for the trailing unclosed-bracket step
    #[serde(rename = "char", serialize_with = "serialize_char")]
    pub ch: Option<char>,

    /// Open brackets, oldest first, at the moment of the decision
    #[serde(rename = "stack")]
    pub stack_snapshot: Vec<char>,

    pub status: StepStatus,
    pub message: String,
    pub kind: StepKind,
}

fn serialize_char<S: Serializer>(ch: &Option<char>, serializer: S) -> Result<S::Ok, S::Error> {
    match ch {
        Some(c) => serializer.serialize_char(*c),
        None => serializer.serialize_str(""),
    }
}

impl Step {
    pub(crate) fn push(index: usize, c: char, stack: &[char]) -> Self {
        Step {
            index,
            ch: Some(c),
            stack_snapshot: stack.to_vec(),
            status: StepStatus::Valid,
            message: format!("Push '{}' to stack", c),
            kind: StepKind::Push,
        }
    }

    pub(crate) fn pop(index: usize, c: char, opener: char, stack: &[char]) -> Self {
        Step {
            index,
            ch: Some(c),
            stack_snapshot: stack.to_vec(),
            status: StepStatus::Valid,
            message: format!("Pop '{}' from stack - matched with '{}'", opener, c),
            kind: StepKind::Pop { opener },
        }
    }

    pub(crate) fn skip(index: usize, c: char, stack: &[char]) -> Self {
        Step {
            index,
            ch: Some(c),
            stack_snapshot: stack.to_vec(),
            status: StepStatus::Unset,
            message: String::new(),
            kind: StepKind::Skip,
        }
    }

    pub(crate) fn unmatched_closer(index: usize, c: char) -> Self {
        Step {
            index,
            ch: Some(c),
            stack_snapshot: Vec::new(),
            status: StepStatus::Error,
            message: format!(
                "Found closing bracket '{}' without matching opening bracket",
                c
            ),
            kind: StepKind::UnmatchedCloser,
        }
    }

    pub(crate) fn mismatch(index: usize, c: char, opener: char, stack: &[char]) -> Self {
        Step {
            index,
            ch: Some(c),
            stack_snapshot: stack.to_vec(),
            status: StepStatus::Error,
            message: format!(
                "Mismatched brackets. Found '{}' but expected closing bracket for '{}'",
                c, opener
            ),
            kind: StepKind::Mismatch { opener },
        }
    }

    pub(crate) fn unclosed(index: usize, stack: &[char]) -> Self {
        Step {
            index,
            ch: None,
            stack_snapshot: stack.to_vec(),
            status: StepStatus::Error,
            message: format!(
                "Unclosed brackets remaining: {}",
                stack.iter().collect::<String>()
            ),
            kind: StepKind::Unclosed,
        }
    }

    /// The open-bracket stack just before this step acted
    pub fn stack_before(&self) -> Vec<char> {
        let mut stack = self.stack_snapshot.clone();
        match self.kind {
            StepKind::Pop { opener } | StepKind::Mismatch { opener } => stack.push(opener),
            StepKind::Push | StepKind::Skip | StepKind::UnmatchedCloser | StepKind::Unclosed => {}
        }
        stack
    }

    /// The open-bracket stack once this step has acted
    pub fn stack_after(&self) -> Vec<char> {
        let mut stack = self.stack_snapshot.clone();
        if let (StepKind::Push, Some(c)) = (self.kind, self.ch) {
            stack.push(c);
        }
        stack
    }
}
