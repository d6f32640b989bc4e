//! # Introduction
//!
//! BrackeTTY evaluates a string of brackets with the classic stack-based
//! matching algorithm and records every decision as a [`trace::Step`]. The
//! trace is then replayed step by step in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), or printed as text or JSON.
//!
//! ## Pipeline
//!
//! ```text
//! Input → evaluate → Trace → Replay → TUI
//!                        └──→ Report (plain / JSON)
//! ```
//!
//! 1. [`trace`]: the pure trace generator, [`evaluate`].
//! 2. [`replay`]: explicit playback state (trace plus cursor).
//! 3. [`report`]: non-interactive output.
//! 4. [`config`]: command-line parsing.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ```
//! let trace = bracketty::evaluate("{()}[]");
//! assert!(trace.is_valid);
//! assert_eq!(trace.steps.len(), 6);
//! ```

pub mod config;
pub mod error;
pub mod replay;
pub mod report;
pub mod trace;
pub mod ui;

pub use trace::{evaluate, Step, StepKind, StepStatus, Trace};
