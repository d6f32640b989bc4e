//! TUI pane rendering modules
//!
//! Each pane exports a single `render_*_pane()` function that draws from
//! borrowed state and keeps no state of its own.
//!
//! - [`editor`]: the editable input line
//! - [`chars`]: the checked input as cells, current character highlighted
//! - [`stack`]: the stack snapshot of the current step
//! - [`message`]: the current step's message, colored by status
//! - [`log`]: every revealed step
//! - [`status`]: status bar with keybindings and playback state

pub mod chars;
pub mod editor;
pub mod log;
pub mod message;
pub mod stack;
pub mod status;

pub use chars::render_chars_pane;
pub use editor::render_editor_pane;
pub use log::render_log_pane;
pub use message::render_message_pane;
pub use stack::render_stack_pane;
pub use status::{render_status_bar, PlaybackBadge};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Columns taken by one boxed character and its separator
const CELL_WIDTH: usize = 4;

/// Bordered block with the shared focus styling
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Spaces are invisible inside a cell
fn visible_char(c: char) -> char {
    if c == ' ' {
        '·'
    } else {
        c
    }
}
