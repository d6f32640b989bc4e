//! Editable input line

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Render the input line; in editing mode the terminal cursor sits at `cursor`
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    cursor: usize,
    is_editing: bool,
) {
    let title = if is_editing {
        " Input (Enter: check, Esc: done) "
    } else {
        " Input (e: edit, c: check) "
    };
    let block = pane_block(title, is_editing);

    let paragraph = if input.is_empty() && !is_editing {
        Paragraph::new("Enter brackets (e.g., {()}[])")
            .style(Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Paragraph::new(input).style(Style::default().fg(DEFAULT_THEME.fg))
    };

    // Keep the cursor visible on narrow terminals
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = cursor.saturating_sub(inner_width.saturating_sub(1));
    let offset = u16::try_from(scroll).unwrap_or(u16::MAX);
    frame.render_widget(paragraph.block(block).scroll((0, offset)), area);

    if is_editing {
        let column = u16::try_from(cursor - scroll).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(column);
        frame.set_cursor_position((x, area.y + 1));
    }
}
