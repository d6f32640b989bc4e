//! Stack pane: open brackets as cells, oldest on the left

use super::{pane_block, CELL_WIDTH};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the stack snapshot of the current step
///
/// When the stack is deeper than the pane is wide, the oldest entries are
/// dropped from view.
pub fn render_stack_pane(frame: &mut Frame, area: Rect, stack: Option<&[char]>) {
    let block = pane_block(" Stack (bottom → top) ", false);

    let stack = match stack {
        Some(stack) if !stack.is_empty() => stack,
        _ => {
            let paragraph = Paragraph::new("(empty)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let label = format!("depth {}", stack.len());
    let visible_cells =
        (area.width.saturating_sub(2) as usize).saturating_sub(label.len()) / CELL_WIDTH;
    // Keep the top of the stack in view
    let start = stack.len().saturating_sub(visible_cells.max(1));

    let mut spans = Vec::new();
    for (depth, c) in stack.iter().enumerate().skip(start) {
        let is_top = depth + 1 == stack.len();
        let mut style = Style::default().bg(DEFAULT_THEME.stack_cell).fg(Color::Black);
        if is_top {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", c), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
