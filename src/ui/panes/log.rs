//! Trace log pane listing every revealed step

use super::{pane_block, visible_char};
use crate::trace::{Step, StepStatus};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn step_line(step: &Step, is_current: bool) -> Line<'_> {
    let ch = match step.ch {
        Some(c) => format!("'{}'", visible_char(c)),
        None => "end".to_string(),
    };
    let color = match step.status {
        StepStatus::Error => DEFAULT_THEME.error,
        StepStatus::Valid => DEFAULT_THEME.fg,
        StepStatus::Unset => DEFAULT_THEME.comment,
    };
    let mut message_style = Style::default().fg(color);
    if is_current {
        message_style = message_style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(
            if is_current { "▸ " } else { "  " },
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
        Span::styled(
            format!("[{:>3}] ", step.index),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("{:<6}", ch), Style::default().fg(DEFAULT_THEME.bracket)),
        Span::styled(step.message.as_str(), message_style),
    ])
}

/// Render the revealed steps, keeping `scroll_offset` within bounds
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Trace ", is_focused);

    if steps.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let last = steps.len() - 1;
    let all_items: Vec<ListItem> = steps
        .iter()
        .enumerate()
        .map(|(idx, step)| ListItem::new(step_line(step, idx == last)))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
